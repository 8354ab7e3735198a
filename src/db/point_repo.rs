// src/db/point_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::point::{Point, PointItem},
};

// O repositório de pontos de coleta: escrita (sempre via transação do
// serviço) e as duas leituras do sistema, busca e detalhe.
#[derive(Clone)]
pub struct PointRepository {
    pool: PgPool,
}

impl PointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere o ponto e devolve a linha completa (com id e created_at).
    /// Aceita um executor: no cadastro, recebe a transação aberta.
    pub async fn create_point<'e, E>(
        &self,
        executor: E,
        image: Option<&str>,
        name: &str,
        email: &str,
        whatsapp: &str,
        latitude: f64,
        longitude: f64,
        city: &str,
        uf: &str,
    ) -> Result<Point, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Point>(
            r#"
            INSERT INTO points (image, name, email, whatsapp, latitude, longitude, city, uf)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(image)
        .bind(name)
        .bind(email)
        .bind(whatsapp)
        .bind(latitude)
        .bind(longitude)
        .bind(city)
        .bind(uf)
        .fetch_one(executor)
        .await
        .map_err(AppError::DatabaseError)
    }

    /// Cria os vínculos ponto <-> item em lote, num único INSERT.
    /// Roda na mesma transação do ponto: ou grava tudo, ou nada.
    pub async fn link_items<'e, E>(
        &self,
        executor: E,
        point_id: i64,
        item_ids: &[i64],
    ) -> Result<Vec<PointItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, PointItem>(
            r#"
            INSERT INTO point_items (point_id, item_id)
            SELECT $1, unnest($2::bigint[])
            RETURNING point_id, item_id
            "#,
        )
        .bind(point_id)
        .bind(item_ids)
        .fetch_all(executor)
        .await
        .map_err(AppError::DatabaseError)
    }

    // Busca um ponto pelo seu ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Point>, AppError> {
        sqlx::query_as::<_, Point>("SELECT * FROM points WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Busca por cidade/UF (comparação exata) e itens aceitos.
    /// O DISTINCT é quem garante que um ponto que coleta vários dos itens
    /// pedidos aparece uma única vez no resultado.
    pub async fn search(
        &self,
        city: &str,
        uf: &str,
        item_ids: &[i64],
    ) -> Result<Vec<Point>, AppError> {
        sqlx::query_as::<_, Point>(
            r#"
            SELECT DISTINCT points.*
            FROM points
            JOIN point_items ON point_items.point_id = points.id
            WHERE point_items.item_id = ANY($1)
              AND points.city = $2
              AND points.uf = $3
            ORDER BY points.id
            "#,
        )
        .bind(item_ids)
        .bind(city)
        .bind(uf)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)
    }
}
