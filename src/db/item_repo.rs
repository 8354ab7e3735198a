// src/db/item_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::item::Item};

// O repositório do catálogo, responsável pelas leituras na tabela 'items'.
// O catálogo é seed: não existe caminho de escrita aqui.
#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Lista o catálogo inteiro (sem paginação: são poucas categorias fixas).
    pub async fn find_all(&self) -> Result<Vec<Item>, AppError> {
        sqlx::query_as::<_, Item>("SELECT id, title, image FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Retorna, dentre os ids informados, os que de fato existem no catálogo.
    /// Aceita um executor para poder rodar dentro da transação de cadastro.
    pub async fn find_existing_ids<'e, E>(
        &self,
        executor: E,
        ids: &[i64],
    ) -> Result<Vec<i64>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_scalar::<_, i64>("SELECT id FROM items WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(executor)
            .await
            .map_err(AppError::DatabaseError)
    }

    // Itens vinculados a um ponto (usado pelo detalhe do ponto).
    pub async fn find_for_point(&self, point_id: i64) -> Result<Vec<Item>, AppError> {
        sqlx::query_as::<_, Item>(
            r#"
            SELECT items.id, items.title, items.image
            FROM items
            JOIN point_items ON point_items.item_id = items.id
            WHERE point_items.point_id = $1
            ORDER BY items.id
            "#,
        )
        .bind(point_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::DatabaseError)
    }
}
