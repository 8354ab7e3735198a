// src/services/point_service.rs

use sqlx::PgPool;
use validator::{ValidationError, ValidationErrors};

use crate::{
    common::error::AppError,
    db::{ItemRepository, PointRepository},
    models::{
        item::Item,
        point::{Point, PointItem},
    },
};

/// Remove duplicatas preservando uma ordem estável (a chave composta de
/// point_items rejeitaria o par repetido; aqui tratamos antes do INSERT).
fn dedupe_ids(ids: &[i64]) -> Vec<i64> {
    let mut unique: Vec<i64> = ids.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique
}

#[derive(Clone)]
pub struct PointService {
    point_repo: PointRepository,
    item_repo: ItemRepository,
    pool: PgPool, // Usamos a pool para iniciar transações
}

impl PointService {
    pub fn new(point_repo: PointRepository, item_repo: ItemRepository, pool: PgPool) -> Self {
        Self {
            point_repo,
            item_repo,
            pool,
        }
    }

    /// LÓGICA DE NEGÓCIO: Cadastra um ponto de coleta e, atomicamente,
    /// os vínculos com os itens que ele coleta. Se qualquer vínculo
    /// falhar, o ponto também não é gravado (rollback da transação).
    pub async fn register(
        &self,
        image: Option<&str>,
        name: &str,
        email: &str,
        whatsapp: &str,
        latitude: f64,
        longitude: f64,
        city: &str,
        uf: &str,
        item_ids: &[i64],
    ) -> Result<(Point, Vec<PointItem>), AppError> {
        let item_ids = dedupe_ids(item_ids);

        // Regra reforçada no servidor, não só no formulário do cliente:
        // um ponto sem itens não faz sentido no mapa.
        if item_ids.is_empty() {
            let mut errors = ValidationErrors::new();
            let mut err = ValidationError::new("length");
            err.message = Some("Informe ao menos um item coletado.".into());
            errors.add("items".into(), err);
            return Err(AppError::ValidationError(errors));
        }

        // 1. Inicia a transação
        let mut tx = self.pool.begin().await?;

        // 2. Confere se todos os itens pedidos existem no catálogo.
        // Id inexistente é erro do chamador (400), não um 500 de FK.
        let existing = self
            .item_repo
            .find_existing_ids(&mut *tx, &item_ids)
            .await?;
        let missing: Vec<i64> = item_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::UnknownItems(missing));
        }

        // 3. Cria o ponto
        let point = self
            .point_repo
            .create_point(
                &mut *tx, image, name, email, whatsapp, latitude, longitude, city, uf,
            )
            .await?;

        // 4. Cria os vínculos com os itens, na mesma transação
        let links = self
            .point_repo
            .link_items(&mut *tx, point.id, &item_ids)
            .await?;

        // 5. Commit: só agora o ponto fica visível, já com os itens completos
        tx.commit().await?;

        Ok((point, links))
    }

    /// Busca pontos por cidade/UF e itens coletados.
    /// Sem itens informados não há o que casar: devolvemos lista vazia
    /// em vez de erro (e em vez do token vazio do split de string).
    pub async fn search(
        &self,
        city: &str,
        uf: &str,
        item_ids: &[i64],
    ) -> Result<Vec<Point>, AppError> {
        let item_ids = dedupe_ids(item_ids);
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.point_repo.search(city, uf, &item_ids).await
    }

    /// Detalhe de um ponto: o registro e os itens que ele coleta.
    pub async fn get_detail(&self, point_id: i64) -> Result<(Point, Vec<Item>), AppError> {
        let point = self
            .point_repo
            .find_by_id(point_id)
            .await?
            .ok_or(AppError::PointNotFound)?;

        let items = self.item_repo.find_for_point(point.id).await?;

        Ok((point, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_remove_repetidos() {
        assert_eq!(dedupe_ids(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn dedupe_de_vazio_continua_vazio() {
        assert_eq!(dedupe_ids(&[]), Vec::<i64>::new());
    }
}
