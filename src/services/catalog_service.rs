// src/services/catalog_service.rs

use crate::{common::error::AppError, db::ItemRepository, models::item::Item};

// Serviço do catálogo. Hoje é só leitura, mas mantém a mesma camada dos
// demais serviços para os handlers não falarem direto com o repositório.
#[derive(Clone)]
pub struct CatalogService {
    item_repo: ItemRepository,
}

impl CatalogService {
    pub fn new(item_repo: ItemRepository) -> Self {
        Self { item_repo }
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        self.item_repo.find_all().await
    }
}
