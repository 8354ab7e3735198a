// src/models/item.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::assets::AssetUrls;

// --- Item do catálogo (linha da tabela 'items') ---
// Dados fixos de seed: a API nunca cria nem altera itens.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: i64,
    pub title: String,
    // Nome do arquivo em uploads/ (ex: "lampadas.svg")
    pub image: String,
}

// --- Item serializado para os clientes ---
// Troca o nome do arquivo pela URL absoluta que o front consegue renderizar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    #[schema(example = "Lâmpadas")]
    pub title: String,
    #[schema(example = "http://localhost:3333/uploads/lampadas.svg")]
    pub image_url: String,
}

impl ItemResponse {
    pub fn new(item: Item, assets: &AssetUrls) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: assets.image_url(&item.image),
        }
    }
}

// Envelope de GET /items: { "items": [...] }
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<ItemResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializa_com_image_url_absoluta() {
        let assets = AssetUrls::new("http://localhost:3333".to_string());
        let item = Item {
            id: 1,
            title: "Lâmpadas".to_string(),
            image: "lampadas.svg".to_string(),
        };

        let json = serde_json::to_value(ItemResponse::new(item, &assets)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Lâmpadas",
                "image_url": "http://localhost:3333/uploads/lampadas.svg",
            })
        );
    }
}
