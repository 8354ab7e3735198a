// src/models/point.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::assets::AssetUrls;
use crate::models::item::ItemResponse;

// --- Ponto de coleta (linha da tabela 'points') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Point {
    pub id: i64,
    // Nome do arquivo de imagem do ponto, quando houver.
    pub image: Option<String>,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub created_at: DateTime<Utc>,
}

// --- Vínculo ponto <-> item (linha da tabela 'point_items') ---
// Criado sempre em lote, na mesma transação do ponto dono.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PointItem {
    pub point_id: i64,
    pub item_id: i64,
}

// --- Ponto serializado para os clientes ---
// Igual ao registro do banco, mais a image_url absoluta (ou null).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointResponse {
    pub id: i64,
    pub image: Option<String>,
    pub image_url: Option<String>,
    #[schema(example = "Eco Center")]
    pub name: String,
    #[schema(example = "contato@ecocenter.com.br")]
    pub email: String,
    #[schema(example = "5511999999999")]
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    #[schema(example = "Boa Vista")]
    pub city: String,
    #[schema(example = "RR")]
    pub uf: String,
    pub created_at: DateTime<Utc>,
}

impl PointResponse {
    pub fn new(point: Point, assets: &AssetUrls) -> Self {
        let image_url = assets.optional_image_url(point.image.as_deref());
        Self {
            id: point.id,
            image: point.image,
            image_url,
            name: point.name,
            email: point.email,
            whatsapp: point.whatsapp,
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city,
            uf: point.uf,
            created_at: point.created_at,
        }
    }
}

// Envelope de GET /points: { "points": [...] }
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    pub points: Vec<PointResponse>,
}

// Envelope de GET /points/{id}: { "point": ..., "items": [...] }
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PointDetailResponse {
    pub point: PointResponse,
    pub items: Vec<ItemResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ponto_sem_imagem() -> Point {
        Point {
            id: 7,
            image: None,
            name: "Eco Center".to_string(),
            email: "a@b.com".to_string(),
            whatsapp: "5511999999999".to_string(),
            latitude: -1.0,
            longitude: -2.0,
            city: "Boa Vista".to_string(),
            uf: "RR".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn ponto_sem_imagem_serializa_null() {
        let assets = AssetUrls::new("http://localhost:3333".to_string());
        let json = serde_json::to_value(PointResponse::new(ponto_sem_imagem(), &assets)).unwrap();

        assert_eq!(json["image_url"], serde_json::Value::Null);
        assert_eq!(json["name"], "Eco Center");
        assert_eq!(json["uf"], "RR");
    }

    #[test]
    fn ponto_com_imagem_ganha_url_absoluta() {
        let assets = AssetUrls::new("http://localhost:3333".to_string());
        let mut point = ponto_sem_imagem();
        point.image = Some("ponto-7.png".to_string());

        let response = PointResponse::new(point, &assets);
        assert_eq!(
            response.image_url.as_deref(),
            Some("http://localhost:3333/uploads/ponto-7.png")
        );
    }
}
