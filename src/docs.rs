// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Items ---
        handlers::items::list_items,

        // --- Points ---
        handlers::points::create_point,
        handlers::points::search_points,
        handlers::points::get_point,
    ),
    components(
        schemas(
            // --- Items ---
            models::item::Item,
            models::item::ItemResponse,
            models::item::ItemsResponse,

            // --- Points ---
            models::point::Point,
            models::point::PointItem,
            models::point::PointResponse,
            models::point::PointsResponse,
            models::point::PointDetailResponse,

            // --- Payloads ---
            handlers::points::CreatePointPayload,
        )
    ),
    tags(
        (name = "Items", description = "Catálogo de itens coletáveis"),
        (name = "Points", description = "Cadastro e busca de pontos de coleta")
    )
)]
pub struct ApiDoc;
