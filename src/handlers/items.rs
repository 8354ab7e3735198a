// src/handlers/items.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::item::{ItemResponse, ItemsResponse},
};

// GET /items
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "Catálogo completo de itens coletáveis", body = ItemsResponse)
    )
)]
pub async fn list_items(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.catalog_service.list_items().await?;

    // Serializa cada item com a URL pública da imagem.
    let items = items
        .into_iter()
        .map(|item| ItemResponse::new(item, &app_state.assets))
        .collect();

    Ok((StatusCode::OK, Json(ItemsResponse { items })))
}
