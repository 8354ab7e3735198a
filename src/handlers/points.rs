// src/handlers/points.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        item::ItemResponse,
        point::{PointDetailResponse, PointResponse, PointsResponse},
    },
};

// ---
// Payload: CreatePoint
// ---
// O corpo é JSON puro; 'items' é um array de inteiros de verdade, não a
// string separada por vírgula que o formulário antigo mandava.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePointPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(email(message = "O e-mail informado não é válido."))]
    pub email: String,

    #[validate(length(min = 1, message = "O whatsapp é obrigatório."))]
    pub whatsapp: String,

    pub latitude: f64,
    pub longitude: f64,

    #[validate(length(min = 1, message = "A cidade é obrigatória."))]
    pub city: String,

    #[validate(length(equal = 2, message = "A UF deve ter exatamente 2 caracteres."))]
    pub uf: String,

    #[validate(length(min = 1, message = "Informe ao menos um item coletado."))]
    pub items: Vec<i64>,

    // Nome de um arquivo já disponível em uploads/, quando o ponto tiver foto.
    pub image: Option<String>,
}

// ---
// Handler: create_point
// ---
#[utoipa::path(
    post,
    path = "/points",
    tag = "Points",
    request_body = CreatePointPayload,
    responses(
        (status = 201, description = "Ponto cadastrado com seus itens", body = PointResponse),
        (status = 400, description = "Campos inválidos ou itens inexistentes")
    )
)]
pub async fn create_point(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePointPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Validação padrão do Validator (campos, e-mail, UF, lista não vazia)
    payload.validate()?;

    // O serviço cuida da transação: ponto + vínculos, tudo ou nada.
    let (point, _links) = app_state
        .point_service
        .register(
            payload.image.as_deref(),
            &payload.name,
            &payload.email,
            &payload.whatsapp,
            payload.latitude,
            payload.longitude,
            &payload.city,
            &payload.uf,
            &payload.items,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PointResponse::new(point, &app_state.assets)),
    ))
}

// ---
// Query: busca de pontos
// ---
#[derive(Debug, Deserialize)]
pub struct SearchPointsQuery {
    pub city: String,
    pub uf: String,
    // Lista separada por vírgula, ex: "items=1,2". Ausente = nenhum filtro
    // casado = resultado vazio.
    pub items: Option<String>,
}

/// Converte o parâmetro "1,2,3" em ids. String vazia (o caso degenerado do
/// split) vira lista vazia; token não numérico é erro de validação.
fn parse_items_param(raw: &str) -> Result<Vec<i64>, AppError> {
    let mut ids = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let id: i64 = token.parse().map_err(|_| {
            let mut errors = ValidationErrors::new();
            let mut err = ValidationError::new("items");
            err.message =
                Some("O parâmetro 'items' deve ser uma lista de inteiros separados por vírgula.".into());
            errors.add("items".into(), err);
            AppError::ValidationError(errors)
        })?;
        ids.push(id);
    }
    Ok(ids)
}

// ---
// Handler: search_points
// ---
#[utoipa::path(
    get,
    path = "/points",
    tag = "Points",
    params(
        ("city" = String, Query, description = "Município (comparação exata)"),
        ("uf" = String, Query, description = "UF com 2 caracteres (comparação exata)"),
        ("items" = Option<String>, Query, description = "Ids de itens separados por vírgula, ex: 1,2")
    ),
    responses(
        (status = 200, description = "Pontos que coletam algum dos itens na cidade/UF (sem duplicatas)", body = PointsResponse),
        (status = 400, description = "Parâmetro 'items' malformado")
    )
)]
pub async fn search_points(
    State(app_state): State<AppState>,
    Query(query): Query<SearchPointsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let item_ids = match query.items.as_deref() {
        Some(raw) => parse_items_param(raw)?,
        None => Vec::new(),
    };

    let points = app_state
        .point_service
        .search(&query.city, &query.uf, &item_ids)
        .await?;

    let points = points
        .into_iter()
        .map(|point| PointResponse::new(point, &app_state.assets))
        .collect();

    Ok((StatusCode::OK, Json(PointsResponse { points })))
}

// ---
// Handler: get_point
// ---
#[utoipa::path(
    get,
    path = "/points/{id}",
    tag = "Points",
    params(
        ("id" = i64, Path, description = "Id do ponto de coleta")
    ),
    responses(
        (status = 200, description = "Ponto com seus itens coletados", body = PointDetailResponse),
        (status = 404, description = "Não existe ponto com esse id")
    )
)]
pub async fn get_point(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let (point, items) = app_state.point_service.get_detail(id).await?;

    let response = PointDetailResponse {
        point: PointResponse::new(point, &app_state.assets),
        items: items
            .into_iter()
            .map(|item| ItemResponse::new(item, &app_state.assets))
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_valido() -> CreatePointPayload {
        CreatePointPayload {
            name: "Eco Center".to_string(),
            email: "a@b.com".to_string(),
            whatsapp: "5511999999999".to_string(),
            latitude: -1.0,
            longitude: -2.0,
            city: "Boa Vista".to_string(),
            uf: "RR".to_string(),
            items: vec![1, 3],
            image: None,
        }
    }

    #[test]
    fn payload_valido_passa() {
        assert!(payload_valido().validate().is_ok());
    }

    #[test]
    fn payload_sem_itens_e_rejeitado() {
        let mut payload = payload_valido();
        payload.items = vec![];

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("items"));
    }

    #[test]
    fn email_malformado_e_rejeitado() {
        let mut payload = payload_valido();
        payload.email = "nao-e-email".to_string();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn uf_com_tamanho_errado_e_rejeitada() {
        let mut payload = payload_valido();
        payload.uf = "RRR".to_string();
        assert!(payload.validate().is_err());

        payload.uf = "R".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn parse_items_aceita_lista_com_espacos() {
        assert_eq!(parse_items_param("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_items_param(" 1 , 3 ").unwrap(), vec![1, 3]);
    }

    #[test]
    fn parse_items_de_string_vazia_vira_lista_vazia() {
        // O split de "" renderia um token vazio; aqui ele é descartado.
        assert_eq!(parse_items_param("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_items_param(" , ").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn parse_items_rejeita_token_nao_numerico() {
        assert!(matches!(
            parse_items_param("1,abc"),
            Err(AppError::ValidationError(_))
        ));
    }
}
