// src/lib.rs

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::config::AppState;

/// Monta o router da aplicação. Separado do start_server para os testes
/// conseguirem montar a mesma árvore de rotas sobre outro estado.
pub fn build_router(app_state: AppState) -> Router {
    // CORS aberto: a API é pública e consumida pelo site e pelo app mobile.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/items", get(handlers::items::list_items))
        .route(
            "/points",
            get(handlers::points::search_points).post(handlers::points::create_point),
        )
        .route("/points/{id}", get(handlers::points::get_point))
        // Os SVGs do catálogo (e eventuais fotos de pontos) são servidos
        // daqui; é para cá que as image_url apontam.
        .nest_service("/uploads", ServeDir::new("uploads"))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state)
}

pub async fn start_server() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização (schema + seed do catálogo)
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = build_router(app_state);

    // Inicia o servidor
    let addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3333".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
