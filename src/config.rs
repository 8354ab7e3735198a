// src/config.rs

use crate::{
    common::assets::AssetUrls,
    db::{ItemRepository, PointRepository},
    services::{CatalogService, PointService},
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub assets: AssetUrls,
    pub catalog_service: CatalogService,
    pub point_service: PointService,
}

impl AppState {
    // Carrega as configurações e monta o estado da aplicação.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let public_base_url =
            env::var("PUBLIC_BASE_URL").expect("PUBLIC_BASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, public_base_url))
    }

    /// Monta o estado sobre uma pool já criada (os testes de integração
    /// usam este caminho, com a pool que o harness do sqlx fornece).
    pub fn with_pool(db_pool: PgPool, public_base_url: String) -> Self {
        // --- Monta o gráfico de dependências ---
        let item_repo = ItemRepository::new(db_pool.clone());
        let point_repo = PointRepository::new(db_pool.clone());

        let catalog_service = CatalogService::new(item_repo.clone());
        let point_service = PointService::new(point_repo, item_repo, db_pool.clone());

        Self {
            db_pool,
            assets: AssetUrls::new(public_base_url),
            catalog_service,
            point_service,
        }
    }
}
