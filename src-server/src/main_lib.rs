use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use assetledger_core::{
    assets::{AssetRepository, AssetService, AssetServiceTrait},
    db,
    persons::{PersonRepository, PersonService, PersonServiceTrait},
};

use crate::config::Config;

pub struct AppState {
    pub person_service: Arc<dyn PersonServiceTrait>,
    pub asset_service: Arc<dyn AssetServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let person_repository = Arc::new(PersonRepository::new(pool.clone()));
    let person_service = Arc::new(PersonService::new(person_repository));

    let asset_repository = Arc::new(AssetRepository::new(pool.clone()));
    let asset_service = Arc::new(AssetService::new(asset_repository));

    Ok(Arc::new(AppState {
        person_service,
        asset_service,
    }))
}
