use std::sync::Arc;

use assetledger_core::db::{self, DbPool};
use tempfile::TempDir;

/// Creates a scratch database in a temp directory and returns it with a
/// migrated pool. The TempDir must stay alive for the duration of the test.
pub fn setup_pool() -> (TempDir, Arc<DbPool>) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let data_dir = tmp.path().to_string_lossy().to_string();

    let db_path = db::init(&data_dir).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    (tmp, pool)
}
