use std::sync::Arc;

use spendwise_core::db::{self, DbPool};
use tempfile::TempDir;

/// Creates a fresh on-disk database in a temp directory with all migrations
/// applied. The TempDir must be kept alive for the duration of the test.
pub fn setup_test_db() -> (TempDir, Arc<DbPool>) {
    std::env::remove_var("DATABASE_URL");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = db::init(dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    (dir, pool)
}
