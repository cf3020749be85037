#![cfg(test)]
use std::path::PathBuf;

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Fresh in-memory database with the orders schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory_sqlite()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Unique path under the system temp dir; nothing is created.
pub fn temp_json_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", uuid::Uuid::new_v4()))
}
