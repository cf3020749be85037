use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, SqlxSqliteConnector, Statement};
use std::time::Duration;
use tracing::info;

/// Connection pool settings resolved from `configs::DatabaseConfig` or the environment.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&configs::DatabaseConfig::default())
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// Single-connection in-memory SQLite; every pooled connection would
    /// otherwise see its own empty database.
    pub fn in_memory_sqlite() -> Self {
        Self {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Self::default()
        }
    }

    /// True for `sqlite::memory:` and `mode=memory` URLs: the database lives
    /// only as long as its connection.
    pub fn is_in_memory_sqlite(&self) -> bool {
        let url = self.url.to_lowercase();
        url.starts_with("sqlite:") && (url.contains(":memory:") || url.contains("mode=memory"))
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = if cfg.is_in_memory_sqlite() {
        connect_in_memory(cfg).await?
    } else {
        Database::connect(cfg.connect_options()).await?
    };
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

// In-memory data dies with its connection, so the pool never recycles it.
async fn connect_in_memory(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .acquire_timeout(cfg.acquire_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(&cfg.url)
        .await?;
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Round-trip a trivial query to verify the pool is usable.
pub async fn test_connection(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    db.execute(Statement::from_string(backend, "SELECT 1".to_string())).await?;
    Ok(())
}
