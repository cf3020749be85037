use anyhow::Result;
use serde::Deserialize;
use anyhow::{anyhow, Context};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "ServerConfig::orders_default")]
    pub orders: ServerConfig,
    #[serde(default = "ServerConfig::users_default")]
    pub users: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub user_store: UserStoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            orders: ServerConfig::orders_default(),
            users: ServerConfig::users_default(),
            database: DatabaseConfig::default(),
            user_store: UserStoreConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_host() -> String { "127.0.0.1".into() }

impl ServerConfig {
    pub fn orders_default() -> Self {
        Self { host: default_host(), port: 8000, worker_threads: Some(4) }
    }

    pub fn users_default() -> Self {
        Self { host: default_host(), port: 8001, worker_threads: Some(4) }
    }

    /// Override host/port from `<PREFIX>_HOST` / `<PREFIX>_PORT` when set.
    pub fn apply_env(&mut self, prefix: &str) {
        if let Ok(host) = std::env::var(format!("{prefix}_HOST")) {
            self.host = host;
        }
        if let Some(port) = std::env::var(format!("{prefix}_PORT")).ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Location of the JSON document backing the users service.
#[derive(Debug, Clone, Deserialize)]
pub struct UserStoreConfig {
    #[serde(default = "default_user_store_path")]
    pub path: String,
}

fn default_user_store_path() -> String { "data/users.json".into() }

impl Default for UserStoreConfig {
    fn default() -> Self {
        Self { path: default_user_store_path() }
    }
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// Load `path`; a missing file yields the defaults. Unreadable
/// or malformed files are still errors.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content).with_context(|| format!("invalid config file {path}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(anyhow::Error::new(e).context(format!("cannot read config file {path}"))),
    }
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file if present, otherwise defaults; env overrides applied either way.
    pub fn load_or_env() -> Result<Self> {
        let mut cfg = load_or_default(&config_path())?;
        cfg.orders.apply_env("ORDERS");
        cfg.users.apply_env("USERS");
        if let Ok(path) = std::env::var("USER_STORE_PATH") {
            cfg.user_store.path = path;
        }
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Database settings are only normalized here; the orders service
    /// validates them itself since the users service never connects.
    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.orders.normalize()?;
        self.users.normalize()?;
        self.user_store.validate()?;
        self.database.normalize_from_env();
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl UserStoreConfig {
    fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!("user_store.path is empty"));
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        // fall back to DATABASE_URL when the file leaves url empty
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [orders]
            host = "0.0.0.0"
            port = 9000

            [users]
            port = 9001
            worker_threads = 2

            [database]
            url = "sqlite::memory:"
            max_connections = 1
            min_connections = 1

            [user_store]
            path = "/tmp/users_service.json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.orders.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.users.host, "127.0.0.1");
        assert_eq!(cfg.users.worker_threads, Some(2));
        assert_eq!(cfg.user_store.path, "/tmp/users_service.json");
        assert!(cfg.database.validate().is_ok());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.orders.port, 8000);
        assert_eq!(cfg.users.port, 8001);
        assert_eq!(cfg.user_store.path, "data/users.json");
        assert_eq!(cfg.database.max_connections, 10);
    }

    #[test]
    fn rejects_unknown_database_scheme() {
        let db = DatabaseConfig { url: "mysql://localhost/x".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/orders".into(),
            max_connections: 1,
            min_connections: 2,
            ..DatabaseConfig::default()
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut s = ServerConfig { host: " ".into(), port: 1, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
    }

    fn temp_config(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("storefront_{name}_{}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn absent_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("storefront_absent_{}.toml", std::process::id()));
        let cfg = load_or_default(&path.to_string_lossy()).unwrap();
        assert_eq!(cfg.user_store.path, "data/users.json");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_config("malformed", "[user_store\npath = \"/srv/users.json\"\n");
        let err = load_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn mistyped_value_is_an_error() {
        let path = temp_config("mistyped", "[orders]\nport = \"eight thousand\"\n");
        assert!(load_or_default(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn existing_file_is_loaded() {
        let path = temp_config("valid", "[user_store]\npath = \"/srv/users.json\"\n");
        assert_eq!(load_or_default(&path).unwrap().user_store.path, "/srv/users.json");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unreadable_path_is_an_error() {
        // a directory exists but cannot be read as a file
        assert!(load_or_default(&std::env::temp_dir().to_string_lossy()).is_err());
    }

    #[test]
    fn zero_port_rejected() {
        let mut s = ServerConfig { host: "localhost".into(), port: 0, worker_threads: None };
        assert!(s.normalize().is_err());
    }
}
