use std::{net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::{OrdersState, UsersState};
use service::{runtime, users::UserStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn parse_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.bind_addr().parse()?)
}

async fn serve(app: Router, addr: SocketAddr, name: &'static str) -> anyhow::Result<()> {
    info!(%addr, service = name, "starting http server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Connect, migrate, and build the orders router.
pub async fn orders_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    cfg.database.validate()?;
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    models::db::test_connection(&db).await?;
    migration::Migrator::up(&db, None).await?;
    info!("orders schema up to date");
    Ok(routes::build_orders_router(OrdersState::new(db), build_cors()))
}

/// Open (or create) the users document and build the users router.
pub async fn users_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let path = Path::new(&cfg.user_store.path);
    runtime::ensure_data_dir(path).await?;
    let store = UserStore::open(path).await?;
    info!(path = %store.path().display(), "user store ready");
    Ok(routes::build_users_router(UsersState { store }, build_cors()))
}

/// Public entry: run the orders HTTP service until it fails.
pub async fn run_orders(cfg: AppConfig) -> anyhow::Result<()> {
    let app = orders_app(&cfg).await?;
    serve(app, parse_addr(&cfg.orders)?, "orders").await
}

/// Public entry: run the users HTTP service until it fails.
pub async fn run_users(cfg: AppConfig) -> anyhow::Result<()> {
    let app = users_app(&cfg).await?;
    serve(app, parse_addr(&cfg.users)?, "users").await
}
