use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::users::{User, UserStore, UserType};
use tower::Service;

use server::routes;
use server::state::UsersState;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("users_service_{}.json", uuid::Uuid::new_v4()))
}

fn admin() -> User {
    User {
        id: 1,
        username: "admin".into(),
        email: "admin@baran.com".into(),
        full_name: "Admin Admin".into(),
        user_type: UserType::Admin,
        hashed_password: "$2b$12$16kNu5IW80k1Tw7xz2H3iOCsz0.oMZ7q5OSGa/OIfOae0WGFe8aI2".into(),
        created_by: 1,
    }
}

async fn build_app(users: &[User]) -> anyhow::Result<(Router, std::sync::Arc<UserStore>)> {
    let store = UserStore::open(temp_store_path()).await?;
    store.dump_users(users).await?;
    let app = routes::build_users_router(UsersState { store: store.clone() }, cors());
    Ok((app, store))
}

fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().uri(uri).header("request_user_id", "1").body(Body::empty())?)
}

async fn body_json(resp: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn lists_dumped_users() -> anyhow::Result<()> {
    let (app, store) = build_app(&[admin()]).await?;

    let resp = app.clone().call(get("/api/users")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "username": "admin",
            "email": "admin@baran.com",
            "full_name": "Admin Admin",
            "user_type": "admin",
            "hashed_password": "$2b$12$16kNu5IW80k1Tw7xz2H3iOCsz0.oMZ7q5OSGa/OIfOae0WGFe8aI2",
            "created_by": 1
        }])
    );

    store.destroy().await?;
    Ok(())
}

#[tokio::test]
async fn finds_user_by_id_and_404s_otherwise() -> anyhow::Result<()> {
    let (app, store) = build_app(&[admin()]).await?;

    let resp = app.clone().call(get("/api/users/1")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = serde_json::from_value(body_json(resp).await?)?;
    assert_eq!(user, admin());

    let resp = app.clone().call(get("/api/users/42")?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await?["error"], "Not Found");

    store.destroy().await?;
    Ok(())
}

#[tokio::test]
async fn corrupted_store_is_server_error() -> anyhow::Result<()> {
    let (app, store) = build_app(&[admin()]).await?;
    tokio::fs::write(store.path(), b"not json").await?;

    let resp = app.clone().call(get("/api/users")?).await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await?["error"], "Storage Error");

    store.destroy().await?;
    Ok(())
}

#[tokio::test]
async fn requires_request_user_header() -> anyhow::Result<()> {
    let (app, store) = build_app(&[admin()]).await?;
    let req = Request::builder().uri("/api/users/1").body(Body::empty())?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    store.destroy().await?;
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_json_bad_request() -> anyhow::Result<()> {
    let (app, store) = build_app(&[admin()]).await?;

    let resp = app.clone().call(get("/api/users/abc")?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await?;
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

    store.destroy().await?;
    Ok(())
}
