pub mod orders;
pub mod users;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::{OrdersApiDoc, UsersApiDoc};
use crate::state::{OrdersState, UsersState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Router for the orders service: health, `/api/orders`, and API docs.
pub fn build_orders_router(state: OrdersState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/api/orders", get(orders::list_orders).post(orders::create_order))
        .with_state(state);

    let docs = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", OrdersApiDoc::openapi());
    with_tracing(api.merge(docs).layer(cors))
}

/// Router for the users service: health, `/api/users`, and API docs.
pub fn build_users_router(state: UsersState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/api/users", get(users::list_users))
        .route("/api/users/:id", get(users::get_user))
        .with_state(state);

    let docs = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", UsersApiDoc::openapi());
    with_tracing(api.merge(docs).layer(cors))
}

fn with_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            // one INFO span per request with method and path
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(
                DefaultOnRequest::new()
                    .level(Level::INFO),
            )
            // status code and latency
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            // 5xx and friends
            .on_failure(
                DefaultOnFailure::new()
                    .level(Level::ERROR),
            )
    )
}
