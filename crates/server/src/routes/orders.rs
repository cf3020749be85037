use axum::{extract::State, Json};
use service::orders::NewOrder;
use tracing::info;

use crate::{errors::JsonApiError, extract::RequestUser, state::OrdersState};

#[utoipa::path(
    post, path = "/api/orders", tag = "orders",
    request_body = crate::openapi::CreateOrderDoc,
    params(("request_user_id" = i64, Header, description = "Acting user id")),
    responses(
        (status = 200, description = "Created", body = crate::openapi::OrderDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create_order(
    State(state): State<OrdersState>,
    RequestUser(user_id): RequestUser,
    Json(input): Json<NewOrder>,
) -> Result<Json<models::order::Model>, JsonApiError> {
    info!(address = %input.address, item = %input.item, user_id, "order_create_request");
    let order = state.orders.create_order(input, user_id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get, path = "/api/orders", tag = "orders",
    params(("request_user_id" = i64, Header, description = "Acting user id")),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::OrderDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list_orders(
    State(state): State<OrdersState>,
    RequestUser(user_id): RequestUser,
) -> Result<Json<Vec<models::order::Model>>, JsonApiError> {
    let orders = state.orders.list_orders(user_id).await?;
    Ok(Json(orders))
}
