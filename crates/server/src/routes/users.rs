use axum::{extract::State, Json};
use service::users::User;

use crate::{
    errors::JsonApiError,
    extract::{ApiPath, RequestUser},
    state::UsersState,
};

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    params(("request_user_id" = i64, Header, description = "Acting user id")),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::UserDoc]),
        (status = 500, description = "Store unreadable")
    )
)]
pub async fn list_users(
    State(state): State<UsersState>,
    _user: RequestUser,
) -> Result<Json<Vec<User>>, JsonApiError> {
    Ok(Json(state.store.get_all_users().await?))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(
        ("id" = i64, Path, description = "User id"),
        ("request_user_id" = i64, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_user(
    State(state): State<UsersState>,
    _user: RequestUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<User>, JsonApiError> {
    Ok(Json(state.store.get_user_by_id(id).await?))
}
