use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CreateOrderDoc { pub address: String, pub item: String }

#[derive(ToSchema)]
pub struct OrderDoc { pub id: i32, pub address: String, pub item: String, pub created_by: i64 }

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// `admin`, `staff` or `customer`
    pub user_type: String,
    pub hashed_password: String,
    pub created_by: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::orders::create_order,
        crate::routes::orders::list_orders,
    ),
    components(schemas(HealthResponse, CreateOrderDoc, OrderDoc)),
    tags((name = "health"), (name = "orders"))
)]
pub struct OrdersApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
    ),
    components(schemas(HealthResponse, UserDoc)),
    tags((name = "health"), (name = "users"))
)]
pub struct UsersApiDoc;
