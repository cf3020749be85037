use std::sync::Arc;

use service::orders::{OrderService, SeaOrmOrderRepository};
use service::users::UserStore;

#[derive(Clone)]
pub struct OrdersState {
    pub orders: Arc<OrderService<SeaOrmOrderRepository>>,
}

impl OrdersState {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmOrderRepository { db });
        Self { orders: Arc::new(OrderService::new(repo)) }
    }
}

#[derive(Clone)]
pub struct UsersState {
    pub store: Arc<UserStore>,
}
