use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::orders::repository::OrderRepository;

/// Create input: id and creator are filled in by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub address: String,
    pub item: String,
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.address.trim().is_empty() {
            return Err(ServiceError::Validation("address required".into()));
        }
        if self.item.trim().is_empty() {
            return Err(ServiceError::Validation("item required".into()));
        }
        Ok(())
    }
}

/// Application service for orders.
/// Every caller sees every order; the acting user only stamps `created_by`.
pub struct OrderService<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input))]
    pub async fn create_order(&self, input: NewOrder, acting_user_id: i64) -> Result<models::order::Model, ServiceError> {
        input.validate()?;
        let order = self.repo.create(&input.address, &input.item, acting_user_id).await?;
        info!(id = order.id, created_by = order.created_by, "order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self, acting_user_id: i64) -> Result<Vec<models::order::Model>, ServiceError> {
        let orders = self.repo.list().await?;
        info!(count = orders.len(), "orders listed");
        Ok(orders)
    }
}
