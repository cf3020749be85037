use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, address: &str, item: &str, created_by: i64) -> Result<models::order::Model, ServiceError>;
    async fn list(&self) -> Result<Vec<models::order::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, address: &str, item: &str, created_by: i64) -> Result<models::order::Model, ServiceError> {
        Ok(models::order::create(&self.db, address, item, created_by).await?)
    }

    async fn list(&self) -> Result<Vec<models::order::Model>, ServiceError> {
        Ok(models::order::list(&self.db).await?)
    }
}
