use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub address: String,
    pub item: String,
    pub created_by: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_required(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, address: &str, item: &str, created_by: i64) -> Result<Model, errors::ModelError> {
    validate_required("address", address)?;
    validate_required("item", item)?;
    let am = ActiveModel {
        address: Set(address.to_string()),
        item: Set(item.to_string()),
        created_by: Set(created_by),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// All orders in insertion order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect_with_config, DatabaseConfig};
    use migration::MigratorTrait;

    async fn fresh_db() -> anyhow::Result<DatabaseConnection> {
        let db = connect_with_config(&DatabaseConfig::in_memory_sqlite()).await?;
        migration::Migrator::up(&db, None).await?;
        Ok(db)
    }

    #[tokio::test]
    async fn create_assigns_ids_and_list_keeps_insertion_order() -> anyhow::Result<()> {
        let db = fresh_db().await?;
        let a = create(&db, "123 Test St", "Product A", 1).await?;
        let b = create(&db, "456 Other St", "Product B", 2).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_by, 1);

        let all = list(&db).await?;
        assert_eq!(all, vec![a, b]);
        Ok(())
    }

    #[tokio::test]
    async fn blank_fields_rejected_before_insert() -> anyhow::Result<()> {
        let db = fresh_db().await?;
        assert!(matches!(create(&db, "  ", "Product A", 1).await, Err(errors::ModelError::Validation(_))));
        assert!(matches!(create(&db, "123 Test St", "", 1).await, Err(errors::ModelError::Validation(_))));
        assert!(list(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_table_surfaces_db_error() -> anyhow::Result<()> {
        let db = connect_with_config(&DatabaseConfig::in_memory_sqlite()).await?;
        assert!(matches!(list(&db).await, Err(errors::ModelError::Db(_))));
        Ok(())
    }
}
