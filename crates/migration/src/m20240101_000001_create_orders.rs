//! Create `orders` table.
//!
//! One row per placed order; `created_by` is the acting user id taken from the
//! request header and is not a foreign key (users live in another service).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(string_len(Orders::Address, 255).not_null())
                    .col(string_len(Orders::Item, 255).not_null())
                    .col(big_integer(Orders::CreatedBy).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_created_by")
                    .table(Orders::Table)
                    .col(Orders::CreatedBy)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, Id, Address, Item, CreatedBy }
