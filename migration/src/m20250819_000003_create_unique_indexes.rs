use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The webhook upsert conflicts on these natural keys. Environments
        // that have not run this migration yet are handled by the
        // check-then-write fallback in the use cases.
        manager
            .create_index(
                Index::create()
                    .name("uq_orders_order_id")
                    .table(Orders::Table)
                    .col(Orders::OrderId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_crawls_eventbrite_id")
                    .table(Crawls::Table)
                    .col(Crawls::EventbriteId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_orders_order_id")
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_crawls_eventbrite_id")
                    .table(Crawls::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    OrderId,
}

#[derive(DeriveIden)]
enum Crawls {
    Table,
    EventbriteId,
}
