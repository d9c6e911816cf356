use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{
    Addresses, Carts, Categories, CategoryAspects, Descriptions, ImageToTexts, OrderItems, Orders,
    Payments, ProductRanks, Products, Reviews, Users, carts,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Parents first so foreign keys resolve.
        create_table(manager, &schema, Users).await?;
        create_table(manager, &schema, Categories).await?;
        create_table(manager, &schema, CategoryAspects).await?;
        create_table(manager, &schema, Products).await?;
        create_table(manager, &schema, Addresses).await?;
        create_table(manager, &schema, Payments).await?;
        create_table(manager, &schema, Carts).await?;
        create_table(manager, &schema, Orders).await?;
        create_table(manager, &schema, OrderItems).await?;
        create_table(manager, &schema, Reviews).await?;
        create_table(manager, &schema, Descriptions).await?;
        create_table(manager, &schema, ProductRanks).await?;
        create_table(manager, &schema, ImageToTexts).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_carts_user_product")
                    .table(Carts)
                    .col(carts::Column::UserId)
                    .col(carts::Column::ProductId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table(manager, ImageToTexts).await?;
        drop_table(manager, ProductRanks).await?;
        drop_table(manager, Descriptions).await?;
        drop_table(manager, Reviews).await?;
        drop_table(manager, OrderItems).await?;
        drop_table(manager, Orders).await?;
        drop_table(manager, Carts).await?;
        drop_table(manager, Payments).await?;
        drop_table(manager, Addresses).await?;
        drop_table(manager, Products).await?;
        drop_table(manager, CategoryAspects).await?;
        drop_table(manager, Categories).await?;
        drop_table(manager, Users).await
    }
}

async fn create_table<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned(),
        )
        .await
}

async fn drop_table<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}
