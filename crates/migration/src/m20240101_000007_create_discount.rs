//! Create `discount` and its many-to-many join `discount_service`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discount::Table)
                    .if_not_exists()
                    .col(pk_auto(Discount::DiscountId))
                    .col(string_len(Discount::Name, 255))
                    .col(text(Discount::Description))
                    .col(double(Discount::Percentage))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DiscountService::Table)
                    .if_not_exists()
                    .col(integer(DiscountService::DiscountId))
                    .col(integer(DiscountService::ServiceId))
                    .primary_key(
                        Index::create()
                            .col(DiscountService::DiscountId)
                            .col(DiscountService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discount_service_discount")
                            .from(DiscountService::Table, DiscountService::DiscountId)
                            .to(Discount::Table, Discount::DiscountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discount_service_service")
                            .from(DiscountService::Table, DiscountService::ServiceId)
                            .to(Service::Table, Service::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DiscountService::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Discount::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Discount { Table, DiscountId, Name, Description, Percentage }

#[derive(DeriveIden)]
enum DiscountService { Table, DiscountId, ServiceId }

#[derive(DeriveIden)]
enum Service { Table, ServiceId }
