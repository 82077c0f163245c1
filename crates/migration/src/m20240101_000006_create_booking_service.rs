//! Create `booking_service` line-item table (booking × service).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingService::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingService::BookingServiceId))
                    .col(integer(BookingService::BookingId))
                    .col(integer(BookingService::ServiceId))
                    .col(integer(BookingService::Quantity))
                    .col(timestamp_with_time_zone(BookingService::DateTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service_booking")
                            .from(BookingService::Table, BookingService::BookingId)
                            .to(Booking::Table, Booking::BookingId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service_service")
                            .from(BookingService::Table, BookingService::ServiceId)
                            .to(Service::Table, Service::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BookingService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BookingService { Table, BookingServiceId, BookingId, ServiceId, Quantity, DateTime }

#[derive(DeriveIden)]
enum Booking { Table, BookingId }

#[derive(DeriveIden)]
enum Service { Table, ServiceId }
