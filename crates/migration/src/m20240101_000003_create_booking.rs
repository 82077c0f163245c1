//! Create `booking` table with FKs to `user` and `room`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::BookingId))
                    .col(timestamp_with_time_zone(Booking::BookingDate))
                    .col(timestamp_with_time_zone(Booking::CheckInDate))
                    .col(timestamp_with_time_zone(Booking::CheckOutDate))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::RoomId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::RoomId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, BookingId, BookingDate, CheckInDate, CheckOutDate, UserId, RoomId }

#[derive(DeriveIden)]
enum User { Table, UserId }

#[derive(DeriveIden)]
enum Room { Table, RoomId }
