//! Create `room` table.
//!
//! `availability` is a signed counter; the bulk adjustment may drive it below zero.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::RoomId))
                    .col(string_len(Room::RoomNumber, 50).unique_key())
                    .col(string_len(Room::RoomType, 50))
                    .col(decimal_len(Room::Price, 10, 2))
                    .col(integer(Room::Availability))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Room::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Room { Table, RoomId, RoomNumber, RoomType, Price, Availability }
