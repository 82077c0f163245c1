//! Create `user` table.
//!
//! Guests of the hotel; `email` is unique, `password` holds an argon2 hash.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::UserId))
                    .col(string_len(User::Surname, 255))
                    .col(string_len(User::Name, 255))
                    .col(string_len(User::Email, 254).unique_key())
                    .col(string_len(User::Password, 128))
                    .col(string_len_null(User::Phone, 20))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User { Table, UserId, Surname, Name, Email, Password, Phone }
