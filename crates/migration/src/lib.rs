//! Migrator registering entity-specific migrations in dependency order.
//! Secondary indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user;
mod m20240101_000002_create_room;
mod m20240101_000003_create_booking;
mod m20240101_000004_create_payment;
mod m20240101_000005_create_service;
mod m20240101_000006_create_booking_service;
mod m20240101_000007_create_discount;
mod m20240101_000008_create_review;
mod m20240101_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user::Migration),
            Box::new(m20240101_000002_create_room::Migration),
            Box::new(m20240101_000003_create_booking::Migration),
            Box::new(m20240101_000004_create_payment::Migration),
            Box::new(m20240101_000005_create_service::Migration),
            Box::new(m20240101_000006_create_booking_service::Migration),
            Box::new(m20240101_000007_create_discount::Migration),
            Box::new(m20240101_000008_create_review::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000009_add_indexes::Migration),
        ]
    }
}
