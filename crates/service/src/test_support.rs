#![cfg(test)]
use std::str::FromStr;

use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use models::{room, user};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::from_file().unwrap_or_else(|_| DatabaseConfig::from_env());
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    cfg
}

/// A migrated connection, or `None` when `SKIP_DB_TESTS` is set or the
/// database is unreachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    // Run migrations exactly once, with a throwaway connection
    let ready = MIGRATED
        .get_or_init(|| async {
            let Ok(db) = connect_with_config(&test_config()).await else {
                eprintln!("skip: cannot connect to db");
                return false;
            };
            let ok = migration::Migrator::up(&db, None).await.is_ok();
            drop(db);
            ok
        })
        .await;
    if !*ready {
        return None;
    }
    // Return a fresh connection for the current test's runtime
    connect_with_config(&test_config()).await.ok()
}

pub fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, &uuid::Uuid::new_v4().simple().to_string()[..12])
}

pub async fn seed_user(db: &DatabaseConnection) -> anyhow::Result<user::Model> {
    Ok(user::create(
        db,
        user::NewUser {
            surname: "Test".into(),
            name: "Guest".into(),
            email: format!("{}@example.com", unique("guest")),
            password_hash: "$argon2id$v=19$test".into(),
            phone: None,
        },
    )
    .await?)
}

pub async fn seed_room(db: &DatabaseConnection, availability: i32) -> anyhow::Result<room::Model> {
    Ok(room::create(
        db,
        room::NewRoom {
            room_number: unique("room"),
            room_type: "standard".into(),
            price: Decimal::from_str("100.00")?,
            availability,
        },
    )
    .await?)
}
