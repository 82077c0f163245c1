//! Database-backed tests. Each test returns early when `SKIP_DB_TESTS` is set
//! or PostgreSQL cannot be reached.
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use migration::MigratorTrait;

use crate::db::connect;

/// Database connection and configuration tests
pub mod db_tests;

/// CRUD operations tests for all models
pub mod crud_tests;


static MIGRATED: OnceCell<bool> = OnceCell::const_new();

pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let migrated = MIGRATED
        .get_or_init(|| async {
            match connect().await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !*migrated {
        return None;
    }
    connect().await.ok()
}

pub(crate) fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, &uuid::Uuid::new_v4().simple().to_string()[..12])
}
