use crate::db::{connect_with_config, test_connection, DatabaseConfig, DATABASE_URL};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};
use anyhow::Result;

use super::setup_test_db;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let start = Instant::now();
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    assert!(start.elapsed() < Duration::from_secs(5));
    Ok(())
}

/// Test connection with custom pool settings
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if setup_test_db().await.is_none() {
        return Ok(());
    }

    let config = DatabaseConfig {
        url: DATABASE_URL.clone(),
        max_connections: 5,
        min_connections: 1,
        connect_timeout: Duration::from_secs(10),
        ..Default::default()
    };
    let db = connect_with_config(&config).await?;
    test_connection(&db).await?;
    Ok(())
}

#[test]
fn config_conversion_keeps_pool_bounds() {
    let src = configs::DatabaseConfig {
        url: "postgres://localhost/hotel".into(),
        max_connections: 7,
        acquire_timeout_secs: 3,
        ..Default::default()
    };
    let cfg = DatabaseConfig::from(&src);
    assert_eq!(cfg.max_connections, 7);
    assert_eq!(cfg.acquire_timeout, Duration::from_secs(3));
    assert_eq!(cfg.url, "postgres://localhost/hotel");
}
