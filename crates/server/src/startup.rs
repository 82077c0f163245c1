use std::env;

use axum::Router;
use common::utils::logging::init_logging;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Where the settings came from. `Env` keeps the reason the file was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Env { reason: String },
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Call once a subscriber is installed.
    pub fn log_source(&self) {
        match &self.source {
            ConfigSource::File => info!("configuration loaded from file"),
            ConfigSource::Env { reason } => warn!(error = %reason, "config file unavailable, using environment"),
        }
    }
}

/// Settings from `config.toml` (or `CONFIG_PATH`); when no file can be read,
/// defaults overridden by `SERVER_HOST`, `SERVER_PORT` and `TOKIO_WORKER_THREADS`.
pub fn load_config() -> anyhow::Result<LoadedConfig> {
    let mut loaded = resolve_config(configs::load_default(), |key| env::var(key).ok());
    loaded.config.normalize_and_validate()?;
    Ok(loaded)
}

fn resolve_config(file: anyhow::Result<AppConfig>, lookup: impl Fn(&str) -> Option<String>) -> LoadedConfig {
    match file {
        Ok(config) => LoadedConfig { config, source: ConfigSource::File },
        Err(e) => LoadedConfig { config: config_from_env(lookup), source: ConfigSource::Env { reason: e.to_string() } },
    }
}

fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    let mut cfg = AppConfig::default();
    if let Some(host) = lookup("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
        cfg.server.worker_threads = Some(w);
    }
    cfg
}

/// Connect with the configured pool and apply pending migrations.
pub async fn connect_and_migrate(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    migration::Migrator::up(&db, None).await?;
    info!(max_connections = cfg.database.max_connections, "database ready");
    Ok(db)
}

pub fn app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

/// Connect, migrate and serve until the listener fails.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_and_migrate(&cfg).await?;
    let app = app(db);

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    info!(addr = %listener.local_addr()?, "hotel booking server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: load config, set up logging and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let loaded = load_config()?;
    init_logging(loaded.config.logging.is_json());
    loaded.log_source();
    serve(loaded.config).await
}
