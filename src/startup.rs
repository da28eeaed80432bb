use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::DatabaseConfig, error::Error};

/// Install the fmt subscriber, filtered by `LOG_LEVEL` (default `info`).
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init();
}

/// Open the single connection every phase runs on.
///
/// The pool is capped at one connection so statements execute strictly in order on one
/// session.
pub async fn connect_to_database(config: &DatabaseConfig) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    tracing::info!(backend = config.scheme(), "Connecting to database");
    let db = Database::connect(opt).await?;

    Ok(db)
}
