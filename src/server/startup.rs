use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{
    bootstrap::{ensure_database_schema, BootstrapReport},
    config::Config,
    error::Error,
};

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Connect to the database and bring its schema and reference data up to date
pub async fn prepare_database(
    config: &Config,
) -> Result<(DatabaseConnection, BootstrapReport), Error> {
    let db = connect_to_database(config).await?;
    let report = ensure_database_schema(&db, &config.bootstrap_options(), None).await?;

    Ok((db, report))
}
