use pointe::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let (_db, report) = match startup::prepare_database(&config).await {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::error!("Database bootstrap failed: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        applied_steps = report.applied_steps().count(),
        charges = report.backfill.charges_created,
        payments = report.backfill.payments_created,
        "Database ready"
    );
}
