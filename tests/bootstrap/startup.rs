use std::collections::HashMap;

use pointe::server::{bootstrap::BaselineOutcome, config::Config, startup};

/// Tests the startup path with a SQL migrations folder supplied by configuration.
///
/// Expected: scripts applied, then the database is patched and seeded
#[tokio::test]
async fn prepares_database_from_sql_folder() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("0001_legacy.sql"),
        "CREATE TABLE dancers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            family_id INTEGER,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            age INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        CREATE TABLE transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            dancer_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            type TEXT NOT NULL,
            amount REAL NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );",
    )?;

    let vars = HashMap::from([
        ("DATABASE_URL", "sqlite::memory:".to_string()),
        ("MIGRATIONS_DIR", dir.path().display().to_string()),
    ]);
    let config = Config::from_lookup(|name| vars.get(name).cloned())?;

    let (_db, report) = startup::prepare_database(&config).await?;

    assert_eq!(
        report.baseline,
        BaselineOutcome::Applied {
            migrations: vec!["0001_legacy".to_string()],
        }
    );
    assert_eq!(report.backfill.fees_scanned, 0);
    assert_eq!(report.seed.inserted(), 7);

    Ok(())
}
