use std::path::PathBuf;

use migration::{Migrator, MigratorTrait, SchemaManager, SqlDirectory, MARKER_TABLE};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::bootstrap::logger::BootstrapLogger;

const SOURCE: &str = "baseline";

/// Where the baseline migrations come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineSource {
    /// The migrations compiled into the `migration` crate.
    Embedded,
    /// A folder of versioned SQL scripts. A missing folder means there is nothing to apply.
    Directory(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineOutcome {
    /// The configured migrations folder does not exist.
    NoMigrations,
    /// The marker table exists, so the baseline was applied before.
    AlreadyApplied,
    /// Baseline migrations ran; holds the names of those applied.
    Applied { migrations: Vec<String> },
}

/// Runs the baseline migrations unless the database already has them.
///
/// The marker table is probed instead of a migration version so databases created before
/// versioned migrations existed are recognized as already carrying the baseline.
///
/// # Returns
/// - `Ok(BaselineOutcome)` - What the baseline phase did
/// - `Err(DbErr)` - Introspection or a migration failed
pub async fn run_baseline(
    db: &DatabaseConnection,
    source: &BaselineSource,
    logger: &dyn BootstrapLogger,
) -> Result<BaselineOutcome, DbErr> {
    let directory = match source {
        BaselineSource::Embedded => None,
        BaselineSource::Directory(path) => {
            let directory = SqlDirectory::new(path);
            if !directory.exists() {
                logger.log(
                    &format!(
                        "No migrations folder at {}, skipping baseline migrations",
                        path.display()
                    ),
                    SOURCE,
                );
                return Ok(BaselineOutcome::NoMigrations);
            }
            Some(directory)
        }
    };

    let manager = SchemaManager::new(db);
    if manager.has_table(MARKER_TABLE).await? {
        logger.log(
            &format!(
                "Table {} exists, skipping baseline migrations",
                MARKER_TABLE
            ),
            SOURCE,
        );
        return Ok(BaselineOutcome::AlreadyApplied);
    }

    let migrations = match directory {
        Some(directory) => directory.up(db).await?,
        None => {
            let pending = Migrator::get_pending_migrations(db)
                .await?
                .iter()
                .map(|migration| migration.name().to_string())
                .collect();

            Migrator::up(db, None).await?;

            pending
        }
    };

    logger.log(
        &format!("Applied {} baseline migrations", migrations.len()),
        SOURCE,
    );

    Ok(BaselineOutcome::Applied { migrations })
}
