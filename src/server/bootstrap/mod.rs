//! Startup schema bootstrap.
//!
//! [`ensure_database_schema`] brings any database, fresh or years old, to the current
//! schema and data shape. It runs once before the server accepts traffic:
//!
//! 1. Baseline migrations, unless the migrations folder is missing or the marker table
//!    shows the baseline is already in place
//! 2. Every patch step of [`migration::patch_steps`], in order, each checking the live
//!    schema first
//! 3. Dancer profile normalization
//! 4. Backfill of legacy fees into the transaction ledger
//! 5. Reference data seeding
//!
//! Each statement commits on its own. Errors are not caught: the first failure aborts
//! startup, and because every step is idempotent the next start picks up where it stopped.

pub mod baseline;
pub mod logger;

#[cfg(test)]
mod tests;

use chrono::{NaiveDate, Utc};
use migration::{patch_steps, SchemaManager, StepOutcome};
use sea_orm::DatabaseConnection;

pub use baseline::{BaselineOutcome, BaselineSource};
pub use logger::{BootstrapLogger, TracingLogger};

use crate::server::{
    error::Error,
    model::reference::DEFAULT_STUDIO_KEY,
    service::{
        backfill::{BackfillSummary, LedgerBackfillService},
        dancer::DancerProfileService,
        seed::{ReferenceSeedService, SeedSummary},
    },
};

const SOURCE: &str = "bootstrap";

/// Legacy table the ledger is backfilled from.
const LEGACY_FEES_TABLE: &str = "fees";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub baseline: BaselineSource,
    /// Studio the accounting connection rows are seeded for.
    pub studio_key: String,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            baseline: BaselineSource::Embedded,
            studio_key: DEFAULT_STUDIO_KEY.to_string(),
        }
    }
}

/// Outcome of one patch step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub name: String,
    pub outcome: StepOutcome,
}

/// Everything a bootstrap run did.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapReport {
    pub baseline: BaselineOutcome,
    pub steps: Vec<StepReport>,
    pub dancers_normalized: u64,
    pub backfill: BackfillSummary,
    pub seed: SeedSummary,
}

impl BootstrapReport {
    /// True when the run changed nothing and only performed existence checks.
    pub fn is_noop(&self) -> bool {
        !matches!(self.baseline, BaselineOutcome::Applied { .. })
            && self
                .steps
                .iter()
                .all(|step| step.outcome == StepOutcome::Skipped)
            && self.dancers_normalized == 0
            && self.backfill.created() == 0
            && self.seed.inserted() == 0
    }

    pub fn applied_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps
            .iter()
            .filter(|step| step.outcome == StepOutcome::Applied)
    }
}

/// Brings the database to the current schema and data shape.
///
/// Safe to call on every start. When `logger` is `None` lines go to `tracing`.
///
/// # Arguments
/// - `db` - Connection every statement runs on
/// - `options` - Baseline source and studio key
/// - `logger` - Receives one line per step
///
/// # Returns
/// - `Ok(BootstrapReport)` - Every step completed
/// - `Err(Error::DbErr)` - A statement failed; later steps did not run
pub async fn ensure_database_schema(
    db: &DatabaseConnection,
    options: &BootstrapOptions,
    logger: Option<&dyn BootstrapLogger>,
) -> Result<BootstrapReport, Error> {
    let tracing_logger = TracingLogger;
    let logger: &dyn BootstrapLogger = match logger {
        Some(logger) => logger,
        None => &tracing_logger,
    };

    let today = Utc::now().date_naive();

    let baseline = baseline::run_baseline(db, &options.baseline, logger).await?;
    let steps = apply_patch_steps(db, logger).await?;

    let dancers_normalized = DancerProfileService::new(db)
        .normalize_profiles(today)
        .await?;
    logger.log(
        &format!("Normalized {} dancer profiles", dancers_normalized),
        "dancers",
    );

    let backfill = backfill_legacy_fees(db, today, logger).await?;

    let seed = ReferenceSeedService::new(db)
        .seed(&options.studio_key)
        .await?;
    logger.log(
        &format!(
            "Seeded {} fee types and {} accounting connections",
            seed.fee_types_inserted, seed.connections_inserted
        ),
        "seed",
    );

    Ok(BootstrapReport {
        baseline,
        steps,
        dancers_normalized,
        backfill,
        seed,
    })
}

async fn apply_patch_steps(
    db: &DatabaseConnection,
    logger: &dyn BootstrapLogger,
) -> Result<Vec<StepReport>, Error> {
    let manager = SchemaManager::new(db);
    let mut reports = Vec::new();

    for step in patch_steps() {
        let name = step.name();
        let outcome = step.apply(&manager).await?;

        match outcome {
            StepOutcome::Applied => logger.log(&format!("Added {}", name), SOURCE),
            StepOutcome::Skipped => logger.log(&format!("Found {}", name), SOURCE),
        }

        reports.push(StepReport { name, outcome });
    }

    Ok(reports)
}

async fn backfill_legacy_fees(
    db: &DatabaseConnection,
    today: NaiveDate,
    logger: &dyn BootstrapLogger,
) -> Result<BackfillSummary, Error> {
    let manager = SchemaManager::new(db);
    if !manager.has_table(LEGACY_FEES_TABLE).await? {
        logger.log("No legacy fees table, skipping ledger backfill", "backfill");
        return Ok(BackfillSummary::default());
    }

    let summary = LedgerBackfillService::new(db).backfill(today).await?;
    logger.log(
        &format!(
            "Scanned {} legacy fees, created {} charges and {} payments",
            summary.fees_scanned, summary.charges_created, summary.payments_created
        ),
        "backfill",
    );

    Ok(summary)
}
