mod dancer_levels;
mod idempotence;
mod ledger_backfill;
mod reference_data;
mod startup;

use pointe::server::bootstrap::{ensure_database_schema, BootstrapOptions, BootstrapReport};
use pointe_test_utils::prelude::*;

/// Runs the bootstrap with default options and logging discarded.
pub async fn bootstrap(test: &TestContext) -> Result<BootstrapReport, pointe::server::error::Error> {
    let discard = |_: &str, _: &str| {};
    ensure_database_schema(&test.db, &BootstrapOptions::default(), Some(&discard)).await
}
