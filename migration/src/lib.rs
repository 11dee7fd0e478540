pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::schema;

mod m20240901_000001_family;
mod m20240901_000002_dancer;
mod m20240901_000003_fee;
mod m20240901_000004_transaction;
pub mod patch;
mod sql_directory;

pub use patch::{patch_steps, PatchStep, StepOutcome};
pub use sql_directory::{SqlDirectory, SqlScript};

/// Table whose presence marks a database as already carrying the baseline schema.
pub const MARKER_TABLE: &str = "dancers";

/// Baseline schema as it stood when versioned migrations were introduced.
///
/// Everything added afterwards is applied by the idempotent patch steps run at startup,
/// so databases created before this migrator existed can be brought forward without
/// replaying it.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_family::Migration),
            Box::new(m20240901_000002_dancer::Migration),
            Box::new(m20240901_000003_fee::Migration),
            Box::new(m20240901_000004_transaction::Migration),
        ]
    }
}
