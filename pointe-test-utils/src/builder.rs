//! Declarative test builder for Phase 1 setup.

use migration::{patch_steps, Migrator, MigratorTrait, SchemaManager};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// How much of the production schema to create before the test runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SchemaLevel {
    /// Only tables added with `with_table`.
    Empty,
    /// The legacy baseline migrations.
    Baseline,
    /// The baseline plus every patch step.
    Studio,
}

/// Builder for declarative test initialization.
pub struct TestBuilder {
    schema: SchemaLevel,
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new builder with an empty database.
    pub fn new() -> Self {
        Self {
            schema: SchemaLevel::Empty,
            tables: Vec::new(),
        }
    }

    /// Apply the baseline migrations only, producing a database in the legacy shape
    /// (no dancer levels, no ledger columns, no accounting tables).
    pub fn with_baseline_schema(mut self) -> Self {
        self.schema = self.schema.max(SchemaLevel::Baseline);
        self
    }

    /// Apply the baseline migrations and every patch step, producing the current schema
    /// without any seeded or backfilled rows.
    pub fn with_studio_schema(mut self) -> Self {
        self.schema = SchemaLevel::Studio;
        self
    }

    /// Add a table generated from an entity definition.
    ///
    /// Tables are created after any migrations, in the order they were added.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pointe_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), pointe_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Family)
    ///     .with_table(Dancer)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready for use
    /// - `Err(TestError::DbErr)` - A migration, patch or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        if self.schema >= SchemaLevel::Baseline {
            Migrator::up(&context.db, None).await?;
        }

        if self.schema == SchemaLevel::Studio {
            let manager = SchemaManager::new(&context.db);
            for step in patch_steps() {
                step.apply(&manager).await?;
            }
        }

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
