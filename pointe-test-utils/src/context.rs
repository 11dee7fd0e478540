//! Test context returned by `TestBuilder`.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment produced by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// ```ignore
/// let test = TestBuilder::new().with_studio_schema().build().await?;
///
/// let dancer_id = test.studio().insert_dancer(12).await?;
/// test.studio().insert_legacy_fee(dancer_id, "Tuition", Some(95.0), None, true).await?;
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Executes CREATE TABLE statements queued by the builder.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
