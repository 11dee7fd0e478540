//! Baseline migrations supplied as a folder of plain SQL scripts.
//!
//! Each `*.sql` file is one migration, versioned by its file stem and applied in
//! lexicographic order (`0001_init.sql`, `0002_fees.sql`, ...). Applied versions are
//! recorded in `schema_migrations` so a script runs at most once per database.

use std::path::{Path, PathBuf};

use sea_orm_migration::{
    prelude::*,
    schema::*,
    sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait},
};

/// A single versioned SQL script found in a migrations folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlScript {
    /// File stem of the script, used as its version.
    pub version: String,
    pub path: PathBuf,
}

/// Runner for a folder of versioned SQL migration scripts.
#[derive(Debug, Clone)]
pub struct SqlDirectory {
    path: PathBuf,
}

impl SqlDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether the folder exists at all. A missing folder means there is nothing to apply.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Lists the folder's `*.sql` scripts sorted by version.
    pub fn scripts(&self) -> Result<Vec<SqlScript>, DbErr> {
        let entries = std::fs::read_dir(&self.path).map_err(|e| io_error(&self.path, e))?;

        let mut scripts = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| io_error(&self.path, e))?.path();

            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("sql") {
                continue;
            }

            let Some(version) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            scripts.push(SqlScript {
                version: version.to_string(),
                path,
            });
        }

        scripts.sort_by(|a, b| a.version.cmp(&b.version));

        Ok(scripts)
    }

    /// Applies every script not yet recorded in `schema_migrations`.
    ///
    /// Each script and its bookkeeping row commit together, so a failing script leaves
    /// the previously applied ones in place and is retried on the next run.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Versions applied by this call, in order
    /// - `Err(DbErr)` - The folder could not be read or a script failed
    pub async fn up(&self, db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
        let manager = SchemaManager::new(db);

        manager
            .create_table(
                Table::create()
                    .table(SchemaMigration::Table)
                    .if_not_exists()
                    .col(string(SchemaMigration::Version).primary_key())
                    .col(timestamp(SchemaMigration::AppliedAt))
                    .to_owned(),
            )
            .await?;

        let applied = applied_versions(db).await?;

        let mut newly_applied = Vec::new();
        for script in self.scripts()? {
            if applied.contains(&script.version) {
                continue;
            }

            let sql =
                std::fs::read_to_string(&script.path).map_err(|e| io_error(&script.path, e))?;

            let txn = db.begin().await?;
            txn.execute_unprepared(&sql).await?;
            txn.execute(
                &Query::insert()
                    .into_table(SchemaMigration::Table)
                    .columns([SchemaMigration::Version, SchemaMigration::AppliedAt])
                    .values_panic([
                        script.version.clone().into(),
                        Expr::current_timestamp().into(),
                    ])
                    .to_owned(),
            )
            .await?;
            txn.commit().await?;

            newly_applied.push(script.version);
        }

        Ok(newly_applied)
    }
}

async fn applied_versions<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, DbErr> {
    let rows = db
        .query_all(
            &Query::select()
                .column(SchemaMigration::Version)
                .from(SchemaMigration::Table)
                .to_owned(),
        )
        .await?;

    rows.iter()
        .map(|row| row.try_get::<String>("", "version"))
        .collect()
}

fn io_error(path: &Path, err: std::io::Error) -> DbErr {
    DbErr::Custom(format!(
        "Failed to read migrations from {}: {}",
        path.display(),
        err
    ))
}

#[derive(DeriveIden)]
enum SchemaMigration {
    #[sea_orm(iden = "schema_migrations")]
    Table,
    Version,
    AppliedAt,
}
