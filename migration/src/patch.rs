//! Incremental schema patches applied after the baseline on every startup.
//!
//! Each patch checks the live schema before changing it, so running the whole list against
//! an already patched database only performs existence checks. Patches are additive: they
//! add columns, indexes and tables and never drop or rewrite anything.

use sea_orm_migration::{prelude::*, schema::*};

static IDX_TRANSACTION_LEGACY_FEE: &str = "idx-transactions-legacy_fee_id-type";
static IDX_CONNECTION_STUDIO_PROVIDER: &str = "idx-accounting_connections-studio_key-provider";
static IDX_SYNC_RECORD_TRANSACTION: &str =
    "idx-accounting_sync_records-studio_key-provider-transaction_id";
static IDX_SYNC_RECORD_IDEMPOTENCY_KEY: &str =
    "idx-accounting_sync_records-studio_key-provider-idempotency_key";
static FK_SYNC_RECORD_TRANSACTION_ID: &str = "fk-accounting_sync_records-transaction_id";

/// Result of applying a single patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The schema was changed.
    Applied,
    /// The column, index or table already existed.
    Skipped,
}

/// One additive, independently idempotent schema change.
pub enum PatchStep {
    /// Adds `column` to `table` unless it already exists.
    Column {
        table: &'static str,
        column: &'static str,
        def: fn(Alias) -> ColumnDef,
    },
    /// Creates index `name` on `table` unless an index with that name exists.
    Index {
        table: &'static str,
        name: &'static str,
        create: IndexCreateStatement,
    },
    /// Creates `table` unless it already exists.
    Table {
        table: &'static str,
        create: TableCreateStatement,
    },
}

impl PatchStep {
    /// Human readable name used in startup logs.
    pub fn name(&self) -> String {
        match self {
            PatchStep::Column { table, column, .. } => format!("column {}.{}", table, column),
            PatchStep::Index { name, .. } => format!("index {}", name),
            PatchStep::Table { table, .. } => format!("table {}", table),
        }
    }

    pub async fn apply(&self, manager: &SchemaManager<'_>) -> Result<StepOutcome, DbErr> {
        match self {
            PatchStep::Column { table, column, def } => {
                if manager.has_column(*table, *column).await? {
                    return Ok(StepOutcome::Skipped);
                }

                manager
                    .alter_table(
                        Table::alter()
                            .table(Alias::new(*table))
                            .add_column(def(Alias::new(*column)))
                            .to_owned(),
                    )
                    .await?;
            }
            PatchStep::Index {
                table,
                name,
                create,
            } => {
                if manager.has_index(*table, *name).await? {
                    return Ok(StepOutcome::Skipped);
                }

                manager.create_index(create.clone()).await?;
            }
            PatchStep::Table { table, create } => {
                if manager.has_table(*table).await? {
                    return Ok(StepOutcome::Skipped);
                }

                manager.create_table(create.clone()).await?;
            }
        }

        Ok(StepOutcome::Applied)
    }
}

/// Every patch in the order it must run: column additions first, then the tables that
/// were introduced later, each followed by its indexes.
pub fn patch_steps() -> Vec<PatchStep> {
    vec![
        PatchStep::Column {
            table: "dancers",
            column: "level",
            def: |col| string_null(col),
        },
        PatchStep::Column {
            table: "dancers",
            column: "birthdate",
            def: |col| date_null(col),
        },
        PatchStep::Column {
            table: "transactions",
            column: "fee_type",
            def: |col| string(col).default("other").to_owned(),
        },
        PatchStep::Column {
            table: "transactions",
            column: "sync_status",
            def: |col| string(col).default("pending").to_owned(),
        },
        PatchStep::Column {
            table: "transactions",
            column: "legacy_fee_id",
            def: |col| integer_null(col),
        },
        PatchStep::Index {
            table: "transactions",
            name: IDX_TRANSACTION_LEGACY_FEE,
            create: Index::create()
                .name(IDX_TRANSACTION_LEGACY_FEE)
                .table(Transactions::Table)
                .col(Transactions::LegacyFeeId)
                .col(Transactions::Type)
                .if_not_exists()
                .to_owned(),
        },
        PatchStep::Table {
            table: "fee_types",
            create: fee_types_table(),
        },
        PatchStep::Table {
            table: "accounting_connections",
            create: accounting_connections_table(),
        },
        PatchStep::Index {
            table: "accounting_connections",
            name: IDX_CONNECTION_STUDIO_PROVIDER,
            create: Index::create()
                .name(IDX_CONNECTION_STUDIO_PROVIDER)
                .table(AccountingConnections::Table)
                .col(AccountingConnections::StudioKey)
                .col(AccountingConnections::Provider)
                .unique()
                .if_not_exists()
                .to_owned(),
        },
        PatchStep::Table {
            table: "accounting_sync_records",
            create: accounting_sync_records_table(),
        },
        PatchStep::Index {
            table: "accounting_sync_records",
            name: IDX_SYNC_RECORD_TRANSACTION,
            create: Index::create()
                .name(IDX_SYNC_RECORD_TRANSACTION)
                .table(AccountingSyncRecords::Table)
                .col(AccountingSyncRecords::StudioKey)
                .col(AccountingSyncRecords::Provider)
                .col(AccountingSyncRecords::TransactionId)
                .unique()
                .if_not_exists()
                .to_owned(),
        },
        PatchStep::Index {
            table: "accounting_sync_records",
            name: IDX_SYNC_RECORD_IDEMPOTENCY_KEY,
            create: Index::create()
                .name(IDX_SYNC_RECORD_IDEMPOTENCY_KEY)
                .table(AccountingSyncRecords::Table)
                .col(AccountingSyncRecords::StudioKey)
                .col(AccountingSyncRecords::Provider)
                .col(AccountingSyncRecords::IdempotencyKey)
                .unique()
                .if_not_exists()
                .to_owned(),
        },
    ]
}

fn fee_types_table() -> TableCreateStatement {
    Table::create()
        .table(FeeTypes::Table)
        .if_not_exists()
        .col(string(FeeTypes::FeeType).primary_key())
        .col(string(FeeTypes::Label))
        .col(string_null(FeeTypes::QuickbooksAccountCode))
        .col(string_null(FeeTypes::XeroAccountCode))
        .col(timestamp(FeeTypes::CreatedAt))
        .to_owned()
}

fn accounting_connections_table() -> TableCreateStatement {
    Table::create()
        .table(AccountingConnections::Table)
        .if_not_exists()
        .col(pk_auto(AccountingConnections::Id))
        .col(string(AccountingConnections::StudioKey))
        .col(string(AccountingConnections::Provider))
        .col(string(AccountingConnections::Status).default("disconnected"))
        .col(string_null(AccountingConnections::ExternalTenantId))
        .col(text_null(AccountingConnections::AccessToken))
        .col(text_null(AccountingConnections::RefreshToken))
        .col(timestamp_null(AccountingConnections::TokenExpiresAt))
        .col(timestamp_null(AccountingConnections::ConnectedAt))
        .col(timestamp(AccountingConnections::CreatedAt))
        .col(timestamp(AccountingConnections::UpdatedAt))
        .to_owned()
}

fn accounting_sync_records_table() -> TableCreateStatement {
    Table::create()
        .table(AccountingSyncRecords::Table)
        .if_not_exists()
        .col(pk_auto(AccountingSyncRecords::Id))
        .col(string(AccountingSyncRecords::StudioKey))
        .col(string(AccountingSyncRecords::Provider))
        .col(integer(AccountingSyncRecords::TransactionId))
        .col(string(AccountingSyncRecords::IdempotencyKey))
        .col(string(AccountingSyncRecords::Fingerprint))
        .col(string(AccountingSyncRecords::Status).default("pending"))
        .col(string_null(AccountingSyncRecords::ExternalId))
        .col(integer(AccountingSyncRecords::RetryCount).default(0))
        .col(text_null(AccountingSyncRecords::LastError))
        .col(timestamp(AccountingSyncRecords::CreatedAt))
        .col(timestamp(AccountingSyncRecords::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name(FK_SYNC_RECORD_TRANSACTION_ID)
                .from(
                    AccountingSyncRecords::Table,
                    AccountingSyncRecords::TransactionId,
                )
                .to(Transactions::Table, Transactions::Id),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    Type,
    LegacyFeeId,
}

#[derive(DeriveIden)]
enum FeeTypes {
    Table,
    FeeType,
    Label,
    QuickbooksAccountCode,
    XeroAccountCode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AccountingConnections {
    Table,
    Id,
    StudioKey,
    Provider,
    Status,
    ExternalTenantId,
    AccessToken,
    RefreshToken,
    TokenExpiresAt,
    ConnectedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AccountingSyncRecords {
    Table,
    Id,
    StudioKey,
    Provider,
    TransactionId,
    IdempotencyKey,
    Fingerprint,
    Status,
    ExternalId,
    RetryCount,
    LastError,
    CreatedAt,
    UpdatedAt,
}
