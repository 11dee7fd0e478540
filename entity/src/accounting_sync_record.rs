use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AccountingProvider, SyncRecordStatus};

/// Outbox record linking a ledger transaction to the object created for it in an
/// external accounting system.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounting_sync_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub studio_key: String,
    pub provider: AccountingProvider,
    pub transaction_id: i32,
    pub idempotency_key: String,
    /// Hash of the synced payload, used to detect edits after a successful sync.
    pub fingerprint: String,
    pub status: SyncRecordStatus,
    pub external_id: Option<String>,
    pub retry_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub last_error: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transaction::Entity",
        from = "Column::TransactionId",
        to = "super::transaction::Column::Id"
    )]
    Transaction,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
