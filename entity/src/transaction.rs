use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{FeeType, SyncStatus, TransactionType};

/// Canonical ledger entry.
///
/// Rows backfilled from the legacy `fees` table carry `legacy_fee_id`; the pair
/// (`legacy_fee_id`, `type`) is unique among them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dancer_id: i32,
    pub date: Date,
    pub r#type: TransactionType,
    pub fee_type: FeeType,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sync_status: SyncStatus,
    pub legacy_fee_id: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dancer::Entity",
        from = "Column::DancerId",
        to = "super::dancer::Column::Id"
    )]
    Dancer,
    #[sea_orm(has_many = "super::accounting_sync_record::Entity")]
    AccountingSyncRecord,
}

impl Related<super::dancer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dancer.def()
    }
}

impl Related<super::accounting_sync_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountingSyncRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
