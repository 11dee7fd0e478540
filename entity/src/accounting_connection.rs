use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AccountingProvider, ConnectionStatus};

/// OAuth connection state for one accounting provider of one studio.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounting_connections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub studio_key: String,
    pub provider: AccountingProvider,
    pub status: ConnectionStatus,
    /// QuickBooks realm ID or Xero tenant ID once connected.
    pub external_tenant_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub access_token: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub refresh_token: Option<String>,
    pub token_expires_at: Option<DateTime>,
    pub connected_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
