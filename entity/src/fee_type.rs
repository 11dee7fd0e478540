use sea_orm::entity::prelude::*;

/// Billing category catalog with the default account code for each accounting provider.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fee_type: String,
    pub label: String,
    pub quickbooks_account_code: Option<String>,
    pub xero_account_code: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
