use sea_orm::entity::prelude::*;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TransactionType {
    #[sea_orm(string_value = "charge")]
    Charge,
    #[sea_orm(string_value = "payment")]
    Payment,
}

/// Closed set of billing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum FeeType {
    #[sea_orm(string_value = "tuition")]
    Tuition,
    #[sea_orm(string_value = "costume")]
    Costume,
    #[sea_orm(string_value = "competition")]
    Competition,
    #[sea_orm(string_value = "recital")]
    Recital,
    #[sea_orm(string_value = "other")]
    Other,
}

/// State of a transaction with respect to the external accounting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum SyncStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "synced")]
    Synced,
    #[sea_orm(string_value = "failed")]
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum AccountingProvider {
    #[sea_orm(string_value = "quickbooks")]
    Quickbooks,
    #[sea_orm(string_value = "xero")]
    Xero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ConnectionStatus {
    #[sea_orm(string_value = "disconnected")]
    Disconnected,
    #[sea_orm(string_value = "connected")]
    Connected,
    #[sea_orm(string_value = "error")]
    Error,
}

/// Progress of an outbox record pushing a transaction to an accounting provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum SyncRecordStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "sent")]
    Sent,
    #[sea_orm(string_value = "failed")]
    Failed,
}
