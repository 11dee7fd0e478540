pub use super::accounting_connection::Entity as AccountingConnection;
pub use super::accounting_sync_record::Entity as AccountingSyncRecord;
pub use super::dancer::Entity as Dancer;
pub use super::family::Entity as Family;
pub use super::fee::Entity as Fee;
pub use super::fee_type::Entity as FeeType;
pub use super::transaction::Entity as Transaction;
