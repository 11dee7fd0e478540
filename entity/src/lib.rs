//! SeaORM entities for the studio database.

pub mod prelude;

pub mod accounting_connection;
pub mod accounting_sync_record;
pub mod dancer;
pub mod family;
pub mod fee;
pub mod fee_type;
pub mod sea_orm_active_enums;
pub mod transaction;
