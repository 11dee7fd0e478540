use chrono::NaiveDate;
use entity::sea_orm_active_enums::{FeeType, TransactionType};

/// A ledger transaction ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub dancer_id: i32,
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub fee_type: FeeType,
    pub amount: f64,
    pub description: Option<String>,
    pub legacy_fee_id: Option<i32>,
}

/// De-duplication key of a transaction backfilled from a legacy fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyLedgerKey {
    pub legacy_fee_id: i32,
    pub kind: TransactionType,
}

impl LedgerEntry {
    /// Returns the backfill key, or `None` for entries not derived from a legacy fee.
    pub fn legacy_key(&self) -> Option<LegacyLedgerKey> {
        self.legacy_fee_id.map(|legacy_fee_id| LegacyLedgerKey {
            legacy_fee_id,
            kind: self.kind,
        })
    }
}

/// The columns of a legacy `fees` row the backfill reads.
///
/// Legacy tables were created by hand, so every value other than the IDs may be null.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyFee {
    pub id: i32,
    pub dancer_id: i32,
    pub r#type: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<String>,
    pub paid: Option<bool>,
}
