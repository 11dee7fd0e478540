use std::collections::HashSet;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::TransactionType;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{fee::FeeRepository, transaction::TransactionRepository},
    error::Error,
    model::ledger::{LedgerEntry, LegacyFee, LegacyLedgerKey},
    util::{
        dedupe::insert_if_absent,
        legacy::{fee_type_from_legacy, legacy_amount, parse_legacy_date},
    },
};

/// Legacy fees read per query.
const PAGE_SIZE: u64 = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillSummary {
    pub fees_scanned: u64,
    pub charges_created: u64,
    pub payments_created: u64,
}

impl BackfillSummary {
    pub fn created(&self) -> u64 {
        self.charges_created + self.payments_created
    }
}

pub struct LedgerBackfillService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerBackfillService<'a> {
    /// Creates a new instance of [`LedgerBackfillService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Copies legacy fees into the transaction ledger.
    ///
    /// Every fee gets one charge and every paid fee one payment. An entry is only inserted
    /// when no transaction with the same (`legacy_fee_id`, `type`) exists, which is the
    /// only guard against duplicates: the charge and payment passes are independent and
    /// both run on every call.
    ///
    /// # Arguments
    /// - `today` - Date used for fees whose due date is missing or unparseable
    ///
    /// # Returns
    /// - `Ok(BackfillSummary)` - Number of fees read and transactions created
    pub async fn backfill(&self, today: NaiveDate) -> Result<BackfillSummary, Error> {
        let fee_repo = FeeRepository::new(self.db);
        let transaction_repo = TransactionRepository::new(self.db);

        let mut existing: HashSet<LegacyLedgerKey> = transaction_repo
            .get_legacy_keys()
            .await?
            .into_iter()
            .collect();

        let mut summary = BackfillSummary::default();
        let mut after_id = 0;

        loop {
            let fees = fee_repo.get_page(after_id, PAGE_SIZE).await?;
            let Some(last) = fees.last() else {
                break;
            };
            after_id = last.id;
            summary.fees_scanned += fees.len() as u64;

            let candidates = fees
                .iter()
                .flat_map(|fee| ledger_entries_for_fee(fee, today));
            let entries = insert_if_absent(candidates, &mut existing, LedgerEntry::legacy_key);

            let charges = entries
                .iter()
                .filter(|entry| entry.kind == TransactionType::Charge)
                .count() as u64;
            let payments = entries.len() as u64 - charges;

            transaction_repo.create_many(entries).await?;
            summary.charges_created += charges;
            summary.payments_created += payments;

            if (fees.len() as u64) < PAGE_SIZE {
                break;
            }
        }

        Ok(summary)
    }
}

/// Derives the ledger entries a legacy fee stands for: a charge, plus a payment when the
/// fee was marked paid.
///
/// A null type maps to `other` and a null paid flag counts as unpaid.
pub fn ledger_entries_for_fee(fee: &LegacyFee, today: NaiveDate) -> Vec<LedgerEntry> {
    let legacy_type = fee.r#type.as_deref().unwrap_or_default();

    let charge = LedgerEntry {
        dancer_id: fee.dancer_id,
        date: parse_legacy_date(fee.due_date.as_deref(), today),
        kind: TransactionType::Charge,
        fee_type: fee_type_from_legacy(legacy_type),
        amount: legacy_amount(fee.amount),
        description: fee.r#type.clone(),
        legacy_fee_id: Some(fee.id),
    };

    if !fee.paid.unwrap_or(false) {
        return vec![charge];
    }

    let payment = LedgerEntry {
        kind: TransactionType::Payment,
        description: Some(format!("Payment for {}", legacy_type)),
        ..charge.clone()
    };

    vec![charge, payment]
}
