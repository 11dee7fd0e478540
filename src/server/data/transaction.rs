use chrono::Utc;
use entity::sea_orm_active_enums::{SyncStatus, TransactionType};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::server::model::ledger::{LedgerEntry, LegacyLedgerKey};

pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts ledger entries with `sync_status = pending`.
    ///
    /// Rows are not read back, so a legacy `amount` column of any numeric type accepts them.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    pub async fn create_many(&self, entries: Vec<LedgerEntry>) -> Result<u64, DbErr> {
        if entries.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().naive_utc();
        let entries = entries
            .into_iter()
            .map(|entry| entity::transaction::ActiveModel {
                dancer_id: ActiveValue::Set(entry.dancer_id),
                date: ActiveValue::Set(entry.date),
                r#type: ActiveValue::Set(entry.kind),
                fee_type: ActiveValue::Set(entry.fee_type),
                amount: ActiveValue::Set(entry.amount),
                description: ActiveValue::Set(entry.description),
                sync_status: ActiveValue::Set(SyncStatus::Pending),
                legacy_fee_id: ActiveValue::Set(entry.legacy_fee_id),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Transaction::insert_many(entries)
            .exec_without_returning(self.db)
            .await
    }

    /// Returns the (`legacy_fee_id`, `type`) key of every transaction backfilled from a
    /// legacy fee.
    pub async fn get_legacy_keys(&self) -> Result<Vec<LegacyLedgerKey>, DbErr> {
        let keys = entity::prelude::Transaction::find()
            .select_only()
            .column(entity::transaction::Column::LegacyFeeId)
            .column(entity::transaction::Column::Type)
            .filter(entity::transaction::Column::LegacyFeeId.is_not_null())
            .into_tuple::<(i32, TransactionType)>()
            .all(self.db)
            .await?;

        Ok(keys
            .into_iter()
            .map(|(legacy_fee_id, kind)| LegacyLedgerKey {
                legacy_fee_id,
                kind,
            })
            .collect())
    }
}
