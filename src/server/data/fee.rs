use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::ledger::LegacyFee;

/// Read-only access to the legacy `fees` table.
pub struct FeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns up to `limit` fees with an ID greater than `after_id`, ordered by ID.
    ///
    /// Pass `0` to start from the beginning and the last returned ID to continue. Only the
    /// columns the backfill needs are selected and `amount` is read as a double whatever
    /// its declared type.
    pub async fn get_page(&self, after_id: i32, limit: u64) -> Result<Vec<LegacyFee>, DbErr> {
        let rows = entity::prelude::Fee::find()
            .select_only()
            .column(entity::fee::Column::Id)
            .column(entity::fee::Column::DancerId)
            .column(entity::fee::Column::Type)
            .column_as(
                Expr::col(entity::fee::Column::Amount).cast_as(Alias::new("double precision")),
                "amount",
            )
            .column(entity::fee::Column::DueDate)
            .column(entity::fee::Column::Paid)
            .filter(entity::fee::Column::Id.gt(after_id))
            .order_by_asc(entity::fee::Column::Id)
            .limit(limit)
            .into_tuple::<(
                i32,
                i32,
                Option<String>,
                Option<f64>,
                Option<String>,
                Option<bool>,
            )>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, dancer_id, r#type, amount, due_date, paid)| LegacyFee {
                id,
                dancer_id,
                r#type,
                amount,
                due_date,
                paid,
            })
            .collect())
    }
}
