use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveEnum, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::reference::FeeTypeDefault;

pub struct FeeTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeeTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts catalog rows whose fee type does not exist yet. Existing rows keep their
    /// labels and account codes.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    pub async fn seed(&self, defaults: &[FeeTypeDefault]) -> Result<u64, DbErr> {
        let now = Utc::now().naive_utc();
        let mut inserted = 0;

        for default in defaults {
            let fee_type = entity::fee_type::ActiveModel {
                fee_type: ActiveValue::Set(default.fee_type.to_value()),
                label: ActiveValue::Set(default.label.to_string()),
                quickbooks_account_code: ActiveValue::Set(Some(
                    default.quickbooks_account_code.to_string(),
                )),
                xero_account_code: ActiveValue::Set(Some(default.xero_account_code.to_string())),
                created_at: ActiveValue::Set(now),
            };

            inserted += entity::prelude::FeeType::insert(fee_type)
                .on_conflict(
                    OnConflict::column(entity::fee_type::Column::FeeType)
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::fee_type::Model>, DbErr> {
        entity::prelude::FeeType::find()
            .order_by_asc(entity::fee_type::Column::FeeType)
            .all(self.db)
            .await
    }
}
