//! Dancer, legacy fee and ledger fixtures.
//!
//! Inserts only set the columns present in the baseline schema unless told otherwise, so
//! the same fixtures work before and after the patch steps run.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::TransactionType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn studio(&self) -> StudioFixtures<'_> {
        StudioFixtures { context: self }
    }
}

pub struct StudioFixtures<'a> {
    context: &'a TestContext,
}

impl StudioFixtures<'_> {
    /// Insert a dancer with only baseline columns set.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new dancer
    pub async fn insert_dancer(&self, age: i32) -> Result<i32, TestError> {
        let result = entity::prelude::Dancer::insert(factory::dancer(age))
            .exec(&self.context.db)
            .await?;

        Ok(result.last_insert_id)
    }

    /// Insert a dancer with a level and birthdate. Requires the patched schema.
    pub async fn insert_dancer_with_profile(
        &self,
        age: i32,
        level: Option<&str>,
        birthdate: Option<NaiveDate>,
    ) -> Result<i32, TestError> {
        let dancer = entity::dancer::ActiveModel {
            level: ActiveValue::Set(level.map(str::to_string)),
            birthdate: ActiveValue::Set(birthdate),
            ..factory::dancer(age)
        };

        let result = entity::prelude::Dancer::insert(dancer)
            .exec(&self.context.db)
            .await?;

        Ok(result.last_insert_id)
    }

    /// Insert a legacy fee.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new fee
    pub async fn insert_legacy_fee(
        &self,
        dancer_id: i32,
        fee_type: &str,
        amount: Option<f64>,
        due_date: Option<&str>,
        paid: bool,
    ) -> Result<i32, TestError> {
        let fee = entity::fee::ActiveModel {
            amount: ActiveValue::Set(amount),
            due_date: ActiveValue::Set(due_date.map(str::to_string)),
            paid: ActiveValue::Set(paid),
            ..factory::legacy_fee(dancer_id, fee_type)
        };

        let result = entity::prelude::Fee::insert(fee)
            .exec(&self.context.db)
            .await?;

        Ok(result.last_insert_id)
    }

    /// Insert a ledger transaction. Requires the patched schema.
    pub async fn insert_transaction(
        &self,
        dancer_id: i32,
        kind: TransactionType,
        legacy_fee_id: Option<i32>,
    ) -> Result<i32, TestError> {
        let result = entity::prelude::Transaction::insert(factory::transaction(
            dancer_id,
            kind,
            legacy_fee_id,
        ))
        .exec(&self.context.db)
        .await?;

        Ok(result.last_insert_id)
    }
}

pub mod factory {
    //! Active models with sensible defaults, for tests that insert rows themselves.

    use chrono::{NaiveDate, Utc};
    use entity::sea_orm_active_enums::{FeeType, SyncStatus, TransactionType};
    use sea_orm::ActiveValue;

    pub fn dancer(age: i32) -> entity::dancer::ActiveModel {
        entity::dancer::ActiveModel {
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set(format!("Dancer {}", age)),
            age: ActiveValue::Set(age),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
    }

    /// An unpaid legacy fee of 100.00 due on 2024-09-01.
    pub fn legacy_fee(dancer_id: i32, fee_type: &str) -> entity::fee::ActiveModel {
        entity::fee::ActiveModel {
            dancer_id: ActiveValue::Set(dancer_id),
            r#type: ActiveValue::Set(fee_type.to_string()),
            amount: ActiveValue::Set(Some(100.0)),
            due_date: ActiveValue::Set(Some("2024-09-01".to_string())),
            paid: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
    }

    pub fn transaction(
        dancer_id: i32,
        kind: TransactionType,
        legacy_fee_id: Option<i32>,
    ) -> entity::transaction::ActiveModel {
        entity::transaction::ActiveModel {
            dancer_id: ActiveValue::Set(dancer_id),
            date: ActiveValue::Set(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap_or_default()),
            r#type: ActiveValue::Set(kind),
            fee_type: ActiveValue::Set(FeeType::Tuition),
            amount: ActiveValue::Set(100.0),
            description: ActiveValue::Set(None),
            sync_status: ActiveValue::Set(SyncStatus::Pending),
            legacy_fee_id: ActiveValue::Set(legacy_fee_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
    }
}
