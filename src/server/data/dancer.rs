use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::dancer::{DancerLevel, DancerProfile};

pub struct DancerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DancerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds dancers whose level is missing or not stored in its canonical form, or whose
    /// birthdate is missing.
    ///
    /// Only the profile columns are read, so legacy tables lacking name or timestamp
    /// columns work as well.
    pub async fn get_needing_normalization(&self) -> Result<Vec<DancerProfile>, DbErr> {
        let canonical_levels = DancerLevel::ALL.map(|level| level.as_str());

        let rows = entity::prelude::Dancer::find()
            .select_only()
            .column(entity::dancer::Column::Id)
            .column(entity::dancer::Column::Age)
            .column(entity::dancer::Column::Level)
            .column(entity::dancer::Column::Birthdate)
            .filter(
                Condition::any()
                    .add(entity::dancer::Column::Level.is_null())
                    .add(entity::dancer::Column::Level.is_not_in(canonical_levels))
                    .add(entity::dancer::Column::Birthdate.is_null()),
            )
            .order_by_asc(entity::dancer::Column::Id)
            .into_tuple::<(i32, Option<i32>, Option<String>, Option<NaiveDate>)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, age, level, birthdate)| DancerProfile {
                id,
                age,
                level,
                birthdate,
            })
            .collect())
    }

    /// Sets a dancer's level and birthdate.
    ///
    /// # Returns
    /// - `Ok(true)` - Dancer updated
    /// - `Ok(false)` - No dancer with that ID
    pub async fn update_profile(
        &self,
        dancer_id: i32,
        level: DancerLevel,
        birthdate: NaiveDate,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Dancer::update_many()
            .set(entity::dancer::ActiveModel {
                level: ActiveValue::Set(Some(level.as_str().to_string())),
                birthdate: ActiveValue::Set(Some(birthdate)),
                ..Default::default()
            })
            .filter(entity::dancer::Column::Id.eq(dancer_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
