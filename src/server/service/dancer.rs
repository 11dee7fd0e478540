use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::dancer::DancerRepository, error::Error, model::dancer::DancerLevel,
    util::legacy::birthdate_from_age,
};

pub struct DancerProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DancerProfileService<'a> {
    /// Creates a new instance of [`DancerProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rewrites every dancer whose level or birthdate is not in canonical form.
    ///
    /// Recognized levels are lower-cased, anything else becomes `mini`. A missing birthdate
    /// is estimated from the dancer's age relative to `today`, a missing age counting as 0.
    /// Already normalized dancers are not touched, so a second call updates nothing.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of dancers updated
    pub async fn normalize_profiles(&self, today: NaiveDate) -> Result<u64, Error> {
        let dancer_repo = DancerRepository::new(self.db);

        let mut updated = 0;
        for dancer in dancer_repo.get_needing_normalization().await? {
            let level = DancerLevel::normalize(dancer.level.as_deref());
            let birthdate = dancer
                .birthdate
                .unwrap_or_else(|| birthdate_from_age(dancer.age.unwrap_or(0), today));

            if dancer_repo
                .update_profile(dancer.id, level, birthdate)
                .await?
            {
                updated += 1;
            }
        }

        Ok(updated)
    }
}
