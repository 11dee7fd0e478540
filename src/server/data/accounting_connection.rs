use chrono::Utc;
use entity::sea_orm_active_enums::{AccountingProvider, ConnectionStatus};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct AccountingConnectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountingConnectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a disconnected row for each provider that has none for this studio.
    ///
    /// Rows that already exist are left untouched, including their status and tokens.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    pub async fn seed(
        &self,
        studio_key: &str,
        providers: &[AccountingProvider],
    ) -> Result<u64, DbErr> {
        let now = Utc::now().naive_utc();
        let mut inserted = 0;

        for provider in providers {
            let connection = entity::accounting_connection::ActiveModel {
                studio_key: ActiveValue::Set(studio_key.to_string()),
                provider: ActiveValue::Set(*provider),
                status: ActiveValue::Set(ConnectionStatus::Disconnected),
                external_tenant_id: ActiveValue::Set(None),
                access_token: ActiveValue::Set(None),
                refresh_token: ActiveValue::Set(None),
                token_expires_at: ActiveValue::Set(None),
                connected_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            };

            inserted += entity::prelude::AccountingConnection::insert(connection)
                .on_conflict(
                    OnConflict::columns([
                        entity::accounting_connection::Column::StudioKey,
                        entity::accounting_connection::Column::Provider,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    pub async fn get(
        &self,
        studio_key: &str,
        provider: AccountingProvider,
    ) -> Result<Option<entity::accounting_connection::Model>, DbErr> {
        entity::prelude::AccountingConnection::find()
            .filter(entity::accounting_connection::Column::StudioKey.eq(studio_key))
            .filter(entity::accounting_connection::Column::Provider.eq(provider))
            .one(self.db)
            .await
    }

    /// Updates a connection's status, stamping `connected_at` when it becomes connected.
    ///
    /// # Returns
    /// - `Ok(true)` - Connection updated
    /// - `Ok(false)` - No connection row for this studio and provider
    pub async fn set_status(
        &self,
        studio_key: &str,
        provider: AccountingProvider,
        status: ConnectionStatus,
    ) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();
        let connected_at = match status {
            ConnectionStatus::Connected => ActiveValue::Set(Some(now)),
            _ => ActiveValue::NotSet,
        };

        let result = entity::prelude::AccountingConnection::update_many()
            .set(entity::accounting_connection::ActiveModel {
                status: ActiveValue::Set(status),
                connected_at,
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::accounting_connection::Column::StudioKey.eq(studio_key))
            .filter(entity::accounting_connection::Column::Provider.eq(provider))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
