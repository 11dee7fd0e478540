use sea_orm::DatabaseConnection;

use crate::server::{
    data::{accounting_connection::AccountingConnectionRepository, fee_type::FeeTypeRepository},
    error::Error,
    model::reference::{ACCOUNTING_PROVIDERS, DEFAULT_FEE_TYPES},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub fee_types_inserted: u64,
    pub connections_inserted: u64,
}

impl SeedSummary {
    pub fn inserted(&self) -> u64 {
        self.fee_types_inserted + self.connections_inserted
    }
}

pub struct ReferenceSeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceSeedService<'a> {
    /// Creates a new instance of [`ReferenceSeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the default fee type catalog and a disconnected accounting connection per
    /// provider for `studio_key`.
    ///
    /// First write wins: rows that already exist keep whatever the application has since
    /// stored in them.
    pub async fn seed(&self, studio_key: &str) -> Result<SeedSummary, Error> {
        let fee_types_inserted = FeeTypeRepository::new(self.db)
            .seed(&DEFAULT_FEE_TYPES)
            .await?;

        let connections_inserted = AccountingConnectionRepository::new(self.db)
            .seed(studio_key, &ACCOUNTING_PROVIDERS)
            .await?;

        Ok(SeedSummary {
            fee_types_inserted,
            connections_inserted,
        })
    }
}
