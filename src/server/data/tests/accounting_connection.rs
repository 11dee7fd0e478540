//! Tests for AccountingConnectionRepository.

use entity::sea_orm_active_enums::{AccountingProvider, ConnectionStatus};
use pointe_test_utils::prelude::*;

use crate::server::{
    data::accounting_connection::AccountingConnectionRepository,
    model::reference::ACCOUNTING_PROVIDERS,
};

/// Expected: one disconnected row per provider
#[tokio::test]
async fn seeds_disconnected_connections() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;

    let repo = AccountingConnectionRepository::new(&test.db);
    let inserted = repo.seed("default", &ACCOUNTING_PROVIDERS).await?;

    assert_eq!(inserted, 2);
    for provider in ACCOUNTING_PROVIDERS {
        let connection = repo
            .get("default", provider)
            .await?
            .expect("connection missing");
        assert_eq!(connection.status, ConnectionStatus::Disconnected);
        assert!(connection.connected_at.is_none());
    }

    Ok(())
}

/// Expected: reseeding leaves a connected row connected
#[tokio::test]
async fn reseed_keeps_connected_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;

    let repo = AccountingConnectionRepository::new(&test.db);
    repo.seed("default", &ACCOUNTING_PROVIDERS).await?;
    let changed = repo
        .set_status(
            "default",
            AccountingProvider::Quickbooks,
            ConnectionStatus::Connected,
        )
        .await?;
    let inserted = repo.seed("default", &ACCOUNTING_PROVIDERS).await?;

    assert!(changed);
    assert_eq!(inserted, 0);
    let quickbooks = repo
        .get("default", AccountingProvider::Quickbooks)
        .await?
        .expect("connection missing");
    assert_eq!(quickbooks.status, ConnectionStatus::Connected);
    assert!(quickbooks.connected_at.is_some());

    Ok(())
}

/// Expected: each studio key gets its own pair of rows
#[tokio::test]
async fn seeds_per_studio() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;

    let repo = AccountingConnectionRepository::new(&test.db);
    let first = repo.seed("default", &ACCOUNTING_PROVIDERS).await?;
    let second = repo.seed("uptown", &ACCOUNTING_PROVIDERS).await?;

    assert_eq!(first, 2);
    assert_eq!(second, 2);
    assert!(repo.get("uptown", AccountingProvider::Xero).await?.is_some());

    Ok(())
}

/// Expected: Ok(false) when no row exists for the provider
#[tokio::test]
async fn set_status_without_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;

    let repo = AccountingConnectionRepository::new(&test.db);
    let changed = repo
        .set_status("default", AccountingProvider::Xero, ConnectionStatus::Error)
        .await?;

    assert!(!changed);

    Ok(())
}
