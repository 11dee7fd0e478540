use entity::sea_orm_active_enums::{AccountingProvider, ConnectionStatus};
use pointe::server::data::accounting_connection::AccountingConnectionRepository;
use pointe_test_utils::prelude::*;
use sea_orm::EntityTrait;

use super::bootstrap;

/// Expected: exactly five fee types with their original labels after two boots
#[tokio::test]
async fn fee_type_catalog_seeded_once() -> Result<(), Box<dyn std::error::Error>> {
    let test = TestBuilder::new().with_baseline_schema().build().await?;

    bootstrap(&test).await?;
    bootstrap(&test).await?;

    let catalog: Vec<(String, String)> = entity::prelude::FeeType::find()
        .all(&test.db)
        .await?
        .into_iter()
        .map(|row| (row.fee_type, row.label))
        .collect();

    assert_eq!(catalog.len(), 5);
    for (fee_type, label) in [
        ("tuition", "Tuition"),
        ("costume", "Costume"),
        ("competition", "Competition"),
        ("recital", "Recital"),
        ("other", "Other"),
    ] {
        assert!(catalog.contains(&(fee_type.to_string(), label.to_string())));
    }

    Ok(())
}

/// Tests accounting connections across a reconnect and a reboot.
///
/// Expected: one disconnected row per provider, and a later connection survives reseeding
#[tokio::test]
async fn connections_seeded_without_reset() -> Result<(), Box<dyn std::error::Error>> {
    let test = TestBuilder::new().with_baseline_schema().build().await?;

    bootstrap(&test).await?;

    let repo = AccountingConnectionRepository::new(&test.db);
    for provider in [AccountingProvider::Quickbooks, AccountingProvider::Xero] {
        let connection = repo.get("default", provider).await?.expect("missing row");
        assert_eq!(connection.status, ConnectionStatus::Disconnected);
    }

    repo.set_status(
        "default",
        AccountingProvider::Quickbooks,
        ConnectionStatus::Connected,
    )
    .await?;
    bootstrap(&test).await?;

    let connections = entity::prelude::AccountingConnection::find()
        .all(&test.db)
        .await?;
    assert_eq!(connections.len(), 2);
    let quickbooks = repo
        .get("default", AccountingProvider::Quickbooks)
        .await?
        .expect("missing row");
    assert_eq!(quickbooks.status, ConnectionStatus::Connected);

    Ok(())
}
