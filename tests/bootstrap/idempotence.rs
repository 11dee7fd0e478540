use pointe_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::bootstrap;

/// Tests two consecutive boots of a legacy database.
///
/// Expected: the second run changes neither schema nor data
#[tokio::test]
async fn second_boot_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let test = TestBuilder::new().with_baseline_schema().build().await?;
    let dancer_id = test.studio().insert_dancer(11).await?;
    test.studio()
        .insert_legacy_fee(dancer_id, "Tuition", Some(120.0), Some("2024-09-01"), true)
        .await?;
    test.studio()
        .insert_legacy_fee(dancer_id, "Costume", Some(55.0), None, false)
        .await?;

    let first = bootstrap(&test).await?;
    let transactions = entity::prelude::Transaction::find().all(&test.db).await?;
    let dancers = entity::prelude::Dancer::find().all(&test.db).await?;
    let connections = entity::prelude::AccountingConnection::find()
        .all(&test.db)
        .await?;

    let second = bootstrap(&test).await?;

    assert!(!first.is_noop());
    assert!(second.is_noop());
    assert_eq!(
        entity::prelude::Transaction::find().all(&test.db).await?,
        transactions
    );
    assert_eq!(entity::prelude::Dancer::find().all(&test.db).await?, dancers);
    assert_eq!(
        entity::prelude::AccountingConnection::find()
            .all(&test.db)
            .await?,
        connections
    );
    assert_eq!(entity::prelude::FeeType::find().count(&test.db).await?, 5);

    Ok(())
}

/// Expected: a fresh database reaches the same shape as a patched legacy one
#[tokio::test]
async fn fresh_database_boots_twice() -> Result<(), Box<dyn std::error::Error>> {
    let test = TestBuilder::new().build().await?;

    bootstrap(&test).await?;
    let second = bootstrap(&test).await?;

    assert!(second.is_noop());
    assert_eq!(
        entity::prelude::AccountingConnection::find()
            .count(&test.db)
            .await?,
        2
    );

    Ok(())
}
