use entity::sea_orm_active_enums::{FeeType, TransactionType};
use pointe_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::bootstrap;

async fn ledger_for(
    test: &TestContext,
    fee_id: i32,
    kind: TransactionType,
) -> Result<Vec<entity::transaction::Model>, TestError> {
    Ok(entity::prelude::Transaction::find()
        .filter(entity::transaction::Column::LegacyFeeId.eq(fee_id))
        .filter(entity::transaction::Column::Type.eq(kind))
        .all(&test.db)
        .await?)
}

/// Tests the ledger produced for every legacy fee after repeated boots.
///
/// Expected: exactly one charge per fee and exactly one payment per paid fee
#[tokio::test]
async fn one_charge_per_fee_and_one_payment_per_paid_fee(
) -> Result<(), Box<dyn std::error::Error>> {
    let test = TestBuilder::new().with_baseline_schema().build().await?;
    let dancer_id = test.studio().insert_dancer(9).await?;

    let mut fees = Vec::new();
    for (fee_type, paid) in [
        ("Tuition", true),
        ("Costume", false),
        ("Competition", true),
        ("Recital", false),
    ] {
        let fee_id = test
            .studio()
            .insert_legacy_fee(dancer_id, fee_type, Some(10.0), None, paid)
            .await?;
        fees.push((fee_id, paid));
    }

    bootstrap(&test).await?;
    bootstrap(&test).await?;

    for (fee_id, paid) in fees {
        assert_eq!(ledger_for(&test, fee_id, TransactionType::Charge).await?.len(), 1);
        let payments = ledger_for(&test, fee_id, TransactionType::Payment).await?;
        assert_eq!(payments.len(), usize::from(paid));
    }

    Ok(())
}

/// Expected: type matching ignores case and unknown types become other
#[tokio::test]
async fn maps_legacy_fee_types() -> Result<(), Box<dyn std::error::Error>> {
    let test = TestBuilder::new().with_baseline_schema().build().await?;
    let dancer_id = test.studio().insert_dancer(9).await?;

    let cases = [
        ("Tuition", FeeType::Tuition),
        ("TUITION", FeeType::Tuition),
        ("costume", FeeType::Costume),
        ("Recital ", FeeType::Recital),
        ("Private Lesson", FeeType::Other),
    ];
    let mut fee_ids = Vec::new();
    for (legacy_type, _) in cases {
        fee_ids.push(
            test.studio()
                .insert_legacy_fee(dancer_id, legacy_type, Some(20.0), None, false)
                .await?,
        );
    }

    bootstrap(&test).await?;

    for (fee_id, (legacy_type, expected)) in fee_ids.into_iter().zip(cases) {
        let charges = ledger_for(&test, fee_id, TransactionType::Charge).await?;
        assert_eq!(charges[0].fee_type, expected, "legacy type {:?}", legacy_type);
    }

    Ok(())
}
