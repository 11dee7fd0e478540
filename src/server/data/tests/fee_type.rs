//! Tests for FeeTypeRepository.

use entity::sea_orm_active_enums::FeeType;
use pointe_test_utils::prelude::*;

use crate::server::{
    data::fee_type::FeeTypeRepository,
    model::reference::{FeeTypeDefault, DEFAULT_FEE_TYPES},
};

/// Expected: all five catalog rows inserted on an empty table
#[tokio::test]
async fn seeds_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;

    let repo = FeeTypeRepository::new(&test.db);
    let inserted = repo.seed(&DEFAULT_FEE_TYPES).await?;

    assert_eq!(inserted, 5);
    let fee_types: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|row| row.fee_type)
        .collect();
    assert_eq!(
        fee_types,
        vec!["competition", "costume", "other", "recital", "tuition"]
    );

    Ok(())
}

/// Expected: reseeding inserts nothing and keeps the original label
#[tokio::test]
async fn never_overwrites_existing_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;

    let repo = FeeTypeRepository::new(&test.db);
    repo.seed(&DEFAULT_FEE_TYPES).await?;

    let relabeled = [FeeTypeDefault {
        fee_type: FeeType::Tuition,
        label: "Monthly Tuition",
        quickbooks_account_code: "9999",
        xero_account_code: "999",
    }];
    let inserted = repo.seed(&relabeled).await?;

    assert_eq!(inserted, 0);
    let tuition = repo
        .get_all()
        .await?
        .into_iter()
        .find(|row| row.fee_type == "tuition")
        .expect("tuition missing");
    assert_eq!(tuition.label, "Tuition");
    assert_eq!(tuition.quickbooks_account_code.as_deref(), Some("4000"));

    Ok(())
}
