//! Tests for DancerRepository.

use chrono::NaiveDate;
use pointe_test_utils::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait};

use crate::server::{
    data::dancer::DancerRepository,
    model::dancer::{DancerLevel, DancerProfile},
};

/// Tests which dancers are selected for normalization.
///
/// Expected: dancers with missing, unrecognized or non-canonical levels and dancers
/// without a birthdate are returned; fully canonical dancers are not
#[tokio::test]
async fn finds_dancers_needing_normalization() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;
    let birthdate = NaiveDate::from_ymd_opt(2012, 5, 1);

    let missing_level = test
        .studio()
        .insert_dancer_with_profile(12, None, birthdate)
        .await?;
    let unknown_level = test
        .studio()
        .insert_dancer_with_profile(12, Some("Expert"), birthdate)
        .await?;
    let capitalized = test
        .studio()
        .insert_dancer_with_profile(12, Some("Senior"), birthdate)
        .await?;
    let missing_birthdate = test
        .studio()
        .insert_dancer_with_profile(12, Some("teen"), None)
        .await?;
    test.studio()
        .insert_dancer_with_profile(12, Some("senior"), birthdate)
        .await?;

    let repo = DancerRepository::new(&test.db);
    let ids: Vec<i32> = repo
        .get_needing_normalization()
        .await?
        .into_iter()
        .map(|dancer| dancer.id)
        .collect();

    assert_eq!(
        ids,
        vec![missing_level, unknown_level, capitalized, missing_birthdate]
    );

    Ok(())
}

/// Expected: Ok(true) and both fields stored
#[tokio::test]
async fn updates_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;
    let dancer_id = test.studio().insert_dancer(9).await?;
    let birthdate = NaiveDate::from_ymd_opt(2017, 3, 4).unwrap();

    let repo = DancerRepository::new(&test.db);
    let updated = repo
        .update_profile(dancer_id, DancerLevel::Junior, birthdate)
        .await?;

    assert!(updated);
    let dancer = entity::prelude::Dancer::find_by_id(dancer_id)
        .one(&test.db)
        .await?
        .expect("dancer not found");
    assert_eq!(dancer.level.as_deref(), Some("junior"));
    assert_eq!(dancer.birthdate, Some(birthdate));

    Ok(())
}

/// Expected: Ok(false) for an unknown dancer ID
#[tokio::test]
async fn returns_false_for_missing_dancer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_studio_schema().build().await?;

    let repo = DancerRepository::new(&test.db);
    let updated = repo
        .update_profile(42, DancerLevel::Mini, NaiveDate::from_ymd_opt(2015, 1, 1).unwrap())
        .await?;

    assert!(!updated);

    Ok(())
}

/// Expected: Err when the level column has not been added yet
#[tokio::test]
async fn fails_before_level_column_exists() -> Result<(), TestError> {
    let test = TestBuilder::new().with_baseline_schema().build().await?;
    test.studio().insert_dancer(10).await?;

    let repo = DancerRepository::new(&test.db);
    let result = repo.get_needing_normalization().await;

    assert!(result.is_err());

    Ok(())
}

/// Tests a hand-made dancers table with only profile columns and a null age.
///
/// Expected: the dancer is returned with its age as None
#[tokio::test]
async fn reads_hand_made_dancers_table() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    test.db
        .execute_unprepared(
            "CREATE TABLE dancers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                age INTEGER,
                level TEXT,
                birthdate TEXT
            );
            INSERT INTO dancers (age, level) VALUES (NULL, 'Expert');",
        )
        .await?;

    let repo = DancerRepository::new(&test.db);
    let dancers = repo.get_needing_normalization().await?;

    assert_eq!(
        dancers,
        vec![DancerProfile {
            id: 1,
            age: None,
            level: Some("Expert".to_string()),
            birthdate: None,
        }]
    );

    Ok(())
}
