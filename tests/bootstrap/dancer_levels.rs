use chrono::NaiveDate;
use pointe_test_utils::prelude::*;
use sea_orm::EntityTrait;

use super::bootstrap;

async fn level(test: &TestContext, dancer_id: i32) -> Result<Option<String>, TestError> {
    Ok(entity::prelude::Dancer::find_by_id(dancer_id)
        .one(&test.db)
        .await?
        .and_then(|dancer| dancer.level))
}

/// Expected: unrecognized level becomes mini and senior is left as senior
#[tokio::test]
async fn normalizes_dancer_levels() -> Result<(), Box<dyn std::error::Error>> {
    let test = TestBuilder::new().with_studio_schema().build().await?;
    let birthdate = NaiveDate::from_ymd_opt(2008, 4, 20);
    let expert = test
        .studio()
        .insert_dancer_with_profile(17, Some("Expert"), birthdate)
        .await?;
    let senior = test
        .studio()
        .insert_dancer_with_profile(17, Some("senior"), birthdate)
        .await?;

    bootstrap(&test).await?;

    assert_eq!(level(&test, expert).await?.as_deref(), Some("mini"));
    assert_eq!(level(&test, senior).await?.as_deref(), Some("senior"));

    Ok(())
}

/// Expected: legacy dancers get a level and a birthdate derived from their age
#[tokio::test]
async fn fills_legacy_dancer_profiles() -> Result<(), Box<dyn std::error::Error>> {
    let test = TestBuilder::new().with_baseline_schema().build().await?;
    let dancer_id = test.studio().insert_dancer(6).await?;

    bootstrap(&test).await?;

    let dancer = entity::prelude::Dancer::find_by_id(dancer_id)
        .one(&test.db)
        .await?
        .expect("dancer not found");
    assert_eq!(dancer.level.as_deref(), Some("mini"));
    assert!(dancer.birthdate.is_some());

    Ok(())
}
