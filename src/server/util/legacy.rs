//! Normalization of values stored by the pre-ledger schema.
//!
//! Legacy rows were written from free-form inputs. Nothing here reports a parse failure:
//! unusable values fall back to defaults so the backfill always completes.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::FeeType;

/// Date formats accepted in legacy `due_date` values, tried in order.
const LEGACY_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

const LEGACY_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Maps a legacy free-text fee type onto the closed [`FeeType`] enumeration.
///
/// Matching ignores case and surrounding whitespace; anything other than the four known
/// categories becomes [`FeeType::Other`].
pub fn fee_type_from_legacy(raw: &str) -> FeeType {
    match raw.trim().to_lowercase().as_str() {
        "tuition" => FeeType::Tuition,
        "costume" => FeeType::Costume,
        "competition" => FeeType::Competition,
        "recital" => FeeType::Recital,
        _ => FeeType::Other,
    }
}

/// Parses a legacy due date, returning `today` when the value is missing or unparseable.
pub fn parse_legacy_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    raw.map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(parse_date)
        .unwrap_or(today)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Some(date) = LEGACY_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    LEGACY_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
}

/// Legacy amounts may be null; the ledger stores them as zero.
pub fn legacy_amount(raw: Option<f64>) -> f64 {
    raw.filter(|amount| amount.is_finite()).unwrap_or(0.0)
}

/// Estimates a birthdate for a dancer known only by age: the same day `age` years ago.
///
/// Negative ages are treated as zero. A 29 February that does not exist in the target
/// year becomes 28 February.
pub fn birthdate_from_age(age: i32, today: NaiveDate) -> NaiveDate {
    let year = today.year() - age.max(0);

    today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, today.month(), 28))
        .unwrap_or(today)
}
