//! Entity age computation.
//!
//! Ages are in years and clamped at zero. `None` means the age is unknown:
//! the source date is missing or could not be parsed.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::types::Timestamp;

/// Average Gregorian year length used for fractional ages.
pub const DAYS_PER_YEAR: f64 = 365.25;

const MILLIS_PER_YEAR: f64 = DAYS_PER_YEAR * 24.0 * 60.0 * 60.0 * 1000.0;

/// Age of a building from its calendar construction year.
pub fn property_age_years(construction_year: Option<i32>, now: Timestamp) -> Option<f64> {
    let years = i64::from(now.year()) - i64::from(construction_year?);
    Some(years.max(0) as f64)
}

/// Age of an inventory item from its purchase date, with fractional years.
pub fn inventory_age_years(purchase_date: Option<&str>, now: Timestamp) -> Option<f64> {
    let purchased = parse_date(purchase_date?)?;
    let millis = (now - purchased).num_milliseconds() as f64;
    Some((millis / MILLIS_PER_YEAR).max(0.0))
}

/// Parse an RFC 3339 timestamp, a zone-less `YYYY-MM-DDTHH:MM:SS`
/// (read as UTC), or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_date(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Age rounded to whole years for display.
pub fn whole_years(age: f64) -> i64 {
    age.round() as i64
}
