use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::server::error::AppError;

/// Parses an ISO `YYYY-MM-DD` date into the UTC midnight starting that day.
///
/// Check-in and check-out boundaries are whole days; the half-open interval
/// convention means the check-out date itself is not occupied.
pub fn parse_iso_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| {
            AppError::BadRequest(format!(
                "Invalid date '{}', expected YYYY-MM-DD: {}",
                value, e
            ))
        })
}

/// Parses the `amenities` query value: either a JSON string array
/// (`["wifi","tv"]`) or a comma-separated list (`wifi,tv`).
pub fn parse_amenity_list(raw: &str) -> Result<Vec<String>, AppError> {
    let trimmed = raw.trim();

    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|e| {
            AppError::BadRequest(format!("Invalid amenities array '{}': {}", raw, e))
        })
    } else {
        Ok(trimmed.split(',').map(|s| s.to_string()).collect())
    }
}
