//! Display formatting for dates, quantities and rates.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// "Jan 20, 2026".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Jan 20, 2026 9:35 PM".
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Date or a dash for records without one.
pub fn format_optional_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Parse the `YYYY-MM-DD` value of an `<input type="date">` as midnight UTC.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

/// 0.756 -> "75.6%".
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Drop a trailing ".0" so whole quantities read naturally.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{quantity:.0}")
    } else {
        format!("{quantity:.2}")
    }
}
