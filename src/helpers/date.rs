//! Date helper functions

use chrono::{DateTime, TimeZone};

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %d, %Y").to_string()
}

/// Format a `YYYY-MM` completion date as "Jun 2027"
///
/// Anything that is not exactly a four-digit year, a dash and a
/// two-digit month between 01 and 12 is returned unchanged, so feed
/// values like "Completed" or "Q3 2027" pass through as-is.
pub fn format_completion(raw: &str) -> String {
    if let Some((year, month)) = raw.split_once('-') {
        let year_ok = year.len() == 4 && year.chars().all(|c| c.is_ascii_digit());
        let month_ok = month.len() == 2 && month.chars().all(|c| c.is_ascii_digit());
        if year_ok && month_ok {
            if let Ok(m) = month.parse::<usize>() {
                if (1..=12).contains(&m) {
                    return format!("{} {}", MONTHS_SHORT[m - 1], year);
                }
            }
        }
    }
    raw.to_string()
}
