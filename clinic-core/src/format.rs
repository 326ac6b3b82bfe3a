//! Display formatting shared by the calendar and dashboard views.
//!
//! Stored values are never rewritten into these forms; they are produced
//! only when rendering.

use chrono::{Datelike, NaiveDate};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTHS[((month.clamp(1, 12)) - 1) as usize]
}

/// Three-letter month prefix, e.g. `Jan`.
pub fn month_abbrev(month: u32) -> &'static str {
    &month_name(month)[..3]
}

/// Header text, e.g. `January 18, 2023`.
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

/// Convert `HH:MM` to `h:MM AM/PM`.
///
/// Empty input yields an empty string; input without a numeric hour is
/// returned unchanged.
pub fn format_time_12h(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    let (hours, minutes) = time.split_once(':').unwrap_or((time, ""));
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return time.to_string();
    };

    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{}:{} {}", hour12, minutes, ampm)
}

/// Convert `YYYY-MM-DD` to the table form `DD/MM/YYYY`.
/// Anything that isn't an ISO date is returned unchanged.
pub fn format_table_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// ISO key used for day bucketing and range comparison.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
