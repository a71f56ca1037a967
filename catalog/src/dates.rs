use crate::artists::DatePrecision;
use time::{Date, Month};

/// `1` -> "1st", `12` -> "12th", `22` -> "22nd".
pub fn ordinal(n: u32) -> String {
    let suffix = if (10..=20).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}

/// Render an album release date ("2019-03-03") at the given precision.
///
/// Missing or unparsable month and day parts fall back to 1. An out-of-range
/// month leaves the raw date untouched.
pub fn format_release_date(date: &str, precision: DatePrecision) -> String {
    let mut parts = date.split('-');
    let year = parts.next().unwrap_or_default();
    if precision == DatePrecision::Year {
        return year.to_string();
    }
    let month = parts.next().and_then(|m| m.parse::<u8>().ok()).unwrap_or(1);
    let Ok(month) = Month::try_from(month) else { return date.to_string() };
    if precision == DatePrecision::Month {
        return format!("{month} {year}");
    }
    let day = parts.next().and_then(|d| d.parse::<u32>().ok()).unwrap_or(1);
    format!("{month} {} {year}", ordinal(day))
}

/// "March 3rd 2024".
pub fn format_long_date(date: Date) -> String {
    format!("{} {} {}", date.month(), ordinal(date.day() as u32), date.year())
}
