//! Locale-tolerant number parsing and text cleanup shared by every source parser.

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use tracing::warn;

static DAY_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2})\.\s*([a-z]+)\s*(\d{4})").unwrap());

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse a scraped price such as `"1,769"`, `"€ 1.85"` or `" 0.789 "`.
///
/// Empty input, `"-"` and `"n/a"` (any case) are explicit "no value" markers.
/// Only the first comma is treated as a decimal comma; every character that is
/// not a digit or a dot is then discarded before parsing.
pub fn parse_locale_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || s == "-" || s.eq_ignore_ascii_case("n/a") {
        return None;
    }

    let cleaned: String = s
        .replacen(',', ".", 1)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Map an English month name (any case) to 1..=12.
pub fn month_index(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}

/// Read the first `<day>. <Month> <year>` match in free text.
///
/// Only the first match is considered: an unknown month name or an impossible
/// calendar date there yields `None`, even if a later match would be valid.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_YEAR.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_index(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Like [`extract_date`], substituting `fallback` when no date is found.
pub fn parse_date_or(text: &str, fallback: NaiveDate) -> NaiveDate {
    match extract_date(text) {
        Some(date) => date,
        None => {
            warn!(fallback = %fallback, "No as-of date found in page text; using fallback");
            fallback
        }
    }
}

/// Extract the as-of date as `YYYY-MM-DD`, defaulting to today's UTC date.
pub fn parse_date_from_free_text(text: &str) -> String {
    parse_date_or(text, today_utc()).format("%Y-%m-%d").to_string()
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
