use std::cmp::Ordering;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` calendar day.
///
/// Only the year, month and day components are read, so the result never
/// depends on the local timezone or on a time of day.
pub fn parse_date_key(input: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(anyhow!("Invalid date key '{}': expected YYYY-MM-DD", input));
    }

    let year: i32 = parse_component(parts[0], input)?;
    let month: u32 = parse_component(parts[1], input)?;
    let day: u32 = parse_component(parts[2], input)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("Invalid date key '{}': no such calendar day", input))
}

fn parse_component<T: std::str::FromStr>(part: &str, input: &str) -> Result<T> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("Invalid date key '{}': non-numeric component '{}'", input, part));
    }
    part.parse::<T>()
        .map_err(|_| anyhow!("Invalid date key '{}': component '{}' out of range", input, part))
}

pub fn compare_date_keys(a: NaiveDate, b: NaiveDate) -> Ordering {
    a.cmp(&b)
}

/// Signed number of whole days from `a` to `b` (`b - a`).
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human-facing form used by the dashboard cards and tables, e.g. `Mar 10, 2024`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Serde adapter so `Entry.date` goes through the same parser as everything else.
pub mod date_key_serde {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date_key(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_key(&raw).map_err(de::Error::custom)
    }
}
