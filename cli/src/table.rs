use moodboard_core::{format_date_key, Entry};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::summary::{empty_message, PLACEHOLDER};

#[derive(Tabled, Debug, PartialEq)]
pub struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Mood")]
    mood: i32,
    #[tabled(rename = "Note")]
    note: String,
}

/// Rows in the order given; callers pass entries newest first.
pub fn entry_rows(entries: &[Entry]) -> Vec<EntryRow> {
    entries.iter()
        .map(|e| EntryRow {
            date: format_date_key(e.date),
            mood: e.mood,
            note: if e.note.is_empty() { PLACEHOLDER.to_string() } else { e.note.clone() },
        })
        .collect()
}

pub fn render_entries(entries: &[Entry], window_days: Option<u32>) -> String {
    if entries.is_empty() {
        return empty_message(window_days);
    }

    let mut table = Table::new(entry_rows(entries));
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    format!("{}\n{} shown", table, entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_rows_use_placeholder_for_empty_note() {
        let rows = entry_rows(&[Entry::new(day(2), 64, ""), Entry::new(day(1), 30, "rough day")]);
        assert_eq!(rows[0].note, PLACEHOLDER);
        assert_eq!(rows[0].date, "2026-01-02");
        assert_eq!(rows[1].note, "rough day");
    }

    #[test]
    fn test_render_entries() {
        let text = render_entries(&[Entry::new(day(2), 64, "coffee, then rain")], None);
        assert!(text.contains("2026-01-02"));
        assert!(text.contains("coffee, then rain"));
        assert!(text.ends_with("1 shown"));
        assert_eq!(render_entries(&[], None), "No entries yet.");
    }

    #[test]
    fn test_empty_window_names_the_range() {
        assert_eq!(render_entries(&[], Some(7)), "No entries in the last 7 days.");
        assert_eq!(render_entries(&[], Some(30)), "No entries in the last 30 days.");
    }
}
