use anyhow::{anyhow, Result};
use chrono::{Days, NaiveDate};
use log::debug;

use crate::model::entry::Entry;
use crate::model::range::RangeSelection;

/// Earliest day inside a trailing `days`-day window ending on `today`.
///
/// A 7-day window includes today and the 6 days before it.
pub fn cutoff_date(days: u32, today: NaiveDate) -> Result<NaiveDate> {
    if days == 0 {
        return Err(anyhow!("days must be positive"));
    }
    Ok(window_start(days, today))
}

/// Windows reaching past the earliest representable day start at `NaiveDate::MIN`.
fn window_start(days: u32, today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .unwrap_or(NaiveDate::MIN)
}

pub fn filter_entries(entries: &[Entry], selection: RangeSelection, today: NaiveDate) -> Vec<Entry> {
    let filtered = match selection.window_days() {
        None => entries.to_vec(),
        Some(days) => keep_from(entries, window_start(days, today)),
    };
    debug!(
        "range {}: kept {} of {} entries (today {})",
        selection,
        filtered.len(),
        entries.len(),
        today
    );
    filtered
}

/// Arbitrary-length version of the trailing window, used by `--days`.
pub fn collect_recent(entries: &[Entry], days: u32, today: NaiveDate) -> Result<Vec<Entry>> {
    let cutoff = cutoff_date(days, today)?;
    Ok(keep_from(entries, cutoff))
}

fn keep_from(entries: &[Entry], cutoff: NaiveDate) -> Vec<Entry> {
    entries.iter()
        .filter(|e| e.date >= cutoff)
        .cloned()
        .collect()
}
