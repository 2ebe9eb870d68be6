use chrono::NaiveDate;
use log::debug;

use crate::model::entry::Entry;
use crate::model::summary::Streak;
use crate::time::days_between;

/// Current and longest runs of consecutive calendar days with an entry.
///
/// Dates are deduplicated first, so several entries on one day count once.
/// The current streak survives a single missing day: it is non-zero only
/// when the latest entry falls on `today` or the day before.
pub fn compute_streak(entries: &[Entry], today: NaiveDate) -> Streak {
    let mut days: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    days.sort();
    days.dedup();

    let Some(&latest) = days.last() else {
        return Streak::default();
    };

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in &days {
        run = match prev {
            Some(p) if days_between(p, day) == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    let current = if matches!(days_between(latest, today), 0 | 1) {
        // Length of the run ending at `latest`, walking backwards.
        let tail = days.windows(2)
            .rev()
            .take_while(|pair| days_between(pair[0], pair[1]) == 1)
            .count();
        tail as u32 + 1
    } else {
        0
    };

    debug!(
        "streak over {} distinct days: current {}, longest {}",
        days.len(),
        current,
        longest
    );

    Streak { current, longest }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entries_on(days: &[NaiveDate]) -> Vec<Entry> {
        days.iter().map(|d| Entry::new(*d, 50, "")).collect()
    }

    fn gap_sample() -> Vec<Entry> {
        entries_on(&[
            day(2024, 1, 1),
            day(2024, 1, 2),
            day(2024, 1, 3),
            day(2024, 1, 5),
        ])
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(compute_streak(&[], day(2024, 1, 1)), Streak { current: 0, longest: 0 });
    }

    #[test]
    fn test_current_run_ending_today() {
        let entries = entries_on(&[day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3)]);
        assert_eq!(compute_streak(&entries, day(2024, 1, 3)), Streak { current: 3, longest: 3 });
    }

    #[test]
    fn test_latest_entry_yesterday_still_counts() {
        let streak = compute_streak(&gap_sample(), day(2024, 1, 6));
        assert_eq!(streak, Streak { current: 1, longest: 3 });
    }

    #[test]
    fn test_lapsed_after_two_days() {
        let streak = compute_streak(&gap_sample(), day(2024, 1, 7));
        assert_eq!(streak, Streak { current: 0, longest: 3 });
    }

    #[test]
    fn test_current_and_longest_differ() {
        let entries = entries_on(&[
            day(2026, 1, 1),
            day(2026, 1, 2),
            day(2026, 1, 3),
            day(2026, 1, 5),
            day(2026, 1, 6),
        ]);
        assert_eq!(compute_streak(&entries, day(2026, 1, 6)), Streak { current: 2, longest: 3 });
    }

    #[test]
    fn test_duplicates_and_unsorted_input() {
        let entries = entries_on(&[
            day(2024, 2, 29),
            day(2024, 3, 1),
            day(2024, 2, 28),
            day(2024, 3, 1),
            day(2024, 2, 28),
        ]);
        let streak = compute_streak(&entries, day(2024, 3, 1));
        assert_eq!(streak, Streak { current: 3, longest: 3 });
    }

    #[test]
    fn test_future_entry_breaks_current() {
        let entries = entries_on(&[day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 9)]);
        let streak = compute_streak(&entries, day(2024, 1, 2));
        assert_eq!(streak, Streak { current: 0, longest: 2 });
    }

    #[test]
    fn test_bounded_by_distinct_days() {
        let entries = entries_on(&[day(2024, 1, 1), day(2024, 1, 1), day(2024, 1, 1)]);
        let streak = compute_streak(&entries, day(2024, 1, 1));
        assert_eq!(streak, Streak { current: 1, longest: 1 });
    }
}
