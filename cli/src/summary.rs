use moodboard_core::{format_date_key, Entry, Streak, Summary};

pub const PLACEHOLDER: &str = "—";

pub fn plural_days(n: u64) -> String {
    format!("{} day{}", n, if n == 1 { "" } else { "s" })
}

/// "Last 7 days" / "All time".
pub fn window_label(window_days: Option<u32>) -> String {
    match window_days {
        Some(days) => format!("Last {}", plural_days(u64::from(days))),
        None => "All time".to_string(),
    }
}

pub fn format_day_mood(entry: Option<&Entry>) -> String {
    entry.map(|e| format!("{} ({})", format_date_key(e.date), e.mood))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Shown instead of stats or rows when the window holds no entries.
pub fn empty_message(window_days: Option<u32>) -> String {
    match window_days {
        Some(days) => format!("No entries in the last {}.", plural_days(u64::from(days))),
        None => "No entries yet.".to_string(),
    }
}

pub fn format_summary(summary: &Summary, window_days: Option<u32>) -> String {
    if !summary.has_data {
        return empty_message(window_days);
    }

    [
        format!("Range: {}", window_label(window_days)),
        format!("Entries: {}", summary.count),
        format!("Average mood: {:.1}", summary.average_mood),
        format!("Best day: {}", format_day_mood(summary.best.as_ref())),
        format!("Worst day: {}", format_day_mood(summary.worst.as_ref())),
        format!("Mood volatility (std dev): {:.1}", summary.stddev),
    ]
    .join("\n")
}

pub fn format_streak(streak: &Streak) -> String {
    format!(
        "Current streak: {}\nLongest streak: {}",
        plural_days(u64::from(streak.current)),
        plural_days(u64::from(streak.longest))
    )
}
