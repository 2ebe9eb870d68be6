use log::debug;

use crate::model::entry::Entry;
use crate::model::summary::Summary;

/// Count, mean, population standard deviation and best/worst day.
///
/// Ties on mood go to the latest date for `best` and the earliest date for
/// `worst`. Moods are used as-is, without clamping.
pub fn summarize(entries: &[Entry]) -> Summary {
    let Some(first) = entries.first() else {
        return Summary::default();
    };

    let mut best = first;
    let mut worst = first;
    let mut total: i64 = 0;

    for entry in entries {
        total += i64::from(entry.mood);
        if entry.mood > best.mood || (entry.mood == best.mood && entry.date > best.date) {
            best = entry;
        }
        if entry.mood < worst.mood || (entry.mood == worst.mood && entry.date < worst.date) {
            worst = entry;
        }
    }

    let count = entries.len();
    let average_mood = total as f64 / count as f64;
    let variance = entries.iter()
        .map(|e| {
            let diff = f64::from(e.mood) - average_mood;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    debug!("summarized {} entries: mean {:.2}", count, average_mood);

    Summary {
        has_data: true,
        count,
        average_mood,
        stddev: variance.sqrt(),
        best: Some(best.clone()),
        worst: Some(worst.clone()),
    }
}
