use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::model::entry::Entry;
use crate::time::date_key_serde;

/// Aggregate statistics over one filtered view.
///
/// `average_mood` and `stddev` are zero and `best`/`worst` are `None`
/// whenever `has_data` is false.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub has_data: bool,
    pub count: usize,
    pub average_mood: f64,
    pub stddev: f64,
    pub best: Option<Entry>,
    pub worst: Option<Entry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

/// The `{date, mood}` pair the exporter writes for best/worst days.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DayMood {
    #[serde(with = "date_key_serde")]
    pub date: NaiveDate,
    pub mood: i32,
}

impl From<&Entry> for DayMood {
    fn from(entry: &Entry) -> Self {
        Self {
            date: entry.date,
            mood: entry.mood,
        }
    }
}
