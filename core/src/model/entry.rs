use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::time::date_key_serde;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    #[serde(with = "date_key_serde")]
    pub date: NaiveDate,
    pub mood: i32,
    #[serde(default)]
    pub note: String,
}

impl Entry {
    pub fn new(date: NaiveDate, mood: i32, note: impl Into<String>) -> Self {
        Self {
            date,
            mood,
            note: note.into(),
        }
    }
}
