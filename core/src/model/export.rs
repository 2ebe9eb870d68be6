use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};

use crate::model::entry::Entry;
use crate::model::summary::{DayMood, Streak};
use crate::time::parse_date_key;
use chrono::NaiveDate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExportMeta {
    pub generated_at: String,
    pub days: u32, // Window the exporter used for its own summary; display only.
}

impl ExportMeta {
    /// Calendar day the export was produced on, read from the leading
    /// `YYYY-MM-DD` of `generated_at`.
    pub fn generated_on(&self) -> Option<NaiveDate> {
        self.generated_at
            .get(..10)
            .and_then(|prefix| parse_date_key(prefix).ok())
    }
}

/// Summary block as written by the exporter. Redundant with `entries`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExportedSummary {
    pub has_data: bool,
    pub count: usize,
    pub average_mood: f64,
    pub stddev: f64,
    pub best: Option<DayMood>,
    pub worst: Option<DayMood>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub meta: ExportMeta,
    #[serde(default)]
    pub summary: Option<ExportedSummary>,
    #[serde(default)]
    pub streak: Option<Streak>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl ExportDocument {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse export document")
    }
}
