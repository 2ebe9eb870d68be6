use std::fmt;

use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::Serialize;

use crate::model::entry::Entry;
use crate::model::export::{ExportDocument, ExportedSummary};
use crate::model::range::RangeSelection;
use crate::model::summary::{DayMood, Streak, Summary};
use crate::repository::ExportRepository;
use crate::service::chart::{project, sort_chronologically, PlotPoint, PlotRect, ValueDomain};
use crate::service::range_filter::{collect_recent, filter_entries};
use crate::service::stats::summarize;
use crate::service::streak::compute_streak;

/// Everything one render of the dashboard needs, already computed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub window_days: Option<u32>, // None for all time
    pub today: NaiveDate,
    pub export_days: u32,
    pub summary: Summary,
    pub streak: Streak,
    pub chronological: Vec<Entry>,
    pub points: Vec<PlotPoint>,
    pub newest_first: Vec<Entry>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    pub field: &'static str,
    pub exported: String,
    pub derived: String,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: export says {}, entries give {}", self.field, self.exported, self.derived)
    }
}

pub struct DashboardUseCase<'a, R: ExportRepository> {
    repo: &'a R,
}

impl<'a, R: ExportRepository> DashboardUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn build(&self, selection: RangeSelection, today: NaiveDate, rect: PlotRect) -> Result<DashboardView> {
        let document = self.repo.load()?;
        Ok(build_from_document(&document, selection, today, rect))
    }

    pub fn check(&self, today: NaiveDate) -> Result<Vec<Discrepancy>> {
        let document = self.repo.load()?;
        check_document(&document, today)
    }
}

/// Runs the pipeline on an already loaded document.
pub fn build_from_document(
    document: &ExportDocument,
    selection: RangeSelection,
    today: NaiveDate,
    rect: PlotRect,
) -> DashboardView {
    let filtered = filter_entries(&document.entries, selection, today);
    view_from_filtered(document, filtered, selection.window_days(), today, rect)
}

/// Same as [`build_from_document`] for an arbitrary trailing window.
pub fn build_for_days(
    document: &ExportDocument,
    days: u32,
    today: NaiveDate,
    rect: PlotRect,
) -> Result<DashboardView> {
    let filtered = collect_recent(&document.entries, days, today)?;
    Ok(view_from_filtered(document, filtered, Some(days), today, rect))
}

fn view_from_filtered(
    document: &ExportDocument,
    filtered: Vec<Entry>,
    window_days: Option<u32>,
    today: NaiveDate,
    rect: PlotRect,
) -> DashboardView {
    let summary = summarize(&filtered);
    let streak = compute_streak(&filtered, today);
    let chronological = sort_chronologically(&filtered);
    let points = project(&chronological, ValueDomain::default(), rect);

    let mut newest_first = filtered;
    newest_first.sort_by(|a, b| b.date.cmp(&a.date));

    debug!("built view over {:?} days with {} points", window_days, points.len());

    DashboardView {
        window_days,
        today,
        export_days: document.meta.days,
        summary,
        streak,
        chronological,
        points,
        newest_first,
    }
}

/// Re-derives the exporter's `summary` and `streak` blocks from `entries`
/// and lists every field that disagrees.
///
/// The exporter summarizes its own `meta.days` window and computes streaks
/// over every entry, both relative to the day it ran; that day is read from
/// `meta.generated_at`, falling back to `today`. Floats are compared at the
/// one-decimal precision the exporter writes. Best/worst are compared by
/// mood only, since exporters may break date ties differently.
pub fn check_document(document: &ExportDocument, today: NaiveDate) -> Result<Vec<Discrepancy>> {
    let anchor = document.meta.generated_on().unwrap_or(today);
    let mut found = Vec::new();

    if let Some(exported) = &document.summary {
        let recent = collect_recent(&document.entries, document.meta.days, anchor)?;
        compare_summary(exported, &summarize(&recent), &mut found);
    }

    if let Some(exported) = document.streak {
        let derived = compute_streak(&document.entries, anchor);
        push_if_differs(&mut found, "streak.current", exported.current.to_string(), derived.current.to_string());
        push_if_differs(&mut found, "streak.longest", exported.longest.to_string(), derived.longest.to_string());
    }

    for discrepancy in &found {
        warn!("{}", discrepancy);
    }
    Ok(found)
}

fn compare_summary(exported: &ExportedSummary, derived: &Summary, found: &mut Vec<Discrepancy>) {
    push_if_differs(found, "summary.has_data", exported.has_data.to_string(), derived.has_data.to_string());
    push_if_differs(found, "summary.count", exported.count.to_string(), derived.count.to_string());
    push_if_differs(
        found,
        "summary.average_mood",
        format!("{:.1}", exported.average_mood),
        format!("{:.1}", derived.average_mood),
    );
    push_if_differs(
        found,
        "summary.stddev",
        format!("{:.1}", exported.stddev),
        format!("{:.1}", derived.stddev),
    );
    push_if_differs(
        found,
        "summary.best",
        mood_of(exported.best.as_ref()),
        mood_of(derived.best.as_ref().map(DayMood::from).as_ref()),
    );
    push_if_differs(
        found,
        "summary.worst",
        mood_of(exported.worst.as_ref()),
        mood_of(derived.worst.as_ref().map(DayMood::from).as_ref()),
    );
}

fn mood_of(day: Option<&DayMood>) -> String {
    day.map(|d| d.mood.to_string()).unwrap_or_else(|| "null".to_string())
}

fn push_if_differs(found: &mut Vec<Discrepancy>, field: &'static str, exported: String, derived: String) {
    if exported != derived {
        found.push(Discrepancy { field, exported, derived });
    }
}
