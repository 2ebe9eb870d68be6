pub mod model;
pub mod repository;
pub mod time;
pub mod service;
pub mod usecase;

pub use model::entry::Entry;
pub use model::export::{ExportDocument, ExportMeta, ExportedSummary};
pub use model::range::RangeSelection;
pub use model::summary::{DayMood, Streak, Summary};
pub use repository::{ExportRepository, FileExportRepository};
pub use time::{compare_date_keys, days_between, format_date_key, format_display_date, parse_date_key};
pub use service::chart::{project, sort_chronologically, PlotPoint, PlotRect, ValueDomain};
pub use service::range_filter::{collect_recent, cutoff_date, filter_entries};
pub use service::stats::summarize;
pub use service::streak::compute_streak;
pub use usecase::dashboard::{build_for_days, build_from_document, check_document, DashboardUseCase, DashboardView, Discrepancy};
