mod logging;
mod report;
mod summary;
mod table;
mod tui;

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Parser, Subcommand};
use log::info;
use moodboard_core::{
    build_for_days, build_from_document, compute_streak, parse_date_key, repository::default_data_dir,
    DashboardUseCase, DashboardView, ExportDocument, ExportRepository, FileExportRepository, PlotRect,
    RangeSelection,
};

use crate::logging::LogTarget;

#[derive(Parser)]
#[command(name = "moodboard")]
#[command(about = "Dashboard for mood-tracker exports", long_about = None)]
struct Cli {
    /// Export file to read (default: ~/.moodboard/entries.json)
    #[arg(long, global = true)]
    export: Option<PathBuf>,

    /// Reference day for ranges and streaks, YYYY-MM-DD (default: today)
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Dashboard {
        /// Initial range: 7d, 30d or all
        #[arg(long, default_value = "7d", value_parser = parse_range)]
        range: RangeSelection,
    },
    /// Print summary statistics for a range
    #[command(group(
        ArgGroup::new("window")
            .args(["range", "days"])
            .multiple(false)
    ))]
    Summary {
        #[arg(long, value_parser = parse_range)]
        range: Option<RangeSelection>,
        /// Trailing window of N days instead of a preset range
        #[arg(long)]
        days: Option<u32>,
    },
    /// Print current and longest streaks over all entries
    Streak,
    /// List entries, newest first
    List {
        #[arg(long, default_value = "all", value_parser = parse_range)]
        range: RangeSelection,
    },
    /// Write an HTML report with a trend chart
    #[command(group(
        ArgGroup::new("window")
            .args(["range", "days"])
            .multiple(false)
    ))]
    Report {
        #[arg(long, value_parser = parse_range)]
        range: Option<RangeSelection>,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long, default_value = "report.html")]
        out: PathBuf,
    },
    /// Compare the export's precomputed summary and streak with its entries
    Check,
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    parse_date_key(raw).map_err(|e| e.to_string())
}

fn parse_range(raw: &str) -> Result<RangeSelection, String> {
    raw.parse::<RangeSelection>().map_err(|e| e.to_string())
}

/// Runs the pipeline for either a preset range or `--days N` (7 days when neither is given).
fn build_view(
    document: &ExportDocument,
    range: Option<RangeSelection>,
    days: Option<u32>,
    today: NaiveDate,
    rect: PlotRect,
) -> Result<DashboardView> {
    match (range, days) {
        (_, Some(days)) => build_for_days(document, days, today, rect),
        (range, None) => Ok(build_from_document(document, range.unwrap_or_default(), today, rect)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Sampled once; everything downstream takes it as a parameter.
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let command = cli.command.unwrap_or(Commands::Dashboard { range: RangeSelection::default() });

    let log_target = match &command {
        Commands::Dashboard { .. } => LogTarget::File(default_data_dir().unwrap_or_else(|_| std::env::temp_dir())),
        _ => LogTarget::Stderr,
    };
    let _logger = logging::init(cli.verbose, log_target)?;

    let repo = FileExportRepository::new(cli.export)?;
    info!("Using export {} with today = {}", repo.path().display(), today);

    match command {
        Commands::Dashboard { range } => {
            let document = repo.load()?;
            tui::run(document, range, today)?;
        },
        Commands::Summary { range, days } => {
            let document = repo.load()?;
            let view = build_view(&document, range, days, today, report::report_rect())?;
            println!("{}", summary::format_summary(&view.summary, view.window_days));
        },
        Commands::Streak => {
            let document = repo.load()?;
            let streak = compute_streak(&document.entries, today);
            println!("{}", summary::format_streak(&streak));
        },
        Commands::List { range } => {
            let view = DashboardUseCase::new(&repo).build(range, today, report::report_rect())?;
            println!("{}", table::render_entries(&view.newest_first, view.window_days));
        },
        Commands::Report { range, days, out } => {
            let document = repo.load()?;
            let view = build_view(&document, range, days, today, report::report_rect())?;
            report::write_report(&view, &out)?;
            println!("Report written to {}", out.display());
        },
        Commands::Check => {
            let discrepancies = DashboardUseCase::new(&repo).check(today)?;
            if discrepancies.is_empty() {
                println!("Export summary and streak match the entries.");
            } else {
                for discrepancy in &discrepancies {
                    println!("- {}", discrepancy);
                }
                bail!("{} field(s) in the export disagree with its entries", discrepancies.len());
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodboard_core::{Entry, ExportMeta};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn document() -> ExportDocument {
        ExportDocument {
            meta: ExportMeta { generated_at: "2024-03-10".to_string(), days: 7 },
            summary: None,
            streak: None,
            entries: vec![Entry::new(day(1), 40, ""), Entry::new(day(9), 60, ""), Entry::new(day(10), 80, "")],
        }
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["moodboard", "summary", "--days", "3", "--today", "2024-03-10", "-vv"]).unwrap();
        assert_eq!(cli.today, Some(day(10)));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Summary { range: None, days: Some(3) })));
    }

    #[test]
    fn test_cli_rejects_range_with_days() {
        assert!(Cli::try_parse_from(["moodboard", "summary", "--range", "7d", "--days", "3"]).is_err());
        assert!(Cli::try_parse_from(["moodboard", "list", "--range", "90d"]).is_err());
        assert!(Cli::try_parse_from(["moodboard", "streak", "--today", "2024-13-01"]).is_err());
    }

    #[test]
    fn test_build_view_defaults_to_seven_days() {
        let view = build_view(&document(), None, None, day(10), report::report_rect()).unwrap();
        assert_eq!(view.window_days, Some(7));
        assert_eq!(view.summary.count, 2);
    }

    #[test]
    fn test_build_view_with_days() {
        let view = build_view(&document(), None, Some(10), day(10), report::report_rect()).unwrap();
        assert_eq!(view.summary.count, 3);
        assert!(build_view(&document(), None, Some(0), day(10), report::report_rect()).is_err());
    }
}
