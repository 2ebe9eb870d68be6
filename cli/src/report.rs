use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use moodboard_core::{format_display_date, DashboardView, PlotPoint, PlotRect};

use crate::summary::{format_day_mood, plural_days, window_label, PLACEHOLDER};

pub const CANVAS_WIDTH: f64 = 720.0;
pub const CANVAS_HEIGHT: f64 = 360.0;
pub const CANVAS_PADDING: f64 = 48.0;

const FONT: &str = "Helvetica, Arial, sans-serif";

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;background:#0f172a;color:#e2e8f0;margin:0;padding:32px;}\
h1{margin:0 0 8px 0;font-size:28px;}\
p.lead{margin:0 0 24px 0;color:#cbd5e1;}\
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:16px;margin-bottom:24px;}\
.card{background:#1e293b;border:1px solid #334155;border-radius:12px;padding:16px;}\
.label{font-size:12px;letter-spacing:0.08em;text-transform:uppercase;color:#94a3b8;margin-bottom:6px;display:block;}\
.value{font-size:22px;font-weight:700;}\
.chart{background:#fff;border-radius:12px;border:1px solid #e2e8f0;padding:12px;margin-bottom:24px;}\
.chart h2{color:#0f172a;margin:0 0 8px 0;}\
.empty{color:#334155;font-style:italic;}\
table{width:100%;border-collapse:collapse;}\
th,td{text-align:left;padding:8px;border-bottom:1px solid #334155;}";

/// Plot area the report projects into.
pub fn report_rect() -> PlotRect {
    PlotRect::padded(CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_PADDING)
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline SVG trend line over already projected points.
pub fn render_svg(points: &[PlotPoint]) -> String {
    if points.is_empty() {
        return "<div class=\"empty\">No data to chart.</div>".to_string();
    }

    let polyline = points.iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" role=\"img\" aria-label=\"Mood over time (1-100)\">",
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT
    );
    let _ = write!(
        svg,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#f8fafc\" />",
        CANVAS_WIDTH, CANVAS_HEIGHT
    );
    let _ = write!(
        svg,
        "<polyline fill=\"none\" stroke=\"#2563eb\" stroke-width=\"3\" points=\"{}\"></polyline>",
        polyline
    );
    for p in points {
        let _ = write!(
            svg,
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"5\" fill=\"#2563eb\" stroke=\"white\" stroke-width=\"2\"></circle>",
            p.x, p.y
        );
    }
    let label_y = CANVAS_HEIGHT - CANVAS_PADDING / 3.0;
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{:.1}\" fill=\"#475569\" font-family=\"{}\" font-size=\"12\">Older</text>",
        CANVAS_PADDING, label_y, FONT
    );
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{:.1}\" fill=\"#475569\" font-family=\"{}\" font-size=\"12\" text-anchor=\"end\">Newer</text>",
        CANVAS_WIDTH - CANVAS_PADDING, label_y, FONT
    );
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{:.1}\" fill=\"#475569\" font-family=\"{}\" font-size=\"12\">Mood (1-100)</text>",
        CANVAS_PADDING, CANVAS_PADDING / 1.8, FONT
    );
    svg.push_str("</svg>");
    svg
}

fn card(label: &str, value: &str) -> String {
    format!(
        "<div class=\"card\"><span class=\"label\">{}</span><div class=\"value\">{}</div></div>",
        label,
        escape_html(value)
    )
}

/// Full standalone page for one view. `view.points` must come from [`report_rect`].
pub fn build_report(view: &DashboardView) -> String {
    let summary = &view.summary;
    let (average, volatility) = if summary.has_data {
        (format!("{:.2}", summary.average_mood), format!("{:.1}", summary.stddev))
    } else {
        (PLACEHOLDER.to_string(), PLACEHOLDER.to_string())
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>Mood Report</title>");
    let _ = write!(html, "<style>{}</style></head><body>", STYLE);
    html.push_str("<h1>Mood Report</h1>");
    let _ = write!(
        html,
        "<p class=\"lead\">{} of mood entries, as of {}.</p>",
        window_label(view.window_days),
        format_display_date(view.today)
    );

    html.push_str("<div class=\"cards\">");
    html.push_str(&card("Entries", &summary.count.to_string()));
    html.push_str(&card("Average Mood", &average));
    html.push_str(&card("Volatility", &volatility));
    html.push_str(&card("Current Streak", &plural_days(u64::from(view.streak.current))));
    html.push_str(&card("Longest Streak", &plural_days(u64::from(view.streak.longest))));
    html.push_str(&card("Best Day", &format_day_mood(summary.best.as_ref())));
    html.push_str(&card("Toughest Day", &format_day_mood(summary.worst.as_ref())));
    html.push_str("</div>");

    let _ = write!(
        html,
        "<div class=\"chart\"><h2>Mood Over Time</h2>{}</div>",
        render_svg(&view.points)
    );

    if !view.newest_first.is_empty() {
        html.push_str("<table><thead><tr><th>Date</th><th>Mood</th><th>Note</th></tr></thead><tbody>");
        for entry in &view.newest_first {
            let note = if entry.note.is_empty() { PLACEHOLDER.to_string() } else { escape_html(&entry.note) };
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                format_display_date(entry.date),
                entry.mood,
                note
            );
        }
        html.push_str("</tbody></table>");
    }

    html.push_str("</body></html>");
    html
}

pub fn write_report(view: &DashboardView, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(out, build_report(view))
        .with_context(|| format!("Failed to open report file for writing: {}", out.display()))?;
    info!("Report written to {}", out.display());
    Ok(())
}
