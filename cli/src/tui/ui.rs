use moodboard_core::{format_display_date, RangeSelection};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Line as CanvasLine, Points},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::summary::{format_day_mood, plural_days, window_label, PLACEHOLDER};
use crate::tui::app::{App, CHART_HEIGHT, CHART_WIDTH};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    line: Color,
    point: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    line: Color::Blue,
    point: Color::LightBlue,
};

const NOTE_COLUMN_MIN: u16 = 10;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / range chips
            Constraint::Length(6), // Summary cards
            Constraint::Min(8),    // Chart + entries
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    draw_cards(f, app, main_chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Length(1), // Gutter
            Constraint::Percentage(45),
        ])
        .split(main_chunks[2]);

    draw_chart(f, app, content_chunks[0]);
    draw_entries(f, app, content_chunks[2]);

    let help = Line::from(vec![
        Span::styled("RANGE: ", Style::default().fg(THEME.muted)),
        Span::styled("1/2/3 tab ←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("SCROLL: ", Style::default().fg(THEME.muted)),
        Span::styled("j/k ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(1),
            Constraint::Length(36),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled("MOOD DASHBOARD", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(format!("as of {}", format_display_date(app.today)), Style::default().fg(THEME.muted))),
    ]);
    f.render_widget(title, header_layout[0]);

    let mut chips = Vec::new();
    for (i, option) in RangeSelection::ALL.iter().enumerate() {
        let style = if *option == app.selection {
            Style::default().fg(Color::Black).bg(THEME.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(THEME.text)
        };
        chips.push(Span::styled(format!(" {} {} ", i + 1, option.label()), style));
        chips.push(Span::raw(" "));
    }
    let picker = Paragraph::new(Line::from(chips))
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    f.render_widget(picker, header_layout[2]);

    f.render_widget(
        Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)),
        area,
    );
}

fn card_lines(app: &App) -> Vec<(&'static str, String)> {
    let summary = &app.view.summary;
    let streak = &app.view.streak;
    vec![
        ("Entries", summary.count.to_string()),
        ("Avg mood", if summary.has_data { format!("{:.1}", summary.average_mood) } else { PLACEHOLDER.to_string() }),
        ("Volatility", if summary.has_data { format!("{:.1}", summary.stddev) } else { PLACEHOLDER.to_string() }),
        ("Current streak", format!("{}d", streak.current)),
        ("Longest streak", format!("{}d", streak.longest)),
        ("Best day", format_day_mood(summary.best.as_ref())),
        ("Worst day", format_day_mood(summary.worst.as_ref())),
        ("Export window", plural_days(u64::from(app.view.export_days))),
    ]
}

fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    let cards = card_lines(app);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    // Two cards stacked per column.
    for (column, pair) in columns.iter().zip(cards.chunks(2)) {
        let mut lines = Vec::new();
        for (label, value) in pair {
            lines.push(Line::from(Span::styled(label.to_uppercase(), Style::default().fg(THEME.muted))));
            lines.push(Line::from(Span::styled(value.clone(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD))));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted));
        f.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn draw_chart(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(format!(" Mood trend · {} · 1–100 ", window_label(app.view.window_days)));

    if app.view.points.is_empty() {
        let empty = Paragraph::new("No data for this range yet.")
            .style(Style::default().fg(THEME.muted))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Plot space grows downward, the canvas grows upward.
    let coords: Vec<(f64, f64)> = app.view.points.iter()
        .map(|p| (p.x, CHART_HEIGHT - p.y))
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, CHART_WIDTH])
        .y_bounds([0.0, CHART_HEIGHT])
        .paint(|ctx| {
            for pair in coords.windows(2) {
                ctx.draw(&CanvasLine::new(pair[0].0, pair[0].1, pair[1].0, pair[1].1, THEME.line));
            }
            ctx.draw(&Points { coords: &coords, color: THEME.point });
        });
    f.render_widget(canvas, area);
}

fn draw_entries(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(format!(" Entries · newest first · {} shown ", app.view.newest_first.len()));

    if app.view.newest_first.is_empty() {
        let empty = Paragraph::new("No entries yet.")
            .style(Style::default().fg(THEME.muted))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Date (13) + mood (5) + spacing + borders.
    let note_width = area.width.saturating_sub(24).max(NOTE_COLUMN_MIN) as usize;

    let rows: Vec<Row> = app.view.newest_first.iter().map(|entry| {
        let note = if entry.note.is_empty() { PLACEHOLDER.to_string() } else { truncate_to_width(&entry.note, note_width) };
        Row::new(vec![
            Span::raw(format_display_date(entry.date)),
            Span::styled(entry.mood.to_string(), Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)),
            Span::raw(note),
        ])
    }).collect();

    let header = Row::new(vec!["Date", "Mood", "Note"])
        .style(Style::default().fg(THEME.muted).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, [Constraint::Length(13), Constraint::Length(5), Constraint::Min(NOTE_COLUMN_MIN)])
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut app.state);
}

/// Cuts `text` to at most `max` terminal columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("calm", 10), "calm");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("a long afternoon walk", 8), "a long …");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_to_width("散歩した日", 5), "散歩…");
    }
}
