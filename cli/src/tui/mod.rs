pub mod app;
pub mod ui;

use std::{io, time::Duration};

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use moodboard_core::{ExportDocument, RangeSelection};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::App;

pub fn run(document: ExportDocument, selection: RangeSelection, today: NaiveDate) -> Result<()> {
    let mut app = App::new(document, selection, today);
    info!("Dashboard opened on {} (export generated {})", selection, app.generated_at());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('1') => app.select_range(RangeSelection::Last7Days),
                    KeyCode::Char('2') => app.select_range(RangeSelection::Last30Days),
                    KeyCode::Char('3') => app.select_range(RangeSelection::AllTime),
                    KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_range(),
                    KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_range(),
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    _ => {}
                }
            }
        }
    }
}
