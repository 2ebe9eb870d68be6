use chrono::NaiveDate;
use moodboard_core::{build_from_document, DashboardView, ExportDocument, PlotRect, RangeSelection};
use ratatui::widgets::TableState;

/// Canvas units the chart is projected into; the canvas widget scales them to the terminal.
pub const CHART_WIDTH: f64 = 100.0;
pub const CHART_HEIGHT: f64 = 100.0;

pub fn chart_rect() -> PlotRect {
    PlotRect::new(0.0, 0.0, CHART_WIDTH, CHART_HEIGHT)
}

pub struct App {
    document: ExportDocument,
    pub today: NaiveDate,
    pub selection: RangeSelection,
    pub view: DashboardView,
    pub state: TableState,
}

impl App {
    pub fn new(document: ExportDocument, selection: RangeSelection, today: NaiveDate) -> App {
        let view = build_from_document(&document, selection, today, chart_rect());
        let mut app = App {
            document,
            today,
            selection,
            view,
            state: TableState::default(),
        };
        app.reset_selection();
        app
    }

    pub fn select_range(&mut self, selection: RangeSelection) {
        if self.selection == selection {
            return;
        }
        self.selection = selection;
        // Re-run from the untouched document on every switch.
        self.view = build_from_document(&self.document, selection, self.today, chart_rect());
        self.reset_selection();
    }

    pub fn next_range(&mut self) {
        self.select_range(self.selection.next());
    }

    pub fn previous_range(&mut self) {
        self.select_range(self.selection.previous());
    }

    pub fn generated_at(&self) -> &str {
        &self.document.meta.generated_at
    }

    pub fn next(&mut self) {
        let len = self.view.newest_first.len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.view.newest_first.len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn reset_selection(&mut self) {
        let first = if self.view.newest_first.is_empty() { None } else { Some(0) };
        self.state.select(first);
    }
}
