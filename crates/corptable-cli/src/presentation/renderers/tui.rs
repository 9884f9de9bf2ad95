//! TUI renderer for the interactive table.
//!
//! - `TuiRenderer` paints a `TableScreenViewModel` (table, bars, overlay).
//! - `KeySource` is where the event loop gets keys from; `CrosstermKeys`
//!   reads the real terminal, tests feed scripted keys.
//! - `setup_terminal` / `restore_terminal` bracket the alternate screen.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::{OverlayViewModel, TableScreenViewModel};
use crate::presentation::views::tui::{
    CompanyTableView, ConfirmView, FilterBarView, FormView, PaginationView, StatusBarView,
    centered_rect,
};

const FORM_WIDTH: u16 = 64;
const CONFIRM_WIDTH: u16 = 50;
const CONFIRM_HEIGHT: u16 = 6;

pub trait KeySource {
    /// Next key press; `None` when input has ended.
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Blocking reader over crossterm events.
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
                // Wake the loop so the next draw picks up the new size
                Event::Resize(_, _) => return Ok(Some(KeyEvent::from(KeyCode::Null))),
                _ => {}
            }
        }
    }
}

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

#[derive(Debug, Default)]
pub struct TuiRenderer;

impl TuiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Layout: [filter bar | table | pagination | status bar], overlay on top.
    pub fn render(&self, f: &mut Frame, screen: &TableScreenViewModel) {
        let size = f.area();
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(size);

        f.render_widget(FilterBarView::new(&screen.filter_bar), chunks[0]);
        f.render_widget(
            CompanyTableView::new(&screen.list, screen.selected),
            chunks[1],
        );
        f.render_widget(PaginationView::new(&screen.list.pagination), chunks[2]);
        f.render_widget(StatusBarView::new(&screen.status_bar), chunks[3]);

        match &screen.overlay {
            Some(OverlayViewModel::Form(form)) => {
                let view = FormView::new(form);
                let area = centered_rect(FORM_WIDTH, view.height(), size);
                f.render_widget(view, area);
            }
            Some(OverlayViewModel::Confirm(confirm)) => {
                let area = centered_rect(CONFIRM_WIDTH, CONFIRM_HEIGHT, size);
                f.render_widget(ConfirmView::new(confirm), area);
            }
            None => {}
        }
    }
}
