//! Interactive table: key dispatch and the draw/read loop.
//!
//! `TableApp` holds what only the terminal UI needs (row selection, which
//! input has focus, the open form) on top of the `TableController`. Every key
//! runs to completion and the whole screen is redrawn from a fresh view model.

use std::io;

use anyhow::Result;
use corptable_runtime::CompanyStore;
use corptable_types::{Company, CompanyField, CompanyId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, info, warn};

use crate::controllers::{ConfirmDelete, DeleteOutcome, FormController, TableController};
use crate::presentation::presenters::{
    confirm_hints, filter_hints, form_hints, present_confirm, present_form,
};
use crate::presentation::renderers::tui::{restore_terminal, setup_terminal};
use crate::presentation::view_models::{OverlayViewModel, TableScreenViewModel};
use crate::presentation::{CrosstermKeys, KeySource, TuiRenderer};

enum Mode {
    Browse,
    Filter(String),
    Form(FormController),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
    Delete(CompanyId),
}

pub struct TableApp<S: CompanyStore> {
    table: TableController<S>,
    selected: usize,
    mode: Mode,
}

impl<S: CompanyStore> TableApp<S> {
    pub fn new(table: TableController<S>) -> Self {
        Self {
            table,
            selected: 0,
            mode: Mode::Browse,
        }
    }

    pub fn table(&self) -> &TableController<S> {
        &self.table
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn form(&self) -> Option<&FormController> {
        match &self.mode {
            Mode::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn screen(&self) -> TableScreenViewModel {
        let mut screen = self.table.view_model();
        if !screen.list.rows.is_empty() {
            screen.selected = Some(self.selected);
        }
        match &self.mode {
            Mode::Browse => {}
            Mode::Filter(draft) => {
                screen.filter_bar.text = draft.clone();
                screen.filter_bar.editing = true;
                screen.status_bar.hints = filter_hints();
            }
            Mode::Form(form) => {
                screen.overlay = Some(OverlayViewModel::Form(present_form(form)));
                screen.status_bar.hints = form_hints();
            }
        }
        screen
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Browse);
        let (mode, action) = match mode {
            Mode::Browse => self.browse_key(key),
            Mode::Filter(draft) => self.filter_key(draft, key),
            Mode::Form(form) => self.form_key(form, key),
        };
        self.mode = mode;
        self.clamp_selection();
        action
    }

    pub fn delete<C>(&mut self, id: CompanyId, confirm: &mut C) -> DeleteOutcome
    where
        C: ConfirmDelete + ?Sized,
    {
        let outcome = self.table.request_delete(id, confirm);
        debug!(%id, ?outcome, "delete requested");
        self.clamp_selection();
        outcome
    }

    fn selected_id(&self) -> Option<CompanyId> {
        self.table.page().items.get(self.selected).map(|c| c.id)
    }

    fn clamp_selection(&mut self) {
        let rows = self.table.page().items.len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }

    fn browse_key(&mut self, key: KeyEvent) -> (Mode, Action) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return (Mode::Browse, Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.selected += 1,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                if self.table.prev_page() {
                    self.selected = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                if self.table.next_page() {
                    self.selected = 0;
                }
            }
            KeyCode::Enter => {
                if let Some(form) = self.selected_id().and_then(|id| self.table.open_edit(id)) {
                    return (Mode::Form(form), Action::Continue);
                }
            }
            KeyCode::Char('a') => return (Mode::Form(self.table.open_add()), Action::Continue),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    return (Mode::Browse, Action::Delete(id));
                }
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.table.toggle_sort(CompanyField::ALL[index]);
                self.selected = 0;
            }
            KeyCode::Char('/') => {
                let draft = self.table.query().filter.clone().unwrap_or_default();
                return (Mode::Filter(draft), Action::Continue);
            }
            _ => {}
        }
        (Mode::Browse, Action::Continue)
    }

    fn filter_key(&mut self, mut draft: String, key: KeyEvent) -> (Mode, Action) {
        match key.code {
            KeyCode::Enter => return (Mode::Browse, Action::Continue),
            KeyCode::Esc => {
                self.table.set_filter("");
                self.selected = 0;
                return (Mode::Browse, Action::Continue);
            }
            KeyCode::Backspace => {
                draft.pop();
            }
            KeyCode::Char(c) => draft.push(c),
            _ => return (Mode::Filter(draft), Action::Continue),
        }
        self.table.set_filter(&draft);
        self.selected = 0;
        (Mode::Filter(draft), Action::Continue)
    }

    fn form_key(&mut self, mut form: FormController, key: KeyEvent) -> (Mode, Action) {
        let field = form.focused();
        match key.code {
            KeyCode::Esc => {
                self.table.submit(form.cancel());
                return (Mode::Browse, Action::Continue);
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Enter => match form.confirm() {
                Some(outcome) => {
                    if self.table.submit(outcome).closes_form() {
                        return (Mode::Browse, Action::Continue);
                    }
                }
                None => form.touch_all(),
            },
            KeyCode::Backspace => form.backspace(field),
            KeyCode::Char(c) => form.push_char(field, c),
            _ => {}
        }
        (Mode::Form(form), Action::Continue)
    }
}

/// Delete confirmation drawn as a modal over the current screen. Blocks on
/// the key source until the user answers.
struct ModalConfirm<'a, B: Backend, K: KeySource> {
    terminal: &'a mut Terminal<B>,
    renderer: &'a TuiRenderer,
    background: &'a TableScreenViewModel,
    keys: &'a mut K,
    error: Option<io::Error>,
}

impl<B: Backend, K: KeySource> ConfirmDelete for ModalConfirm<'_, B, K> {
    fn confirm_delete(&mut self, company: &Company) -> bool {
        let mut screen = self.background.clone();
        screen.overlay = Some(OverlayViewModel::Confirm(present_confirm(company)));
        screen.status_bar.hints = confirm_hints();
        let renderer = self.renderer;

        loop {
            if let Err(err) = self.terminal.draw(|f| renderer.render(f, &screen)) {
                self.error = Some(err);
                return false;
            }
            match self.keys.next_key() {
                Ok(Some(key)) => match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => return true,
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return false,
                    _ => {}
                },
                Ok(None) => return false,
                Err(err) => {
                    self.error = Some(err);
                    return false;
                }
            }
        }
    }
}

/// Draw, read a key, dispatch; until quit or the key source runs dry.
pub fn run_loop<B, S, K>(
    terminal: &mut Terminal<B>,
    app: &mut TableApp<S>,
    renderer: &TuiRenderer,
    keys: &mut K,
) -> Result<()>
where
    B: Backend,
    S: CompanyStore,
    K: KeySource,
{
    loop {
        let screen = app.screen();
        terminal.draw(|f| renderer.render(f, &screen))?;

        let Some(key) = keys.next_key()? else {
            return Ok(());
        };

        match app.handle_key(key) {
            Action::Continue => {}
            Action::Quit => return Ok(()),
            Action::Delete(id) => {
                let mut modal = ModalConfirm {
                    terminal: &mut *terminal,
                    renderer,
                    background: &screen,
                    keys: &mut *keys,
                    error: None,
                };
                app.delete(id, &mut modal);
                if let Some(err) = modal.error {
                    return Err(err.into());
                }
            }
        }
    }
}

pub fn handle<S: CompanyStore>(store: S, page_size: usize) -> Result<()> {
    let mut app = TableApp::new(TableController::new(store, page_size));
    let renderer = TuiRenderer::new();

    let mut terminal = setup_terminal()?;
    info!("table opened");
    let result = run_loop(&mut terminal, &mut app, &renderer, &mut CrosstermKeys);

    if let Err(err) = restore_terminal(&mut terminal) {
        warn!(error = %err, "failed to restore terminal");
    }
    info!(companies = app.table().store().len(), "table closed");
    result
}
