use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::presentation::view_models::CompanyListViewModel;
use crate::presentation::views::company::{row_cells, sort_arrow};

pub struct CompanyTableView<'a> {
    model: &'a CompanyListViewModel,
    selected: Option<usize>,
}

impl<'a> CompanyTableView<'a> {
    pub fn new(model: &'a CompanyListViewModel, selected: Option<usize>) -> Self {
        Self { model, selected }
    }
}

impl<'a> Widget for CompanyTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Companies ")
            .borders(Borders::ALL);

        if self.model.rows.is_empty() {
            Paragraph::new(Line::styled(
                "No companies found",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let header = Row::new(self.model.columns.iter().map(|column| {
            Cell::from(format!(
                "{} {}{}",
                column.hotkey,
                column.label,
                sort_arrow(column.sort)
            ))
        }))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self
            .model
            .rows
            .iter()
            .map(|row| Row::new(row_cells(row).map(Cell::from)));

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(24),
            Constraint::Percentage(26),
            Constraint::Length(20),
            Constraint::Fill(1),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
