use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::PaginationViewModel;

pub struct PaginationView<'a> {
    model: &'a PaginationViewModel,
}

impl<'a> PaginationView<'a> {
    pub fn new(model: &'a PaginationViewModel) -> Self {
        Self { model }
    }
}

fn arrow(symbol: &str, enabled: bool) -> Span<'_> {
    let color = if enabled { Color::Cyan } else { Color::DarkGray };
    Span::styled(symbol, Style::default().fg(color))
}

impl<'a> Widget for PaginationView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.model;
        let rows = if p.total == 0 {
            "0 companies".to_string()
        } else {
            format!("rows {}-{} of {}", p.first_row, p.last_row, p.total)
        };

        let line = Line::from(vec![
            arrow("◀ ", p.has_prev),
            Span::raw(format!("Page {}/{}", p.page, p.total_pages)),
            arrow(" ▶", p.has_next),
            Span::styled(format!("   {}", rows), Style::default().fg(Color::DarkGray)),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
