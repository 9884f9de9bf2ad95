use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::FilterBarViewModel;

pub struct FilterBarView<'a> {
    model: &'a FilterBarViewModel,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a FilterBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.model.editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(" Manager filter [/] ")
            .borders(Borders::ALL)
            .border_style(border);

        let mut spans = Vec::new();
        if self.model.text.is_empty() && !self.model.editing {
            spans.push(Span::styled(
                self.model.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(self.model.text.as_str()));
        }
        if self.model.editing {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
