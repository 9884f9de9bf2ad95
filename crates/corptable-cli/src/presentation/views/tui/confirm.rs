use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ConfirmViewModel;

pub struct ConfirmView<'a> {
    model: &'a ConfirmViewModel,
}

impl<'a> ConfirmView<'a> {
    pub fn new(model: &'a ConfirmViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ConfirmView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.model.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let lines = vec![
            Line::from(self.model.message.as_str()),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    "[y] Delete",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::raw("[n] Keep"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
