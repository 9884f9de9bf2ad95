use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::view_models::{FormFieldViewModel, FormViewModel};

/// Modal add/edit form, drawn over the table.
pub struct FormView<'a> {
    model: &'a FormViewModel,
}

impl<'a> FormView<'a> {
    pub fn new(model: &'a FormViewModel) -> Self {
        Self { model }
    }

    /// Rows needed: two per field, a spacer, the buttons, two borders.
    pub fn height(&self) -> u16 {
        (self.model.fields.len() as u16) * 2 + 4
    }
}

fn field_lines(field: &FormFieldViewModel) -> [Line<'_>; 2] {
    let label_style = if field.focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if field.focused { "> " } else { "  " };

    let mut label = vec![Span::styled(
        format!("{}{}", marker, field.label),
        label_style,
    )];
    if let Some(error) = &field.error {
        label.push(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        ));
    }

    let mut value = vec![Span::raw("    ")];
    if field.value.is_empty() {
        value.push(Span::styled(
            field.placeholder.as_str(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        value.push(Span::raw(field.value.as_str()));
    }
    if field.focused {
        value.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }

    [Line::from(label), Line::from(value)]
}

impl<'a> Widget for FormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.model.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let mut lines: Vec<Line> = self.model.fields.iter().flat_map(field_lines).collect();
        lines.push(Line::default());

        let save_style = if self.model.can_confirm {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("[Enter] Save", save_style),
            Span::raw("   "),
            Span::styled("[Esc] Cancel", Style::default()),
        ]));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
