//! TUI view components.
//!
//! Each component is a thin ratatui `Widget` over a borrowed view model.
//! Views do layout and styling only; text decisions come from presenters.

pub mod confirm;
pub mod filter_bar;
pub mod form;
pub mod pagination;
pub mod status_bar;
pub mod table;

pub use confirm::ConfirmView;
pub use filter_bar::FilterBarView;
pub use form::FormView;
pub use pagination::PaginationView;
pub use status_bar::StatusBarView;
pub use table::CompanyTableView;

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::presentation::view_models::StatusLevel;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(200, 50, area), area);
    }
}
