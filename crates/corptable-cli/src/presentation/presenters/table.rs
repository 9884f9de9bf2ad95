use corptable_types::{CompanyPage, CompanyQuery};

use super::company::present_company_list;
use crate::controllers::Notice;
use crate::presentation::view_models::{
    FilterBarViewModel, KeyHintViewModel, StatusBarViewModel, StatusLevel, TableScreenViewModel,
};

fn hint(key: &str, action: &str) -> KeyHintViewModel {
    KeyHintViewModel {
        key: key.to_string(),
        action: action.to_string(),
    }
}

pub fn browse_hints() -> Vec<KeyHintViewModel> {
    vec![
        hint("↑/↓", "select"),
        hint("←/→", "page"),
        hint("1-5", "sort"),
        hint("/", "filter"),
        hint("Enter", "edit"),
        hint("a", "add"),
        hint("d", "delete"),
        hint("q", "quit"),
    ]
}

pub fn filter_hints() -> Vec<KeyHintViewModel> {
    vec![hint("Enter", "apply"), hint("Esc", "clear")]
}

pub fn form_hints() -> Vec<KeyHintViewModel> {
    vec![
        hint("Tab/Shift-Tab", "field"),
        hint("Enter", "save"),
        hint("Esc", "cancel"),
    ]
}

pub fn confirm_hints() -> Vec<KeyHintViewModel> {
    vec![hint("y", "delete"), hint("n/Esc", "keep")]
}

fn notice_level(notice: &Notice) -> StatusLevel {
    match notice {
        Notice::None | Notice::Info(_) => StatusLevel::Info,
        Notice::Success(_) => StatusLevel::Success,
        Notice::Error(_) => StatusLevel::Error,
    }
}

/// Table screen in browse mode: no selection, no overlay.
pub fn build_table_screen(
    page: &CompanyPage,
    query: &CompanyQuery,
    notice: &Notice,
) -> TableScreenViewModel {
    TableScreenViewModel {
        list: present_company_list(page, query),
        filter_bar: FilterBarViewModel {
            text: query.filter.clone().unwrap_or_default(),
            placeholder: "Filter by manager".to_string(),
            editing: false,
        },
        status_bar: StatusBarViewModel {
            message: notice.message().map(str::to_string),
            level: notice_level(notice),
            hints: browse_hints(),
        },
        selected: None,
        overlay: None,
    }
}
