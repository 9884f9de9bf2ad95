//! Declarative state of the interactive table screen.
//!
//! The TUI renderer draws exactly this: the table never reads the store or
//! the controllers while painting.

use serde::Serialize;

use super::common::StatusLevel;
use super::company::CompanyListViewModel;
use super::form::{ConfirmViewModel, FormViewModel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBarViewModel {
    pub text: String,
    pub placeholder: String,
    /// Filter input has keyboard focus
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyHintViewModel {
    pub key: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub message: Option<String>,
    pub level: StatusLevel,
    pub hints: Vec<KeyHintViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OverlayViewModel {
    Form(FormViewModel),
    Confirm(ConfirmViewModel),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableScreenViewModel {
    pub list: CompanyListViewModel,
    pub filter_bar: FilterBarViewModel,
    pub status_bar: StatusBarViewModel,
    /// Highlighted row index within `list.rows`
    pub selected: Option<usize>,
    pub overlay: Option<OverlayViewModel>,
}
