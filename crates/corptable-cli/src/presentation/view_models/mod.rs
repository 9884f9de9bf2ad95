pub mod common;
pub mod company;
pub mod config;
pub mod form;
pub mod result;
pub mod table;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use company::{
    ColumnViewModel, CompanyDetailViewModel, CompanyListViewModel, CompanyRowViewModel,
    PaginationViewModel, SortIndicator,
};
pub use config::{ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel};
pub use form::{ConfirmViewModel, FormFieldViewModel, FormViewModel};
pub use result::CommandResultViewModel;
pub use table::{
    FilterBarViewModel, KeyHintViewModel, OverlayViewModel, StatusBarViewModel,
    TableScreenViewModel,
};

use std::fmt;

/// Bridge from a view model to its console text view.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}

/// Header plus rows, for `--format csv`.
pub trait TabularView {
    fn header(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<String>>;
}
