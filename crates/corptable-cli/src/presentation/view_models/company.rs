use serde::Serialize;
use std::fmt;

use super::CreateView;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRowViewModel {
    pub id: u64,
    pub name: String,
    pub manager_name: String,
    pub phone_number: String,
    pub city: String,
    pub street: String,
    pub house_number: u32,
    /// "city, street N"
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnViewModel {
    /// Key accepted by `--sort`
    pub key: String,
    pub label: String,
    /// Digit that toggles sorting on this column in the TUI
    pub hotkey: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortIndicator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationViewModel {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Companies matching the filter, across all pages
    pub total: usize,
    /// 1-based position of the first row shown; 0 when the page is empty
    pub first_row: usize,
    pub last_row: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyListViewModel {
    pub columns: Vec<ColumnViewModel>,
    pub rows: Vec<CompanyRowViewModel>,
    pub pagination: PaginationViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDetailViewModel {
    pub company: CompanyRowViewModel,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for CompanyListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::company::CompanyListView;
        Box::new(CompanyListView::new(self))
    }
}

impl CreateView for CompanyDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::company::CompanyDetailView;
        Box::new(CompanyDetailView::new(self))
    }
}
