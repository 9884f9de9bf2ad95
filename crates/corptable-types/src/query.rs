use std::fmt;

use serde::{Deserialize, Serialize};

use crate::company::Company;
use crate::field::CompanyField;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub key: CompanyField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(key: CompanyField, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Page, sort and filter request for the company list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyQuery {
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    /// `None` means unsorted (store order)
    pub sort: Option<Sort>,
    /// Substring matched against the manager name
    pub filter: Option<String>,
}

impl Default for CompanyQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CompanyQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            sort: None,
            filter: None,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_sort(mut self, key: CompanyField, direction: SortDirection) -> Self {
        self.sort = Some(Sort::new(key, direction));
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Trimmed filter text, or `None` when filtering is disabled.
    pub fn effective_filter(&self) -> Option<&str> {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// One evaluated page of companies plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyPage {
    pub items: Vec<Company>,
    /// Number of companies after filtering, before slicing
    pub total: usize,
    /// Clamped to `[1, total_pages]`
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl CompanyPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn contains_page(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_filter_ignores_whitespace() {
        assert_eq!(CompanyQuery::default().effective_filter(), None);
        assert_eq!(
            CompanyQuery::default().with_filter("   ").effective_filter(),
            None
        );
        assert_eq!(
            CompanyQuery::default()
                .with_filter("  иван ")
                .effective_filter(),
            Some("иван")
        );
    }

    #[test]
    fn test_default_query_starts_on_first_page() {
        let query = CompanyQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_page_navigation_flags() {
        let page = CompanyPage {
            items: Vec::new(),
            total: 25,
            page: 2,
            page_size: 10,
            total_pages: 3,
        };
        assert!(page.has_prev());
        assert!(page.has_next());
        assert!(page.contains_page(3));
        assert!(!page.contains_page(0));
        assert!(!page.contains_page(4));
    }

    #[test]
    fn test_sort_direction_reversed() {
        assert_eq!(SortDirection::Asc.reversed(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.reversed(), SortDirection::Asc);
    }
}
