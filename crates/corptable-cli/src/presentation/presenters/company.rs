use corptable_types::{Company, CompanyField, CompanyPage, CompanyQuery, SortDirection};

use crate::presentation::view_models::{
    ColumnViewModel, CommandResultViewModel, CompanyDetailViewModel, CompanyListViewModel,
    CompanyRowViewModel, Guidance, PaginationViewModel, SortIndicator, StatusBadge,
};

pub fn present_row(company: &Company) -> CompanyRowViewModel {
    CompanyRowViewModel {
        id: company.id.get(),
        name: company.name.clone(),
        manager_name: company.manager_name.clone(),
        phone_number: company.phone_number.clone(),
        city: company.address.city.clone(),
        street: company.address.street.clone(),
        house_number: company.address.house_number,
        address: company.address.to_string(),
    }
}

pub fn present_columns(query: &CompanyQuery) -> Vec<ColumnViewModel> {
    CompanyField::ALL
        .iter()
        .zip('1'..='9')
        .map(|(&field, hotkey)| ColumnViewModel {
            key: field.key().to_string(),
            label: field.label().to_string(),
            hotkey,
            sort: query
                .sort
                .filter(|sort| sort.key == field)
                .map(|sort| match sort.direction {
                    SortDirection::Asc => SortIndicator::Asc,
                    SortDirection::Desc => SortIndicator::Desc,
                }),
        })
        .collect()
}

pub fn present_pagination(page: &CompanyPage) -> PaginationViewModel {
    let (first_row, last_row) = if page.items.is_empty() {
        (0, 0)
    } else {
        let first = (page.page - 1) * page.page_size + 1;
        (first, first + page.items.len() - 1)
    };

    PaginationViewModel {
        page: page.page,
        total_pages: page.total_pages,
        page_size: page.page_size,
        total: page.total,
        first_row,
        last_row,
        has_prev: page.has_prev(),
        has_next: page.has_next(),
    }
}

pub fn present_company_list(page: &CompanyPage, query: &CompanyQuery) -> CompanyListViewModel {
    CompanyListViewModel {
        columns: present_columns(query),
        rows: page.items.iter().map(present_row).collect(),
        pagination: present_pagination(page),
        filter: query.effective_filter().map(str::to_string),
    }
}

/// `list` output, with a hint towards the next page when there is one.
///
/// `requested_page` is the page the user asked for; when it was out of range
/// the page shown is the one the table stayed on and a warning badge says so.
pub fn present_list_result(
    page: &CompanyPage,
    query: &CompanyQuery,
    requested_page: usize,
) -> CommandResultViewModel<CompanyListViewModel> {
    let content = present_company_list(page, query);
    let mut result = CommandResultViewModel::new(content);

    if requested_page != page.page {
        result = result.with_badge(StatusBadge::warning(format!(
            "Page {} is out of range (1-{}); showing page {}",
            requested_page, page.total_pages, page.page
        )));
    } else if page.total == 0 {
        result = result.with_badge(StatusBadge::info("No companies match"));
    }

    if page.has_next() {
        result = result.with_suggestion(
            Guidance::new("Next page")
                .with_command(format!("corptable list --page {}", page.page + 1)),
        );
    }

    result
}

pub fn present_company_detail(company: &Company) -> CommandResultViewModel<CompanyDetailViewModel> {
    CommandResultViewModel::new(CompanyDetailViewModel {
        company: present_row(company),
    })
}
