use std::borrow::Cow;
use std::cmp::Ordering;

use corptable_types::{Company, CompanyField, CompanyPage, CompanyQuery, SortDirection, SortValue};
use tracing::debug;

use crate::collation;

/// Filter, sort and slice `records` for `query`.
///
/// Pure: `records` is only borrowed and the returned page owns copies of the
/// selected items. A page or page size of 0 is treated as 1, and the page is
/// clamped to the last page of the filtered set.
pub fn evaluate(records: &[Company], query: &CompanyQuery) -> CompanyPage {
    let page_size = query.page_size.max(1);
    let requested = query.page.max(1);

    let mut selected: Vec<&Company> = match query.effective_filter() {
        Some(needle) => {
            let needle = needle.to_lowercase();
            records
                .iter()
                .filter(|company| matches_manager(company, &needle))
                .collect()
        }
        None => records.iter().collect(),
    };

    if let Some(sort) = query.sort {
        sort_companies(&mut selected, sort.key, sort.direction);
    }

    let total = selected.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = requested.min(total_pages);
    let start = (page - 1) * page_size;
    let end = total.min(page * page_size);

    let items: Vec<Company> = selected
        .iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .map(|company| (*company).clone())
        .collect();

    debug!(
        total,
        page,
        total_pages,
        returned = items.len(),
        "evaluated company query"
    );

    CompanyPage {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}

fn matches_manager(company: &Company, needle_lower: &str) -> bool {
    company.manager_name.to_lowercase().contains(needle_lower)
}

/// Stable sort; ties keep the store order in both directions.
fn sort_companies(companies: &mut Vec<&Company>, key: CompanyField, direction: SortDirection) {
    let mut keyed: Vec<(String, &Company)> = companies
        .iter()
        .map(|company| (sort_key(key.sort_value(company)), *company))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.cmp(b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    *companies = keyed.into_iter().map(|(_, company)| company).collect();
}

// Numbers are stringified first, so ids order as text ("10" < "9").
fn sort_text(value: SortValue<'_>) -> Cow<'_, str> {
    match value {
        SortValue::Text(text) => Cow::Borrowed(text),
        SortValue::Number(_) => Cow::Owned(value.to_string()),
    }
}

fn sort_key(value: SortValue<'_>) -> String {
    collation::fold(&sort_text(value))
}

/// Compare two companies the way `evaluate` orders them ascending.
pub fn compare_by(key: CompanyField, a: &Company, b: &Company) -> Ordering {
    collation::compare(&sort_text(key.sort_value(a)), &sort_text(key.sort_value(b)))
}
