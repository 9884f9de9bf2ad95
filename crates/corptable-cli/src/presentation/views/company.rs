use std::fmt;

use crate::presentation::formatters::{pad_right, truncate, width};
use crate::presentation::view_models::{
    CompanyDetailViewModel, CompanyListViewModel, CompanyRowViewModel, SortIndicator,
    TabularView,
};

const MAX_COLUMN_WIDTH: usize = 32;
const CSV_HEADER: [&str; 7] = [
    "id",
    "companyName",
    "managerName",
    "phoneNumber",
    "city",
    "street",
    "houseNumber",
];

pub(crate) fn sort_arrow(sort: Option<SortIndicator>) -> &'static str {
    match sort {
        Some(SortIndicator::Asc) => " ▲",
        Some(SortIndicator::Desc) => " ▼",
        None => "",
    }
}

/// Cells of a row in column order: id, name, manager, phone, address.
pub(crate) fn row_cells(row: &CompanyRowViewModel) -> [String; 5] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.manager_name.clone(),
        row.phone_number.clone(),
        row.address.clone(),
    ]
}

fn csv_record(row: &CompanyRowViewModel) -> Vec<String> {
    vec![
        row.id.to_string(),
        row.name.clone(),
        row.manager_name.clone(),
        row.phone_number.clone(),
        row.city.clone(),
        row.street.clone(),
        row.house_number.to_string(),
    ]
}

pub struct CompanyListView<'a> {
    data: &'a CompanyListViewModel,
}

impl<'a> CompanyListView<'a> {
    /// Create a new CompanyListView (called from CreateView trait)
    pub fn new(data: &'a CompanyListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CompanyListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let headers: Vec<String> = self
            .data
            .columns
            .iter()
            .map(|c| format!("{}{}", c.label, sort_arrow(c.sort)))
            .collect();
        let rows: Vec<[String; 5]> = self.data.rows.iter().map(row_cells).collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|cells| width(&cells[i]))
                    .chain(std::iter::once(width(header)))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect();

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| pad_right(&truncate(cell, w), w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        writeln!(f, "{}", line(&headers))?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", line(&rule))?;

        if rows.is_empty() {
            writeln!(f, "No companies found.")?;
        }
        for cells in &rows {
            writeln!(f, "{}", line(cells))?;
        }

        let p = &self.data.pagination;
        writeln!(f)?;
        write!(f, "Page {}/{}", p.page, p.total_pages)?;
        if p.total > 0 {
            write!(f, " · rows {}-{} of {}", p.first_row, p.last_row, p.total)?;
        } else {
            write!(f, " · 0 companies")?;
        }
        if let Some(filter) = &self.data.filter {
            write!(f, " · manager contains \"{}\"", filter)?;
        }
        writeln!(f)
    }
}

impl TabularView for CompanyListViewModel {
    fn header(&self) -> Vec<String> {
        CSV_HEADER.iter().map(|h| h.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(csv_record).collect()
    }
}

pub struct CompanyDetailView<'a> {
    data: &'a CompanyDetailViewModel,
}

impl<'a> CompanyDetailView<'a> {
    pub fn new(data: &'a CompanyDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CompanyDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = &self.data.company;
        writeln!(f, "Company #{}", c.id)?;
        writeln!(f, "  Name:     {}", c.name)?;
        writeln!(f, "  Manager:  {}", c.manager_name)?;
        writeln!(f, "  Phone:    {}", c.phone_number)?;
        writeln!(f, "  Address:  {}", c.address)
    }
}

impl TabularView for CompanyDetailViewModel {
    fn header(&self) -> Vec<String> {
        CSV_HEADER.iter().map(|h| h.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![csv_record(&self.company)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::company::present_company_list;
    use corptable_engine::evaluate;
    use corptable_testing::CompanyBuilder;
    use corptable_types::{CompanyField, CompanyQuery, SortDirection};

    #[test]
    fn test_list_view_text() {
        let companies = vec![
            CompanyBuilder::new()
                .name("Вектор")
                .manager("Петрова Анна")
                .phone("+7 (912) 345-67-89")
                .address("Тверь", "Советская", 3)
                .build(1),
            CompanyBuilder::new()
                .name("Ромашка")
                .manager("Иванов Иван")
                .phone("+7 (999) 123-45-67")
                .address("Москва", "Ленина", 1)
                .build(2),
        ];
        let query = CompanyQuery::new(10).with_sort(CompanyField::Name, SortDirection::Desc);
        let page = evaluate(&companies, &query);
        let vm = present_company_list(&page, &query);

        insta::assert_snapshot!(CompanyListView::new(&vm).to_string(), @r###"
        ID  Company ▼  Manager       Phone               Address
        --  ---------  ------------  ------------------  ------------------
        2   Ромашка    Иванов Иван   +7 (999) 123-45-67  Москва, Ленина 1
        1   Вектор     Петрова Анна  +7 (912) 345-67-89  Тверь, Советская 3

        Page 1/1 · rows 1-2 of 2
        "###);
    }

    #[test]
    fn test_empty_list_says_so() {
        let query = CompanyQuery::new(10).with_filter("никто");
        let page = evaluate(&[], &query);
        let vm = present_company_list(&page, &query);
        let text = CompanyListView::new(&vm).to_string();
        assert!(text.contains("No companies found."));
        assert!(text.contains("Page 1/1 · 0 companies · manager contains \"никто\""));
    }

    #[test]
    fn test_csv_rows_split_the_address() {
        let company = CompanyBuilder::new().address("Омск", "Маркса", 18).build(11);
        let query = CompanyQuery::new(10);
        let vm = present_company_list(&evaluate(&[company], &query), &query);
        assert_eq!(vm.header()[1], "companyName");
        assert_eq!(vm.rows()[0][4..], ["Омск", "Маркса", "18"]);
    }
}
