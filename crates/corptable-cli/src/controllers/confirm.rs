use corptable_types::Company;

/// Yes/no answer for a pending delete.
///
/// The TUI answers with a modal dialog; tests pass closures.
pub trait ConfirmDelete {
    fn confirm_delete(&mut self, company: &Company) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: FnMut(&Company) -> bool,
{
    fn confirm_delete(&mut self, company: &Company) -> bool {
        self(company)
    }
}

pub fn delete_prompt(company: &Company) -> String {
    format!("Delete company \"{}\"?", company.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corptable_testing::CompanyBuilder;

    #[test]
    fn test_closure_answers_are_forwarded() {
        let company = CompanyBuilder::new().name("Вектор").build(1);
        let mut asked = Vec::new();
        let mut confirm = |c: &Company| {
            asked.push(c.id);
            false
        };

        assert!(!confirm.confirm_delete(&company));
        assert_eq!(asked, vec![company.id]);
    }

    #[test]
    fn test_prompt_names_the_company() {
        let company = CompanyBuilder::new().name("Вектор").build(1);
        assert_eq!(delete_prompt(&company), "Delete company \"Вектор\"?");
    }
}
