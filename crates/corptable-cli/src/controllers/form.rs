use corptable_engine::phone::{format_phone, pop_digit};
use corptable_engine::validation::{FieldIssue, IssueKind, check_field, parse_house_number};
use corptable_types::{Address, Company, CompanyDraft, CompanyId, FormField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(CompanyId),
}

/// What a closed form asks the table to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Create(CompanyDraft),
    Update(CompanyId, CompanyDraft),
    Cancelled,
}

/// Add/edit form state: raw input per field, focus and which fields the
/// user has already visited.
///
/// Values are kept as typed so a half-entered house number survives until it
/// is fixed; they are only parsed into a [`CompanyDraft`] on confirm.
#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    values: [String; 6],
    touched: [bool; 6],
    focus: FormField,
}

impl FormController {
    pub fn for_add() -> Self {
        Self {
            mode: FormMode::Add,
            values: Default::default(),
            touched: [false; 6],
            focus: FormField::Name,
        }
    }

    pub fn for_edit(company: &Company) -> Self {
        let mut form = Self::for_add();
        form.mode = FormMode::Edit(company.id);
        form.values = [
            company.name.clone(),
            company.manager_name.clone(),
            company.phone_number.clone(),
            company.address.city.clone(),
            company.address.street.clone(),
            company.address.house_number.to_string(),
        ];
        form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched[field.index()]
    }

    /// Mark every field visited so all pending issues become visible.
    pub fn touch_all(&mut self) {
        self.touched = [true; 6];
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        let value = match field {
            FormField::PhoneNumber => format_phone(value),
            _ => value.to_string(),
        };
        self.values[field.index()] = value;
        self.touched[field.index()] = true;
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        let slot = &mut self.values[field.index()];
        match field {
            FormField::PhoneNumber => {
                let mut raw = std::mem::take(slot);
                raw.push(c);
                *slot = format_phone(&raw);
            }
            _ => slot.push(c),
        }
        self.touched[field.index()] = true;
    }

    pub fn backspace(&mut self, field: FormField) {
        let slot = &mut self.values[field.index()];
        match field {
            FormField::PhoneNumber => *slot = pop_digit(slot),
            _ => {
                slot.pop();
            }
        }
        self.touched[field.index()] = true;
    }

    pub fn issue(&self, field: FormField) -> Option<IssueKind> {
        check_field(field, self.value(field))
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        FormField::ALL
            .iter()
            .filter_map(|&field| self.issue(field).map(|kind| FieldIssue { field, kind }))
            .collect()
    }

    pub fn validate(&self) -> bool {
        FormField::ALL.iter().all(|&field| self.issue(field).is_none())
    }

    pub fn can_confirm(&self) -> bool {
        self.validate()
    }

    /// `None` while any field is invalid.
    pub fn confirm(&self) -> Option<FormOutcome> {
        if !self.validate() {
            return None;
        }
        let house_number = parse_house_number(self.value(FormField::HouseNumber)).ok()?;
        let text = |field: FormField| self.value(field).trim().to_string();

        let draft = CompanyDraft {
            name: text(FormField::Name),
            manager_name: text(FormField::ManagerName),
            phone_number: self.value(FormField::PhoneNumber).to_string(),
            address: Address {
                city: text(FormField::City),
                street: text(FormField::Street),
                house_number,
            },
        };

        Some(match self.mode {
            FormMode::Add => FormOutcome::Create(draft),
            FormMode::Edit(id) => FormOutcome::Update(id, draft),
        })
    }

    pub fn cancel(&self) -> FormOutcome {
        FormOutcome::Cancelled
    }

    pub fn focused(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % FormField::ALL.len();
        self.focus = FormField::ALL[next];
    }

    pub fn focus_prev(&mut self) {
        let len = FormField::ALL.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = FormField::ALL[prev];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corptable_testing::CompanyBuilder;

    fn fill_valid(form: &mut FormController) {
        form.set_field(FormField::Name, "ООО \"Ромашка\"");
        form.set_field(FormField::ManagerName, "Иванов Иван Иванович");
        form.set_field(FormField::PhoneNumber, "9991234567");
        form.set_field(FormField::City, "Москва");
        form.set_field(FormField::Street, "Ленина");
        form.set_field(FormField::HouseNumber, "1");
    }

    #[test]
    fn test_empty_add_form_cannot_confirm() {
        let form = FormController::for_add();
        assert!(!form.can_confirm());
        assert_eq!(form.confirm(), None);
        assert_eq!(form.issues().len(), 6);
    }

    #[test]
    fn test_valid_add_form_creates_draft() {
        let mut form = FormController::for_add();
        fill_valid(&mut form);

        assert!(form.validate());
        let Some(FormOutcome::Create(draft)) = form.confirm() else {
            panic!("expected a create outcome");
        };
        assert_eq!(draft.phone_number, "+7 (999) 123-45-67");
        assert_eq!(draft.address.house_number, 1);
    }

    #[test]
    fn test_edit_form_is_prefilled_and_updates() {
        let company = CompanyBuilder::new().manager("Петров Пётр").build(4);
        let mut form = FormController::for_edit(&company);
        assert_eq!(form.value(FormField::ManagerName), "Петров Пётр");
        assert_eq!(form.value(FormField::HouseNumber), "1");
        assert!(form.validate());

        form.set_field(FormField::ManagerName, "X");
        let Some(FormOutcome::Update(id, draft)) = form.confirm() else {
            panic!("expected an update outcome");
        };
        assert_eq!(id, company.id);
        assert_eq!(draft.manager_name, "X");
        assert_eq!(draft.name, company.name);
    }

    #[test]
    fn test_phone_is_masked_while_typing() {
        let mut form = FormController::for_add();
        for c in "9991234567".chars() {
            form.push_char(FormField::PhoneNumber, c);
        }
        assert_eq!(form.value(FormField::PhoneNumber), "+7 (999) 123-45-67");
        assert_eq!(form.issue(FormField::PhoneNumber), None);

        form.backspace(FormField::PhoneNumber);
        assert_eq!(form.value(FormField::PhoneNumber), "+7 (999) 123-45-6");
        assert_eq!(
            form.issue(FormField::PhoneNumber),
            Some(IssueKind::InvalidPhone)
        );
    }

    #[test]
    fn test_typed_trunk_prefix_is_not_a_subscriber_digit() {
        for keys in ["89991234567", "79991234567"] {
            let mut form = FormController::for_add();
            form.push_char(FormField::PhoneNumber, keys.chars().next().unwrap());
            assert_eq!(form.value(FormField::PhoneNumber), "+7 (");

            for c in keys.chars().skip(1) {
                form.push_char(FormField::PhoneNumber, c);
            }
            assert_eq!(form.value(FormField::PhoneNumber), "+7 (999) 123-45-67");
            assert_eq!(form.issue(FormField::PhoneNumber), None);
        }

        let mut form = FormController::for_add();
        form.push_char(FormField::PhoneNumber, '8');
        form.backspace(FormField::PhoneNumber);
        assert_eq!(form.value(FormField::PhoneNumber), "");
    }

    #[test]
    fn test_letters_never_reach_the_phone() {
        let mut form = FormController::for_add();
        form.push_char(FormField::PhoneNumber, 'x');
        assert_eq!(form.value(FormField::PhoneNumber), "");
    }

    #[test]
    fn test_bad_house_number_blocks_confirm() {
        let mut form = FormController::for_add();
        fill_valid(&mut form);
        form.set_field(FormField::HouseNumber, "0");
        assert_eq!(form.confirm(), None);
        assert_eq!(
            form.issue(FormField::HouseNumber),
            Some(IssueKind::NotPositive)
        );

        form.set_field(FormField::HouseNumber, "12б");
        assert_eq!(
            form.issue(FormField::HouseNumber),
            Some(IssueKind::NotANumber)
        );
    }

    #[test]
    fn test_whitespace_name_is_empty() {
        let mut form = FormController::for_add();
        fill_valid(&mut form);
        form.set_field(FormField::Name, "   ");
        assert!(!form.validate());
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = FormController::for_add();
        assert_eq!(form.focused(), FormField::Name);
        form.focus_prev();
        assert_eq!(form.focused(), FormField::HouseNumber);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), FormField::ManagerName);
    }

    #[test]
    fn test_cancel_is_an_outcome() {
        let form = FormController::for_add();
        assert_eq!(form.cancel(), FormOutcome::Cancelled);
    }
}
