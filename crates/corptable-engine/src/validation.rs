//! Presence and pattern checks for company form input.

use std::fmt;

use corptable_types::{CompanyDraft, FormField};
use serde::Serialize;

use crate::phone::is_valid_phone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Empty,
    InvalidPhone,
    NotANumber,
    NotPositive,
}

impl IssueKind {
    pub fn describe(self) -> &'static str {
        match self {
            IssueKind::Empty => "required",
            IssueKind::InvalidPhone => "expected +7 (XXX) XXX-XX-XX",
            IssueKind::NotANumber => "must be a whole number",
            IssueKind::NotPositive => "must be greater than zero",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FormField,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.kind.describe())
    }
}

pub fn parse_house_number(raw: &str) -> Result<u32, IssueKind> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IssueKind::Empty);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n <= 0 => Err(IssueKind::NotPositive),
        Ok(n) => u32::try_from(n).map_err(|_| IssueKind::NotANumber),
        Err(_) => Err(IssueKind::NotANumber),
    }
}

/// Check one raw input value as typed into the form.
pub fn check_field(field: FormField, raw: &str) -> Option<IssueKind> {
    match field {
        FormField::HouseNumber => parse_house_number(raw).err(),
        FormField::PhoneNumber if raw.trim().is_empty() => Some(IssueKind::Empty),
        FormField::PhoneNumber if !is_valid_phone(raw) => Some(IssueKind::InvalidPhone),
        FormField::PhoneNumber => None,
        _ if raw.trim().is_empty() => Some(IssueKind::Empty),
        _ => None,
    }
}

/// Every issue of an already typed draft, in form order.
pub fn validate_draft(draft: &CompanyDraft) -> Vec<FieldIssue> {
    let house_number = draft.address.house_number.to_string();
    FormField::ALL
        .iter()
        .filter_map(|&field| {
            let raw = match field {
                FormField::Name => draft.name.as_str(),
                FormField::ManagerName => draft.manager_name.as_str(),
                FormField::PhoneNumber => draft.phone_number.as_str(),
                FormField::City => draft.address.city.as_str(),
                FormField::Street => draft.address.street.as_str(),
                FormField::HouseNumber => house_number.as_str(),
            };
            check_field(field, raw).map(|kind| FieldIssue { field, kind })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use corptable_types::Address;

    fn valid_draft() -> CompanyDraft {
        CompanyDraft {
            name: "ООО \"Ромашка\"".to_string(),
            manager_name: "Иванов Иван Иванович".to_string(),
            phone_number: "+7 (999) 123-45-67".to_string(),
            address: Address::new("Москва", "Ленина", 1),
        }
    }

    #[test]
    fn test_valid_draft_has_no_issues() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        let mut draft = valid_draft();
        draft.manager_name = "   ".to_string();
        draft.address.street = String::new();

        let issues = validate_draft(&draft);
        assert_eq!(
            issues,
            vec![
                FieldIssue {
                    field: FormField::ManagerName,
                    kind: IssueKind::Empty
                },
                FieldIssue {
                    field: FormField::Street,
                    kind: IssueKind::Empty
                },
            ]
        );
    }

    #[test]
    fn test_zero_house_number_is_rejected() {
        let mut draft = valid_draft();
        draft.address.house_number = 0;
        let issues = validate_draft(&draft);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::NotPositive);
    }

    #[test]
    fn test_house_number_parsing() {
        assert_eq!(parse_house_number(" 12 "), Ok(12));
        assert_eq!(parse_house_number(""), Err(IssueKind::Empty));
        assert_eq!(parse_house_number("-3"), Err(IssueKind::NotPositive));
        assert_eq!(parse_house_number("12a"), Err(IssueKind::NotANumber));
        assert_eq!(parse_house_number("1.5"), Err(IssueKind::NotANumber));
    }

    #[test]
    fn test_malformed_phone() {
        assert_eq!(
            check_field(FormField::PhoneNumber, "+7 (999) 123-45"),
            Some(IssueKind::InvalidPhone)
        );
        assert_eq!(
            check_field(FormField::PhoneNumber, ""),
            Some(IssueKind::Empty)
        );
    }

    #[test]
    fn test_issue_display() {
        let issue = FieldIssue {
            field: FormField::PhoneNumber,
            kind: IssueKind::InvalidPhone,
        };
        assert_eq!(issue.to_string(), "Phone: expected +7 (XXX) XXX-XX-XX");
    }
}
