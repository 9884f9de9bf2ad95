use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Store-assigned identifier of a company. Never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(u64);

impl CompanyId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(CompanyId)
            .map_err(|_| Error::InvalidId(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub city: String,
    pub street: String,
    pub house_number: u32,
}

impl Address {
    pub fn new(city: impl Into<String>, street: impl Into<String>, house_number: u32) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            house_number,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.city, self.street, self.house_number)
    }
}

/// A company record as held by the store.
///
/// JSON keys follow the registry's data files (`companyName`, `managerName`,
/// `phoneNumber`, nested `address`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    #[serde(rename = "companyName")]
    pub name: String,
    pub manager_name: String,
    pub phone_number: String,
    pub address: Address,
}

impl Company {
    pub fn from_draft(id: CompanyId, draft: CompanyDraft) -> Self {
        Self {
            id,
            name: draft.name,
            manager_name: draft.manager_name,
            phone_number: draft.phone_number,
            address: draft.address,
        }
    }

    pub fn to_draft(&self) -> CompanyDraft {
        CompanyDraft {
            name: self.name.clone(),
            manager_name: self.manager_name.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
        }
    }

    /// Shallow merge: every field present in the patch replaces the current
    /// value wholesale. The id is never touched.
    pub fn apply(&mut self, patch: CompanyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(manager_name) = patch.manager_name {
            self.manager_name = manager_name;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}

/// Company fields without an id: the output of the form and the input of `add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    #[serde(rename = "companyName")]
    pub name: String,
    pub manager_name: String,
    pub phone_number: String,
    pub address: Address,
}

/// Partial update for `update_by_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub manager_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<Address>,
}

impl CompanyPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.manager_name.is_none()
            && self.phone_number.is_none()
            && self.address.is_none()
    }
}

impl From<CompanyDraft> for CompanyPatch {
    fn from(draft: CompanyDraft) -> Self {
        Self {
            name: Some(draft.name),
            manager_name: Some(draft.manager_name),
            phone_number: Some(draft.phone_number),
            address: Some(draft.address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Company {
        Company {
            id: CompanyId::new(7),
            name: "ООО \"Ромашка\"".to_string(),
            manager_name: "Иванов Иван Иванович".to_string(),
            phone_number: "+7 (999) 123-45-67".to_string(),
            address: Address::new("Москва", "Ленина", 1),
        }
    }

    #[test]
    fn test_apply_patch_only_touches_present_fields() {
        let mut company = sample();
        company.apply(CompanyPatch {
            manager_name: Some("Петров Пётр".to_string()),
            ..Default::default()
        });

        assert_eq!(company.manager_name, "Петров Пётр");
        assert_eq!(company.name, sample().name);
        assert_eq!(company.phone_number, sample().phone_number);
        assert_eq!(company.address, sample().address);
        assert_eq!(company.id, CompanyId::new(7));
    }

    #[test]
    fn test_patch_replaces_whole_address() {
        let mut company = sample();
        company.apply(CompanyPatch {
            address: Some(Address::new("Казань", "Баумана", 12)),
            ..Default::default()
        });
        assert_eq!(company.address.city, "Казань");
        assert_eq!(company.address.house_number, 12);
    }

    #[test]
    fn test_json_uses_registry_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["companyName"], "ООО \"Ромашка\"");
        assert_eq!(json["managerName"], "Иванов Иван Иванович");
        assert_eq!(json["address"]["houseNumber"], 1);
    }

    #[test]
    fn test_company_id_from_str() {
        assert_eq!("42".parse::<CompanyId>(), Ok(CompanyId::new(42)));
        assert!(matches!("x1".parse::<CompanyId>(), Err(Error::InvalidId(_))));
    }

    #[test]
    fn test_draft_roundtrip_through_company() {
        let company = sample();
        let rebuilt = Company::from_draft(company.id, company.to_draft());
        assert_eq!(rebuilt, company);
        assert!(!CompanyPatch::from(company.to_draft()).is_empty());
        assert!(CompanyPatch::default().is_empty());
    }
}
