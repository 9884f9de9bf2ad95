use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::company::Company;
use crate::error::Error;

/// Table columns. Replaces string-keyed access to company fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompanyField {
    Id,
    Name,
    ManagerName,
    PhoneNumber,
    Address,
}

/// Value a column is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(u64),
}

impl fmt::Display for SortValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortValue::Text(text) => f.write_str(text),
            SortValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl CompanyField {
    pub const ALL: [CompanyField; 5] = [
        CompanyField::Id,
        CompanyField::Name,
        CompanyField::ManagerName,
        CompanyField::PhoneNumber,
        CompanyField::Address,
    ];

    /// Stable machine name, as used on the command line and in JSON.
    pub fn key(self) -> &'static str {
        match self {
            CompanyField::Id => "id",
            CompanyField::Name => "name",
            CompanyField::ManagerName => "manager",
            CompanyField::PhoneNumber => "phone",
            CompanyField::Address => "address",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompanyField::Id => "ID",
            CompanyField::Name => "Company",
            CompanyField::ManagerName => "Manager",
            CompanyField::PhoneNumber => "Phone",
            CompanyField::Address => "Address",
        }
    }

    /// Address columns sort by city.
    pub fn sort_value(self, company: &Company) -> SortValue<'_> {
        match self {
            CompanyField::Id => SortValue::Number(company.id.get()),
            CompanyField::Name => SortValue::Text(&company.name),
            CompanyField::ManagerName => SortValue::Text(&company.manager_name),
            CompanyField::PhoneNumber => SortValue::Text(&company.phone_number),
            CompanyField::Address => SortValue::Text(&company.address.city),
        }
    }

    pub fn display(self, company: &Company) -> String {
        match self {
            CompanyField::Id => company.id.to_string(),
            CompanyField::Name => company.name.clone(),
            CompanyField::ManagerName => company.manager_name.clone(),
            CompanyField::PhoneNumber => company.phone_number.clone(),
            CompanyField::Address => company.address.to_string(),
        }
    }
}

impl fmt::Display for CompanyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CompanyField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(CompanyField::Id),
            "name" | "company" | "companyname" | "company_name" => Ok(CompanyField::Name),
            "manager" | "managername" | "manager_name" => Ok(CompanyField::ManagerName),
            "phone" | "phonenumber" | "phone_number" => Ok(CompanyField::PhoneNumber),
            "address" | "city" => Ok(CompanyField::Address),
            _ => Err(Error::UnknownField(s.to_string())),
        }
    }
}

/// Editable inputs of the company form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    ManagerName,
    PhoneNumber,
    City,
    Street,
    HouseNumber,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::ManagerName,
        FormField::PhoneNumber,
        FormField::City,
        FormField::Street,
        FormField::HouseNumber,
    ];

    pub fn index(self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::ManagerName => 1,
            FormField::PhoneNumber => 2,
            FormField::City => 3,
            FormField::Street => 4,
            FormField::HouseNumber => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Company name",
            FormField::ManagerName => "Manager full name",
            FormField::PhoneNumber => "Phone",
            FormField::City => "City",
            FormField::Street => "Street",
            FormField::HouseNumber => "House number",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "ООО \"Компания\"",
            FormField::ManagerName => "Иванов Иван Иванович",
            FormField::PhoneNumber => "+7 (999) 999-99-99",
            FormField::City => "Москва",
            FormField::Street => "Ленина",
            FormField::HouseNumber => "1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::{Address, CompanyId};

    fn company() -> Company {
        Company {
            id: CompanyId::new(12),
            name: "Вектор".to_string(),
            manager_name: "Смирнова Анна".to_string(),
            phone_number: "+7 (912) 000-11-22".to_string(),
            address: Address::new("Тверь", "Советская", 3),
        }
    }

    #[test]
    fn test_address_sorts_by_city() {
        assert_eq!(
            CompanyField::Address.sort_value(&company()),
            SortValue::Text("Тверь")
        );
    }

    #[test]
    fn test_id_sort_value_is_numeric() {
        let binding = company();
        let value = CompanyField::Id.sort_value(&binding);
        assert_eq!(value, SortValue::Number(12));
        assert_eq!(value.to_string(), "12");
    }

    #[test]
    fn test_field_from_str_aliases() {
        assert_eq!("manager".parse(), Ok(CompanyField::ManagerName));
        assert_eq!("managerName".parse(), Ok(CompanyField::ManagerName));
        assert_eq!("city".parse(), Ok(CompanyField::Address));
        assert!("salary".parse::<CompanyField>().is_err());
    }

    #[test]
    fn test_form_field_indices_follow_order() {
        for (position, field) in FormField::ALL.iter().enumerate() {
            assert_eq!(field.index(), position);
        }
    }
}
