use corptable_types::{Address, Company, CompanyDraft, CompanyId};

/// Builder for valid companies; override only what a test cares about.
#[derive(Debug, Clone)]
pub struct CompanyBuilder {
    draft: CompanyDraft,
}

impl Default for CompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyBuilder {
    pub fn new() -> Self {
        Self {
            draft: CompanyDraft {
                name: "ООО \"Тест\"".to_string(),
                manager_name: "Тестов Тест Тестович".to_string(),
                phone_number: "+7 (900) 123-45-67".to_string(),
                address: Address::new("Москва", "Ленина", 1),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.draft.name = name.to_string();
        self
    }

    pub fn manager(mut self, manager: &str) -> Self {
        self.draft.manager_name = manager.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.draft.phone_number = phone.to_string();
        self
    }

    pub fn address(mut self, city: &str, street: &str, house_number: u32) -> Self {
        self.draft.address = Address::new(city, street, house_number);
        self
    }

    pub fn draft(self) -> CompanyDraft {
        self.draft
    }

    pub fn build(self, id: u64) -> Company {
        Company::from_draft(CompanyId::new(id), self.draft)
    }
}
