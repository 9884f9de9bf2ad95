use corptable_runtime::{CompanyStore, Error, InMemoryStore, Result};
use corptable_types::{Company, CompanyDraft, CompanyId, CompanyPatch};

use crate::builder::CompanyBuilder;

/// Store holding one company per manager name, ids 1..=n in order.
pub fn store_with_managers(managers: &[&str]) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    for (index, manager) in managers.iter().enumerate() {
        let draft = CompanyBuilder::new()
            .name(&format!("Компания {}", index + 1))
            .manager(manager)
            .draft();
        store
            .add(draft)
            .expect("in-memory store accepts fixture companies");
    }
    store
}

/// Store whose writes fail while `failing` is set. Reads pass through.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: InMemoryStore,
    pub failing: bool,
}

impl FailingStore {
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            failing: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(Error::Backend("simulated write failure".to_string()));
        }
        Ok(())
    }
}

impl CompanyStore for FailingStore {
    fn add(&mut self, draft: CompanyDraft) -> Result<Company> {
        self.check()?;
        self.inner.add(draft)
    }

    fn update_by_id(&mut self, id: CompanyId, patch: CompanyPatch) -> Result<Option<Company>> {
        self.check()?;
        self.inner.update_by_id(id, patch)
    }

    fn delete_by_id(&mut self, id: CompanyId) -> Result<bool> {
        self.check()?;
        self.inner.delete_by_id(id)
    }

    fn get_by_id(&self, id: CompanyId) -> Option<Company> {
        self.inner.get_by_id(id)
    }

    fn list(&self) -> Vec<Company> {
        self.inner.list()
    }
}
