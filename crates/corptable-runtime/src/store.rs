use std::collections::HashSet;

use corptable_types::{Company, CompanyDraft, CompanyId, CompanyPatch};
use tracing::{info, warn};

use crate::seed::SeedRecord;
use crate::{Error, Result};

/// CRUD contract over the authoritative company collection.
///
/// Mutations are synchronous and visible to the next read. Unknown ids are
/// reported as values (`None` / `false`), not as errors; `Err` is reserved for
/// the backend itself failing.
pub trait CompanyStore {
    /// Assign a fresh id, append, and return the stored record.
    fn add(&mut self, draft: CompanyDraft) -> Result<Company>;

    /// Shallow-merge `patch` into the record with `id`.
    fn update_by_id(&mut self, id: CompanyId, patch: CompanyPatch) -> Result<Option<Company>>;

    /// Remove the record with `id`; `true` if something was removed.
    fn delete_by_id(&mut self, id: CompanyId) -> Result<bool>;

    fn get_by_id(&self, id: CompanyId) -> Option<Company>;

    /// Copy of every record in insertion order.
    fn list(&self) -> Vec<Company>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed store with a monotonic id counter.
///
/// Ids come from `next_id`, never from the current length, so an id freed by
/// a delete is not handed out again.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    records: Vec<Company>,
    next_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from seed records.
    ///
    /// Seed ids are kept when unique; records without an id, or repeating an
    /// id seen earlier, get fresh ids after the largest seed id.
    pub fn with_seed(seed: Vec<SeedRecord>) -> Result<Self> {
        let mut taken = HashSet::new();
        let mut keep = Vec::with_capacity(seed.len());
        for record in &seed {
            keep.push(match record.id {
                Some(id) => taken.insert(id),
                None => false,
            });
        }

        let max_id = taken.iter().map(|id| id.get()).max().unwrap_or(0);
        let next_id = max_id.checked_add(1).ok_or(Error::IdSpaceExhausted)?;
        let mut store = Self {
            records: Vec::with_capacity(seed.len()),
            next_id,
        };

        for (record, keep_id) in seed.into_iter().zip(keep) {
            let id = match record.id {
                Some(id) if keep_id => id,
                original => {
                    let fresh = store.allocate_id()?;
                    if let Some(original) = original {
                        warn!(%original, %fresh, "duplicate seed id reassigned");
                    }
                    fresh
                }
            };
            store.records.push(Company::from_draft(id, record.company));
        }

        info!(count = store.records.len(), next_id = store.next_id, "store seeded");
        Ok(store)
    }

    fn allocate_id(&mut self) -> Result<CompanyId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(Error::IdSpaceExhausted)?;
        Ok(CompanyId::new(id))
    }

    fn position(&self, id: CompanyId) -> Option<usize> {
        self.records.iter().position(|company| company.id == id)
    }
}

impl CompanyStore for InMemoryStore {
    fn add(&mut self, draft: CompanyDraft) -> Result<Company> {
        let id = self.allocate_id()?;
        let company = Company::from_draft(id, draft);
        self.records.push(company.clone());
        info!(%id, name = %company.name, "company added");
        Ok(company)
    }

    fn update_by_id(&mut self, id: CompanyId, patch: CompanyPatch) -> Result<Option<Company>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let company = &mut self.records[index];
        company.apply(patch);
        info!(%id, "company updated");
        Ok(Some(company.clone()))
    }

    fn delete_by_id(&mut self, id: CompanyId) -> Result<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.records.remove(index);
        info!(%id, "company deleted");
        Ok(true)
    }

    fn get_by_id(&self, id: CompanyId) -> Option<Company> {
        self.position(id).map(|index| self.records[index].clone())
    }

    fn list(&self) -> Vec<Company> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corptable_types::Address;

    fn draft(name: &str, manager: &str) -> CompanyDraft {
        CompanyDraft {
            name: name.to_string(),
            manager_name: manager.to_string(),
            phone_number: "+7 (999) 123-45-67".to_string(),
            address: Address::new("Москва", "Ленина", 1),
        }
    }

    fn seed(id: Option<u64>, name: &str) -> SeedRecord {
        SeedRecord {
            id: id.map(CompanyId::new),
            company: draft(name, "Иванов Иван"),
        }
    }

    #[test]
    fn test_add_then_get_returns_all_fields() -> Result<()> {
        let mut store = InMemoryStore::new();
        let added = store.add(draft("Ромашка", "Иванов Иван"))?;

        let fetched = store.get_by_id(added.id).expect("company should exist");
        assert_eq!(fetched, added);
        assert_eq!(fetched.to_draft(), draft("Ромашка", "Иванов Иван"));
        Ok(())
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() -> Result<()> {
        let mut store = InMemoryStore::new();
        let first = store.add(draft("A", "M"))?;
        let second = store.add(draft("B", "M"))?;
        assert!(store.delete_by_id(first.id)?);

        let third = store.add(draft("C", "M"))?;
        assert_ne!(third.id, second.id);
        assert_ne!(third.id, first.id);
        assert_eq!(third.id, CompanyId::new(3));
        Ok(())
    }

    #[test]
    fn test_delete_then_get_is_not_found() -> Result<()> {
        let mut store = InMemoryStore::new();
        let company = store.add(draft("A", "M"))?;
        assert!(store.delete_by_id(company.id)?);
        assert!(store.get_by_id(company.id).is_none());
        assert!(!store.delete_by_id(company.id)?);
        Ok(())
    }

    #[test]
    fn test_update_changes_only_patched_field() -> Result<()> {
        let mut store = InMemoryStore::new();
        let company = store.add(draft("A", "M"))?;

        let updated = store
            .update_by_id(
                company.id,
                CompanyPatch {
                    manager_name: Some("X".to_string()),
                    ..Default::default()
                },
            )?
            .expect("company should exist");

        assert_eq!(updated.manager_name, "X");
        assert_eq!(updated.name, company.name);
        assert_eq!(updated.phone_number, company.phone_number);
        assert_eq!(updated.address, company.address);
        assert_eq!(updated.id, company.id);
        assert_eq!(store.get_by_id(company.id), Some(updated));
        Ok(())
    }

    #[test]
    fn test_update_unknown_id_is_none() -> Result<()> {
        let mut store = InMemoryStore::new();
        assert_eq!(
            store.update_by_id(CompanyId::new(9), CompanyPatch::default())?,
            None
        );
        Ok(())
    }

    #[test]
    fn test_list_is_a_copy() -> Result<()> {
        let mut store = InMemoryStore::new();
        store.add(draft("A", "M"))?;
        let mut snapshot = store.list();
        snapshot.clear();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        Ok(())
    }

    #[test]
    fn test_seed_keeps_ids_and_continues_counter() -> Result<()> {
        let mut store = InMemoryStore::with_seed(vec![seed(Some(4), "A"), seed(Some(2), "B")])?;
        let ids: Vec<u64> = store.list().iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![4, 2]);

        let added = store.add(draft("C", "M"))?;
        assert_eq!(added.id, CompanyId::new(5));
        Ok(())
    }

    #[test]
    fn test_seed_reassigns_duplicates_and_missing_ids() -> Result<()> {
        let store = InMemoryStore::with_seed(vec![
            seed(Some(1), "A"),
            seed(Some(1), "B"),
            seed(None, "C"),
        ])?;
        let ids: Vec<u64> = store.list().iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_seed_at_id_ceiling_is_rejected() {
        let result = InMemoryStore::with_seed(vec![seed(Some(u64::MAX), "A")]);
        assert!(matches!(result, Err(Error::IdSpaceExhausted)));
    }
}
