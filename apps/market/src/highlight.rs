//! Highlighted ("favorite") listings persisted under one storage key.
//!
//! The whole collection is written as a JSON array of full records after
//! every change, so a highlight stays displayable even after the listing
//! leaves the dataset. The in-memory collection is the source of truth for
//! the session: when a write fails the change is kept and the error returned.

use std::collections::HashSet;

use crate::domain::{CarId, CarRecord};
use crate::storage::{KeyValueStore, StoreError};

/// Storage key shared with earlier releases of the dashboard.
pub const HIGHLIGHT_STORAGE_KEY: &str = "highlightedCars";

#[derive(Debug)]
pub struct HighlightStore<S> {
    storage: S,
    cars: Vec<CarRecord>,
}

impl<S: KeyValueStore> HighlightStore<S> {
    /// Reads the persisted highlights. Absent or unreadable data yields an
    /// empty collection.
    pub fn load(storage: S) -> Self {
        let cars = storage
            .get(HIGHLIGHT_STORAGE_KEY)
            .map(|raw| decode_highlights(&raw))
            .unwrap_or_default();

        tracing::debug!(count = cars.len(), "loaded highlighted cars");
        Self { storage, cars }
    }

    /// Appends `car` unless a listing with the same id is already present.
    /// Returns whether it was added.
    pub fn add(&mut self, car: CarRecord) -> Result<bool, StoreError> {
        if self.contains(&car.id) {
            return Ok(false);
        }
        self.cars.push(car);
        self.persist()?;
        Ok(true)
    }

    /// Drops the listing with `id`. Returns whether one was present.
    pub fn remove(&mut self, id: &CarId) -> Result<bool, StoreError> {
        let Some(position) = self.cars.iter().position(|car| &car.id == id) else {
            return Ok(false);
        };
        self.cars.remove(position);
        self.persist()?;
        Ok(true)
    }

    pub fn contains(&self, id: &CarId) -> bool {
        self.cars.iter().any(|car| &car.id == id)
    }

    pub fn cars(&self) -> &[CarRecord] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.cars)?;
        self.storage.set(HIGHLIGHT_STORAGE_KEY, &encoded)
    }
}

fn decode_highlights(raw: &str) -> Vec<CarRecord> {
    let cars: Vec<CarRecord> = match serde_json::from_str(raw) {
        Ok(cars) => cars,
        Err(error) => {
            tracing::debug!(%error, "discarding unreadable highlight data");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    cars.into_iter()
        .filter(|car| seen.insert(car.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn camry() -> CarRecord {
        CarRecord::new(1, "Toyota Camry", "Camry")
    }

    fn civic() -> CarRecord {
        CarRecord::new(3, "Honda Civic", "Civic")
    }

    #[test]
    fn starts_empty_without_persisted_data() {
        let store = HighlightStore::load(MemoryStore::new());
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_persisted_data_loads_as_empty() {
        for raw in ["not json", "{\"Cid\": 1}", "[1, 2, 3]", ""] {
            let store = HighlightStore::load(MemoryStore::with_entry(HIGHLIGHT_STORAGE_KEY, raw));
            assert!(store.is_empty(), "expected empty store for {raw:?}");
        }
    }

    #[test]
    fn add_then_contains() -> Result<(), StoreError> {
        let mut store = HighlightStore::load(MemoryStore::new());

        assert!(store.add(camry())?);

        assert!(store.contains(&CarId::Number(1)));
        assert!(!store.contains(&CarId::Number(3)));
        Ok(())
    }

    #[test]
    fn duplicate_ids_are_suppressed() -> Result<(), StoreError> {
        let mut store = HighlightStore::load(MemoryStore::new());
        store.add(camry())?;

        let mut renamed = camry();
        renamed.display_name = "Toyota Camry Hybrid".to_string();

        assert!(!store.add(renamed)?);
        assert_eq!(store.len(), 1);
        assert_eq!(store.cars()[0].display_name, "Toyota Camry");
        Ok(())
    }

    #[test]
    fn remove_then_not_contains() -> Result<(), StoreError> {
        let mut store = HighlightStore::load(MemoryStore::new());
        store.add(camry())?;
        store.add(civic())?;

        assert!(store.remove(&CarId::Number(1))?);
        assert!(!store.remove(&CarId::Number(1))?);

        assert!(!store.contains(&CarId::Number(1)));
        assert_eq!(store.cars(), &[civic()]);
        Ok(())
    }

    #[test]
    fn removing_the_last_highlight_persists_an_empty_array() -> Result<(), StoreError> {
        let mut store = HighlightStore::load(MemoryStore::new());
        store.add(camry())?;
        store.remove(&CarId::Number(1))?;

        let storage = store.into_storage();
        assert_eq!(storage.get(HIGHLIGHT_STORAGE_KEY).as_deref(), Some("[]"));
        Ok(())
    }

    #[test]
    fn reload_reproduces_the_collection() -> Result<(), StoreError> {
        let mut store = HighlightStore::load(MemoryStore::new());
        let mut detailed = civic();
        detailed.status = Some("Used".to_string());
        detailed
            .extra
            .insert("Yr".to_string(), serde_json::Value::from(2018));

        store.add(camry())?;
        store.add(detailed)?;
        store.add(CarRecord::new("X-9", "Mazda CX-5", "CX-5"))?;
        store.remove(&CarId::Number(1))?;
        let expected = store.cars().to_vec();

        let reloaded = HighlightStore::load(store.into_storage());

        assert_eq!(reloaded.cars(), expected.as_slice());
        Ok(())
    }

    #[test]
    fn failed_write_keeps_the_in_memory_change() {
        let mut store = HighlightStore::load(MemoryStore::with_limit(8));

        let result = store.add(camry());

        assert!(matches!(result, Err(StoreError::QuotaExceeded { .. })));
        assert!(store.contains(&CarId::Number(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_ids_in_storage_keep_the_first() {
        let raw = r#"[
            {"Cid": 1, "NameMMT": "Toyota Camry", "Model": "Camry"},
            {"Cid": 1, "NameMMT": "Toyota Camry Copy", "Model": "Camry"}
        ]"#;

        let store = HighlightStore::load(MemoryStore::with_entry(HIGHLIGHT_STORAGE_KEY, raw));

        assert_eq!(store.len(), 1);
        assert_eq!(store.cars()[0].display_name, "Toyota Camry");
    }
}
