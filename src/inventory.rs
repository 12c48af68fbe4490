use crate::error::ApiError;
use crate::item::{Item, ItemPatch};
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// The process-lifetime store of items, keyed by id.
///
/// Cloning is cheap and every clone shares the same map. Each operation takes
/// the lock once, so concurrent requests on the same id never interleave.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    items: Arc<Mutex<HashMap<i64, Item>>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an item, optionally requiring an exact name match.
    pub fn get(&self, id: i64, name: Option<&str>) -> Result<Item, ApiError> {
        let items = self.items.lock();
        let item = items.get(&id).ok_or(ApiError::ID_NOT_FOUND)?;
        match name {
            Some(name) if item.name != name => Err(ApiError::NAME_NOT_FOUND),
            _ => Ok(item.clone()),
        }
    }

    pub fn create(&self, id: i64, item: Item) -> Result<Item, ApiError> {
        match self.items.lock().entry(id) {
            Entry::Occupied(_) => Err(ApiError::ID_EXISTS),
            Entry::Vacant(slot) => {
                debug!(id, name = %item.name, "item created");
                Ok(slot.insert(item).clone())
            }
        }
    }

    pub fn update(&self, id: i64, patch: ItemPatch) -> Result<Item, ApiError> {
        let mut items = self.items.lock();
        let item = items.get_mut(&id).ok_or(ApiError::ID_DOES_NOT_EXIST)?;
        patch.apply(item);
        debug!(id, "item updated");
        Ok(item.clone())
    }

    /// Remove an item, returning what was stored.
    pub fn delete(&self, id: i64) -> Result<Item, ApiError> {
        let removed = self
            .items
            .lock()
            .remove(&id)
            .ok_or(ApiError::ID_DOES_NOT_EXIST)?;
        debug!(id, "item deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64) -> Item {
        Item {
            name: name.into(),
            price,
            description: None,
        }
    }

    #[test]
    fn starts_empty() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.len(), 0);
    }

    #[test]
    fn create_then_get_returns_same_item() {
        let inventory = Inventory::new();
        let created = inventory.create(1, item("A", 1.5)).unwrap();
        assert_eq!(created, item("A", 1.5));
        assert_eq!(inventory.get(1, None).unwrap(), item("A", 1.5));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn duplicate_create_is_rejected_and_keeps_original() {
        let inventory = Inventory::new();
        inventory.create(7, item("First", 1.0)).unwrap();
        assert_eq!(
            inventory.create(7, item("Second", 2.0)),
            Err(ApiError::ID_EXISTS)
        );
        assert_eq!(inventory.get(7, None).unwrap().name, "First");
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn get_missing_id() {
        assert_eq!(Inventory::new().get(3, None), Err(ApiError::ID_NOT_FOUND));
    }

    #[test]
    fn get_with_name_filter() {
        let inventory = Inventory::new();
        inventory.create(1, item("Widget", 9.99)).unwrap();
        assert!(inventory.get(1, Some("Widget")).is_ok());
        assert_eq!(
            inventory.get(1, Some("widget")),
            Err(ApiError::NAME_NOT_FOUND)
        );
    }

    #[test]
    fn update_missing_id() {
        assert_eq!(
            Inventory::new().update(1, ItemPatch::default()),
            Err(ApiError::ID_DOES_NOT_EXIST)
        );
    }

    #[test]
    fn update_applies_patch_in_place() {
        let inventory = Inventory::new();
        inventory.create(1, item("Widget", 9.99)).unwrap();
        let patch = ItemPatch {
            price: Some(19.99),
            ..ItemPatch::default()
        };
        let updated = inventory.update(1, patch).unwrap();
        assert_eq!(updated, item("Widget", 19.99));
        assert_eq!(inventory.get(1, None).unwrap(), updated);
    }

    #[test]
    fn delete_removes_entry() {
        let inventory = Inventory::new();
        inventory.create(1, item("Widget", 9.99)).unwrap();
        assert_eq!(inventory.delete(1).unwrap(), item("Widget", 9.99));
        assert!(inventory.is_empty());
        assert_eq!(inventory.get(1, None), Err(ApiError::ID_NOT_FOUND));
        assert_eq!(inventory.delete(1), Err(ApiError::ID_DOES_NOT_EXIST));
    }

    #[test]
    fn clones_share_state() {
        let inventory = Inventory::new();
        let other = inventory.clone();
        other.create(5, item("Shared", 1.0)).unwrap();
        assert_eq!(inventory.get(5, None).unwrap().name, "Shared");
    }

    #[test]
    fn concurrent_creates_on_one_id_admit_exactly_one() {
        let inventory = Inventory::new();
        let handles: Vec<_> = (0..16)
            .map(|n| {
                let inventory = inventory.clone();
                std::thread::spawn(move || inventory.create(42, item("Racer", n as f64)).is_ok())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(inventory.len(), 1);
    }
}
