//! Pantry Ledger
//!
//! Locally persisted ingredient -> quantity map. Persistence sits
//! behind a narrow key-value capability so the ledger logic is the
//! same over browser local storage and the in-memory store used in
//! tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// Fixed local-storage key for the serialized mapping
pub const PANTRY_STORAGE_KEY: &str = "pantry";

/// Narrow persistence capability injected into the ledger
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser local storage. Reads and writes are best-effort; a missing
/// `window` or denied storage behaves like an empty store.
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl KvStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory store, shared between clones so tests can reload from it.
#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Ingredient quantities, persisted as a JSON object on every change.
#[derive(Clone)]
pub struct PantryLedger<S: KvStore> {
    store: S,
    quantities: BTreeMap<String, u32>,
}

impl<S: KvStore> PantryLedger<S> {
    /// Hydrate from the store. An absent or unparseable value yields an
    /// empty ledger rather than an error.
    pub fn load(store: S) -> Self {
        let quantities = store
            .get(PANTRY_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { store, quantities }
    }

    /// Quantity for an ingredient; `None` means "not yet tracked" and
    /// renders as an empty input, not zero.
    pub fn quantity(&self, ingredient: &str) -> Option<u32> {
        self.quantities.get(ingredient).copied()
    }

    /// Replace one ingredient's quantity, coercing negative input to
    /// zero and saturating above `u32::MAX`, then persist the whole
    /// mapping before returning.
    pub fn set_quantity(&mut self, ingredient: &str, quantity: i64) {
        let clamped = quantity.clamp(0, u32::MAX as i64) as u32;
        self.quantities.insert(ingredient.trim().to_string(), clamped);
        self.persist();
    }

    fn persist(&self) {
        if let Ok(raw) = serde_json::to_string(&self.quantities) {
            self.store.set(PANTRY_STORAGE_KEY, &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_preserves_other_keys() {
        let store = MemoryStore::default();
        store.set(PANTRY_STORAGE_KEY, r#"{"rice":2}"#);

        let mut ledger = PantryLedger::load(store.clone());
        ledger.set_quantity("berries", 3);

        let persisted: BTreeMap<String, u32> =
            serde_json::from_str(&store.get(PANTRY_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(persisted.get("rice"), Some(&2));
        assert_eq!(persisted.get("berries"), Some(&3));
    }

    #[test]
    fn test_negative_coerced_to_zero() {
        let store = MemoryStore::default();
        let mut ledger = PantryLedger::load(store.clone());
        ledger.set_quantity("rice", -5);
        assert_eq!(ledger.quantity("rice"), Some(0));

        let persisted: BTreeMap<String, u32> =
            serde_json::from_str(&store.get(PANTRY_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(persisted.get("rice"), Some(&0));
    }

    #[test]
    fn test_oversized_saturates_instead_of_wrapping() {
        let store = MemoryStore::default();
        let mut ledger = PantryLedger::load(store);
        // Larger than u32 but still a parseable i64, as typed input
        // can be.
        ledger.set_quantity("corn", u32::MAX as i64 + 7);
        assert_eq!(ledger.quantity("corn"), Some(u32::MAX));
    }

    #[test]
    fn test_round_trip_reload() {
        let store = MemoryStore::default();
        let mut ledger = PantryLedger::load(store.clone());
        ledger.set_quantity("corn", 4);
        ledger.set_quantity("squash", 1);

        // Simulate a fresh start over the same backing store.
        let reloaded = PantryLedger::load(store);
        assert_eq!(reloaded.quantity("corn"), Some(4));
        assert_eq!(reloaded.quantity("squash"), Some(1));
    }

    #[test]
    fn test_corrupted_state_yields_empty() {
        let store = MemoryStore::default();
        store.set(PANTRY_STORAGE_KEY, "not json {{");
        let ledger = PantryLedger::load(store);
        assert_eq!(ledger.quantity("rice"), None);
    }

    #[test]
    fn test_untracked_is_none_not_zero() {
        let ledger = PantryLedger::load(MemoryStore::default());
        assert_eq!(ledger.quantity("berries"), None);
    }
}
