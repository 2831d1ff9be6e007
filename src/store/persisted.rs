//! JSON snapshots of app state kept in browser local storage.
//!
//! Reads never fail: a missing key, a storage exception or unparsable JSON all
//! yield the caller's default. Writes are best-effort; failures are logged and
//! the in-memory value stays authoritative.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use leptos::logging::warn;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key-value string storage.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError("No window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| StorageError("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }
}

/// In-process storage. Used when localStorage is unavailable and in tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage where every call fails, e.g. quota exceeded or private browsing.
#[cfg(test)]
pub struct FailingStorage;

#[cfg(test)]
impl StorageBackend for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError("SecurityError".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError("QuotaExceededError".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError("SecurityError".to_string()))
    }
}

/// Open the browser's localStorage, falling back to memory-only storage.
pub fn browser_backend() -> Rc<dyn StorageBackend> {
    match LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            warn!("Falling back to in-memory storage: {}", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

/// Read the snapshot under `key`, or `default` if it is absent or unreadable.
pub fn load<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str, default: T) -> T {
    match backend.get_item(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Error reading localStorage key \"{}\": {}", key, e);
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            warn!("Error reading localStorage key \"{}\": {}", key, e);
            default
        }
    }
}

pub fn try_save<T: Serialize>(
    backend: &dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError(e.to_string()))?;
    backend.set_item(key, &json)
}

/// Write the snapshot under `key`. Failures are logged and dropped.
pub fn save<T: Serialize>(backend: &dyn StorageBackend, key: &str, value: &T) {
    if let Err(e) = try_save(backend, key, value) {
        warn!("Error setting localStorage key \"{}\": {}", key, e);
    }
}

/// A signal initialised from storage that writes itself back on every change,
/// including the first run after mount.
pub fn persisted_signal<T>(backend: Rc<dyn StorageBackend>, key: &'static str, default: T) -> RwSignal<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let signal = RwSignal::new(load(backend.as_ref(), key, default));
    Effect::new(move |_| {
        signal.with(|value| save(backend.as_ref(), key, value));
    });
    signal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::{Meal, MealLog, MealSlot, Stats};

    #[test]
    fn test_round_trip_returns_written_value() {
        let storage = MemoryStorage::new();
        let mut log = MealLog::seed();
        log.push(MealSlot::Dinner, Meal::new(999, "Pizza", 800.0, "pizza"));

        save(&storage, "app-meals", &log);
        let loaded = load(&storage, "app-meals", MealLog::default());
        assert_eq!(loaded, log);
    }

    #[test]
    fn test_round_trip_ignores_default() {
        let storage = MemoryStorage::new();
        save(&storage, "theme", &"dark".to_string());
        assert_eq!(load(&storage, "theme", "light".to_string()), "dark");
    }

    #[test]
    fn test_missing_key_yields_default() {
        let storage = MemoryStorage::new();
        assert_eq!(load(&storage, "app-stats", Stats::default()), Stats::default());
    }

    #[test]
    fn test_corrupt_json_yields_default() {
        let storage = MemoryStorage::new();
        storage.set_item("app-stats", "{not json").unwrap();
        assert_eq!(load(&storage, "app-stats", Stats::default()), Stats::default());
    }

    #[test]
    fn test_wrong_shape_yields_default() {
        let storage = MemoryStorage::new();
        storage.set_item("app-meals", "[1, 2, 3]").unwrap();
        assert_eq!(load(&storage, "app-meals", MealLog::seed()), MealLog::seed());
    }

    #[test]
    fn test_throwing_read_yields_default() {
        let loaded = load(&FailingStorage, "app-stats", Stats::default());
        assert_eq!(loaded, Stats::default());
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        // Must not panic
        save(&FailingStorage, "app-stats", &Stats::default());
        assert!(try_save(&FailingStorage, "app-stats", &Stats::default()).is_err());
    }

    #[test]
    fn test_save_overwrites_whole_snapshot() {
        let storage = MemoryStorage::new();
        save(&storage, "app-meals", &MealLog::seed());
        save(&storage, "app-meals", &MealLog::default());
        let raw = storage.get_item("app-meals").unwrap().unwrap();
        assert!(!raw.contains("Tostada"));
    }

    #[test]
    fn test_remove_item() {
        let storage = MemoryStorage::new();
        save(&storage, "theme", &"dark");
        storage.remove_item("theme").unwrap();
        assert_eq!(storage.get_item("theme").unwrap(), None);
    }
}
