//! Persisted Key-Value Storage
//!
//! Thin seam over browser `localStorage` so the task list and theme can be
//! exercised natively with an in-memory map.

/// String key-value slot store
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`, looked up on every call.
///
/// When storage is unavailable (no window, disabled by the browser) reads
/// return `None` and writes report an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("localStorage write failed: {:?}", e))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::KeyValueStorage;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Shared in-memory map; clones see the same slots
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        slots: Rc<RefCell<HashMap<String, String>>>,
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
