use log::warn;
use web_sys::window;

/// Durable key-value storage for small client preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Unavailable storage (private mode, no window)
/// reads as empty and drops writes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("Could not persist {}", key);
                }
            }
            None => warn!("localStorage unavailable, {} not persisted", key),
        }
    }
}

/// The browser's preferred locale, e.g. `it-IT`.
pub fn browser_locale() -> Option<String> {
    window().and_then(|w| w.navigator().language())
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::PreferenceStore;

    #[derive(Default)]
    pub struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.set(key, value);
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }
}
