use std::cell::RefCell;
use std::collections::HashMap;

/// Best-effort string storage. Reads of an unavailable store behave as if
/// the key were unset; writes to one are dropped.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.write(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_existing_value() {
        let store = MemoryStore::with_entry("theme", "light");
        store.write("theme", "dark");

        assert_eq!(store.read("theme").as_deref(), Some("dark"));
        assert_eq!(store.read("missing"), None);
    }
}
