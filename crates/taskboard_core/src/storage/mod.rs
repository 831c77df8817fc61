use crate::error::AppError;
use std::cell::RefCell;
use std::collections::HashMap;

mod file_store;
pub use file_store::{FileStore, store_dir};

pub trait TextStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStore, TextStore};

    #[test]
    fn memory_store_reads_back_what_was_set() {
        let store = MemoryStore::new();
        store.set("tasks", "[]").unwrap();

        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_store_returns_none_for_missing_key() {
        let store = MemoryStore::new();

        assert_eq!(store.get("tasks").unwrap(), None);
    }

    #[test]
    fn memory_store_set_overwrites_value() {
        let store = MemoryStore::new();
        store.set("tasks", "old").unwrap();
        store.set("tasks", "new").unwrap();

        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("new"));
    }
}
