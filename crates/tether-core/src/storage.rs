use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::StorageError;

pub const TASKS_KEY: &str = "todo-tasks";
pub const TASKS_BACKUP_KEY: &str = "todo-tasks.bak";
pub const THEME_KEY: &str = "todo-theme";

/// A string-keyed storage area scoped to one application.
///
/// Methods take `&self` so that one area can back both stores through
/// cheap clones of the same handle.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage area. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.items.borrow().clone()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
