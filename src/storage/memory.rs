use super::*;

use std::cell::{Cell, RefCell};

/// Backing store that lives only for the process. Used for tests and benchmarks.
pub struct MemoryStorage {
    pub medium: String,
    data: RefCell<Option<Vec<Contact>>>,
    saves: Cell<usize>,
}

impl MemoryStorage {
    /// A store with no backing data, like a file that does not exist yet.
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(None),
            saves: Cell::new(0),
        }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let storage = Self::new();
        *storage.data.borrow_mut() = Some(contacts);
        storage
    }

    /// What the last save wrote, in write order.
    pub fn snapshot(&self) -> Option<Vec<Contact>> {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[&Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(contacts.iter().map(|&c| c.clone()).collect());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
