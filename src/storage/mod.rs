pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONTACTS_PATH: &str = "contacts.csv";

pub trait ContactStore {
    /// Reads every record from the backing store.
    /// `Ok(None)` means the backing store does not exist yet.
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError>;

    /// Replaces the whole backing store with `contacts`, in the given order.
    fn save(&self, contacts: &[&Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

// Lets a caller keep a handle on the storage it hands to a manager
impl<T: ContactStore + ?Sized> ContactStore for std::rc::Rc<T> {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        (**self).load()
    }

    fn save(&self, contacts: &[&Contact]) -> Result<(), AppError> {
        (**self).save(contacts)
    }

    fn get_medium(&self) -> &str {
        (**self).get_medium()
    }
}
