use super::*;

use log::debug;
use std::collections::HashMap;

/// In-memory contact book keyed by name, synchronised with a backing store.
pub struct ContactManager {
    pub mem: HashMap<String, Contact>,
    pub storage: Box<dyn ContactStore>,
    unsaved_changes: bool,
    backing_store_missing: bool,
}

impl ContactManager {
    /// Creates a manager and loads every contact from `storage`.
    ///
    /// A backing store that does not exist yet gives an empty book,
    /// see [`ContactManager::backing_store_missing`].
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut manager = Self {
            mem: HashMap::new(),
            storage,
            unsaved_changes: false,
            backing_store_missing: false,
        };
        manager.load()?;
        Ok(manager)
    }

    fn load(&mut self) -> Result<(), AppError> {
        match self.storage.load()? {
            Some(contacts) => {
                // Later rows win when a name appears twice
                for contact in contacts {
                    self.mem.insert(contact.name.clone(), contact);
                }
            }
            None => self.backing_store_missing = true,
        }
        Ok(())
    }

    pub fn backing_store_missing(&self) -> bool {
        self.backing_store_missing
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.mem.get(name)
    }

    /// Inserts `contact`, replacing any contact with the same name.
    pub fn add_contact(&mut self, contact: Contact) {
        debug!("Adding contact {:?}", contact.name);

        self.mem.insert(contact.name.clone(), contact);
        self.unsaved_changes = true;
    }

    /// Returns false, changing nothing, when no contact has this name.
    pub fn update_contact(&mut self, name: &str, update: ContactUpdate) -> bool {
        match self.mem.get_mut(name) {
            Some(contact) => {
                debug!("Updating contact {:?}: {:?}", name, update);

                update.apply_to(contact);
                self.unsaved_changes = true;
                true
            }
            None => false,
        }
    }

    pub fn delete_contact(&mut self, name: &str) -> bool {
        if self.mem.remove(name).is_some() {
            debug!("Deleted contact {:?}", name);

            self.unsaved_changes = true;
            true
        } else {
            false
        }
    }

    pub fn search_contacts(&self, query: &str) -> Vec<&Contact> {
        let results = search::search(self.mem.values(), query);
        debug!("Search for {:?} matched {} contacts", query, results.len());
        results
    }

    /// Every contact, favorites first and then by name.
    pub fn contact_list(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.mem.values().collect();
        search::sort_canonical(&mut contacts);
        contacts
    }

    /// Rewrites the whole backing store in listing order.
    /// On error nothing in memory changes and the unsaved flag stays set.
    pub fn save(&mut self) -> Result<(), AppError> {
        let contacts = self.contact_list();
        self.storage.save(&contacts)?;

        self.unsaved_changes = false;
        Ok(())
    }

    /// Saves before exit if there are unsaved changes and `confirm` agrees.
    /// Returns whether a save happened.
    pub fn request_exit_save<F>(&mut self, confirm: F) -> Result<bool, AppError>
    where
        F: FnOnce() -> Result<bool, AppError>,
    {
        if !self.unsaved_changes {
            return Ok(false);
        }

        if confirm()? {
            self.save()?;
            return Ok(true);
        }
        Ok(false)
    }
}
