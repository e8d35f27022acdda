pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactUpdate, FieldUpdate},
    manager::ContactManager,
    search,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStore, memory::MemoryStorage, stores::CsvStorage,
};
