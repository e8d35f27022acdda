pub mod contact;
pub mod manager;
pub mod search;

use crate::prelude::{AppError, Contact, ContactStore, ContactUpdate};
