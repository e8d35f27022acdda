use clap::{ArgAction, Parser, Subcommand};

use crate::prelude::storage::DEFAULT_CONTACTS_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Personal contact book")]
pub struct Cli {
    /// CSV file the contacts are kept in
    #[arg(long, env = "CONTACTS_FILE", default_value_t = String::from(DEFAULT_CONTACTS_PATH))]
    pub file: String,

    /// Run a single command and save; without one the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact, replacing any contact with the same name
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Contact group (Family, Friends, Work)
        #[arg(long, default_value = "General")]
        group: String,

        /// Mark the contact as a favorite
        #[arg(long)]
        favorite: bool,
    },
    /// Update an existing contact
    /// Fields left out or given as empty strings are not changed
    Update {
        /// Name of the contact to update
        #[arg(long)]
        name: String,

        /// New phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// New email address
        #[arg(long, default_value = "")]
        email: String,

        /// New group
        #[arg(long, default_value = "")]
        group: String,

        /// Set or clear the favorite mark
        #[arg(long, action = ArgAction::Set)]
        favorite: Option<bool>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// List contacts, favorites first
    List,
    /// Search name, phone number and email
    Search {
        /// Text to look for (case-insensitive)
        #[arg(long)]
        query: String,
    },
}
