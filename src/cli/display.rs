use std::io::Write;

use crate::prelude::{AppError, Contact};

pub const RULE_WIDTH: usize = 65;

pub fn format_header() -> String {
    format!(
        "{:<15}{:<15}{:<25}{:<10}{}",
        "Name", "Phone", "Email", "Group", "Favorite"
    )
}

pub fn format_contact(contact: &Contact) -> String {
    let favorite = if contact.favorite { "Yes" } else { "No" };
    format!(
        "{:<15}{:<15}{:<25}{:<10}{}",
        contact.name, contact.phone_number, contact.email, contact.group, favorite
    )
}

/// Writes `contacts` as a table, or `empty_message` when there are none.
pub fn display_contacts<W: Write>(
    out: &mut W,
    contacts: &[&Contact],
    empty_message: &str,
) -> Result<(), AppError> {
    if contacts.is_empty() {
        writeln!(out, "{}", empty_message)?;
        return Ok(());
    }

    writeln!(out, "{}", format_header())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for contact in contacts {
        writeln!(out, "{}", format_contact(contact))?;
    }
    Ok(())
}
