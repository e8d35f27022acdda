use std::io::{BufRead, Write};

use log::debug;

use crate::cli::display::display_contacts;
use crate::prelude::{AppError, Contact, ContactManager, ContactUpdate, contact::DEFAULT_GROUP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Update,
    Delete,
    List,
    Search,
    Exit,
}

pub fn parse_menu_action(input: &str) -> Result<MenuAction, AppError> {
    match input {
        "1" => Ok(MenuAction::Add),
        "2" => Ok(MenuAction::Update),
        "3" => Ok(MenuAction::Delete),
        "4" => Ok(MenuAction::List),
        "5" => Ok(MenuAction::Search),
        "6" => Ok(MenuAction::Exit),
        _ => Err(AppError::ParseCommand(input.to_string())),
    }
}

// Whether the loop should keep going after an action
enum Flow {
    Continue,
    Exit,
}

/// Reads one line without its line ending. `None` once input is exhausted.
///
/// Other whitespace is kept: `" Bo "` and `"Bo"` are different names.
fn read_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// The interactive text menu. Holds no state besides the manager it drives.
pub struct Menu<'a, R, W> {
    manager: &'a mut ContactManager,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(manager: &'a mut ContactManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    /// Runs until the exit action is chosen or input runs out.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.show_menu()?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                // Treat end of input like choosing exit
                return self.exit();
            };

            let flow = match parse_menu_action(&choice) {
                Ok(MenuAction::Add) => self.add()?,
                Ok(MenuAction::Update) => self.update()?,
                Ok(MenuAction::Delete) => self.delete()?,
                Ok(MenuAction::List) => self.list()?,
                Ok(MenuAction::Search) => self.search()?,
                Ok(MenuAction::Exit) => match self.exit() {
                    Ok(()) => return Ok(()),
                    Err(e) => {
                        writeln!(self.output, "{}", e)?;
                        Flow::Continue
                    }
                },
                Err(e) => {
                    debug!("{}", e);
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return self.exit();
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n1. Add Contact")?;
        writeln!(self.output, "2. Update Contact")?;
        writeln!(self.output, "3. Delete Contact")?;
        writeln!(self.output, "4. List Contacts")?;
        writeln!(self.output, "5. Search Contact")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        read_input(&mut self.input)
    }

    fn add(&mut self) -> Result<Flow, AppError> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone_number) = self.prompt("Enter phone number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.prompt("Enter email: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(group) =
            self.prompt("Enter group (Family/Friends/Work or leave blank for 'General'): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(favorite) = self.prompt("Mark as favorite? (y/n): ")? else {
            return Ok(Flow::Exit);
        };

        let group = if group.is_empty() {
            DEFAULT_GROUP.to_string()
        } else {
            group
        };
        let contact = Contact::new(name.clone(), phone_number, email)
            .with_group(group)
            .with_favorite(favorite.to_lowercase() == "y");

        self.manager.add_contact(contact);
        writeln!(self.output, "Contact '{}' added successfully.", name)?;
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow, AppError> {
        let Some(name) = self.prompt("Enter name to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone_number) = self.prompt("Enter new phone number (or press enter to skip): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.prompt("Enter new email (or press enter to skip): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(group) = self.prompt("Enter new group (or press enter to skip): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(favorite) = self.prompt("Mark as favorite? (y/n or press enter to skip): ")?
        else {
            return Ok(Flow::Exit);
        };

        let favorite = if favorite.is_empty() {
            None
        } else {
            Some(favorite.to_lowercase() == "y")
        };
        let update = ContactUpdate::from_input(&phone_number, &email, &group, favorite);

        if self.manager.update_contact(&name, update) {
            writeln!(self.output, "Contact updated successfully.")?;
        } else {
            writeln!(self.output, "{}", AppError::NotFound("Contact".to_string()))?;
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow, AppError> {
        let Some(name) = self.prompt("Enter name to delete: ")? else {
            return Ok(Flow::Exit);
        };

        if self.manager.delete_contact(&name) {
            writeln!(self.output, "Contact deleted successfully.")?;
        } else {
            writeln!(self.output, "{}", AppError::NotFound("Contact".to_string()))?;
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow, AppError> {
        let contacts = self.manager.contact_list();
        display_contacts(&mut self.output, &contacts, "No contacts found.")?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow, AppError> {
        let Some(query) = self.prompt("Enter name, phone number, or email to search: ")? else {
            return Ok(Flow::Exit);
        };

        let results = self.manager.search_contacts(&query);
        display_contacts(&mut self.output, &results, "No matching contacts found.")?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<(), AppError> {
        let manager = &mut *self.manager;
        let input = &mut self.input;
        let output = &mut self.output;

        manager.request_exit_save(|| {
            write!(
                output,
                "You have unsaved changes. Do you want to save before exiting? (y/n): "
            )?;
            output.flush()?;
            let answer = read_input(input)?.unwrap_or_default();
            Ok(answer.to_lowercase() == "y")
        })?;

        writeln!(self.output, "Exiting program.")?;
        Ok(())
    }
}
