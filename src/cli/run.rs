use crate::{
    cli::{display::display_contacts, menu::Menu},
    prelude::{
        AppError, Contact, ContactManager, ContactUpdate, CsvStorage,
        command::{Cli, Commands},
        contact::DEFAULT_GROUP,
    },
};
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::io::{self, Write};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let storage = CsvStorage::new(&cli.file)?;
    let path = storage.path().display().to_string();
    info!("Using contact file {}", path);

    let mut manager = ContactManager::new(Box::new(storage))?;

    match cli.command {
        None => {
            if manager.backing_store_missing() {
                println!("{} does not exist. Starting with an empty contact book.", path);
            }

            let stdin = io::stdin();
            Menu::new(&mut manager, stdin.lock(), io::stdout()).run()
        }
        Some(command) => run_command(&mut manager, command, &mut io::stdout()),
    }
}

/// Runs one non-interactive command. Changes are saved straight away.
pub fn run_command<W: Write>(
    manager: &mut ContactManager,
    command: Commands,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Commands::Add {
            name,
            phone,
            email,
            group,
            favorite,
        } => {
            let group = if group.is_empty() {
                DEFAULT_GROUP.to_string()
            } else {
                group
            };
            let new_contact = Contact::new(name.clone(), phone, email)
                .with_group(group)
                .with_favorite(favorite);

            manager.add_contact(new_contact);
            manager.save()?;

            writeln!(out, "Contact '{}' added successfully.", name)?;
            Ok(())
        }

        Commands::Update {
            name,
            phone,
            email,
            group,
            favorite,
        } => {
            let update = ContactUpdate::from_input(&phone, &email, &group, favorite);

            if !manager.update_contact(&name, update) {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            }

            manager.save()?;
            writeln!(out, "Contact updated successfully.")?;
            Ok(())
        }

        Commands::Delete { name } => {
            if !manager.delete_contact(&name) {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            }

            manager.save()?;
            writeln!(out, "Contact deleted successfully.")?;
            Ok(())
        }

        Commands::List => {
            let contacts = manager.contact_list();
            display_contacts(out, &contacts, "No contacts found.")
        }

        Commands::Search { query } => {
            let results = manager.search_contacts(&query);
            display_contacts(out, &results, "No matching contacts found.")
        }
    }
}
