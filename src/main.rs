use contact_book::prelude::run_app;
use log::error;
use std::process::exit;

fn main() {
    if let Err(e) = run_app() {
        error!("{e}");
        eprintln!("Error: {e}");
        exit(1);
    }
}
