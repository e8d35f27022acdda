use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn add(file: &Path, name: &str, phone: &str, email: &str, favorite: bool) {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.arg("--file")
        .arg(file)
        .args(["add", "--name", name, "--phone", phone, "--email", email]);

    if favorite {
        cmd.arg("--favorite");
    }

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("added successfully"));
}

#[test]
fn listing_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.csv");

    // Empty book
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));

    add(&file, "Patricia", "08066809241", "lmartinez@bender-patterson.net", false);
    add(&file, "Diane", "08064879199", "grahammatthew@gmail.com", true);
    add(&file, "John", "08046516806", "wendy59@turner.com", false);
    add(&file, "Wayne", "08062866694", "jackie73@lopez.com", true);
    add(&file, "Alice", "08031234567", "alice@example.com", false);

    let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&file)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing = String::from_utf8_lossy(&output);
    let lines: Vec<&str> = listing.lines().collect();

    // Header and rule come first
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("Name"));

    let names: Vec<&str> = lines[2..]
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, vec!["Diane", "Wayne", "Alice", "John", "Patricia"]);

    assert!(lines[2].ends_with("Yes") && lines[3].ends_with("Yes"));
    assert!(lines[4].ends_with("No"));

    Ok(())
}

#[test]
fn saved_file_follows_listing_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.csv");

    add(&file, "Ann", "555-1111", "ann@x.com", false);
    add(&file, "Bo", "555-2222", "bo@x.com", true);

    assert_eq!(
        std::fs::read_to_string(&file)?,
        "Bo,555-2222,bo@x.com,General,True\r\n\
         Ann,555-1111,ann@x.com,General,False\r\n"
    );
    Ok(())
}
