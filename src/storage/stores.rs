use super::*;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{info, warn};
use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;

const FIELD_COUNT: usize = 5;

/// Contacts kept in a header-less CSV file, one contact per line.
pub struct CsvStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: &str) -> Result<Self, AppError> {
        let path = if path.is_empty() {
            DEFAULT_CONTACTS_PATH
        } else {
            path
        };
        let file_path = PathBuf::from(path);

        if file_path.is_dir() {
            return Err(AppError::Validation(format!(
                "Contact file {} is a directory",
                file_path.display()
            )));
        }

        Ok(Self {
            medium: "csv".to_string(),
            path: file_path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Sibling of the target so the final rename never crosses filesystems
    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn write_contacts(&self, temp_path: &Path, contacts: &[&Contact]) -> Result<(), AppError> {
        let file = File::create(temp_path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        // Keep the mode of the file being replaced
        if let Ok(metadata) = fs::metadata(&self.path) {
            fs::set_permissions(temp_path, metadata.permissions())?;
        }

        fs::rename(temp_path, &self.path)?;
        Ok(())
    }
}

/// Contacts decoded from CSV text, plus the lines that could not be used.
struct ParsedContacts {
    contacts: Vec<Contact>,
    skipped_lines: Vec<u64>,
}

fn parse_record(record: &StringRecord) -> Result<Contact, String> {
    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }

    record
        .deserialize::<Contact>(None)
        .map_err(|e| e.to_string())
}

/// 1-based line on which the record at byte offset `byte` starts.
///
/// After a `\r\n` terminator the reader marks the next record before it has
/// consumed the `\n`, so line-ending bytes at `byte` are stepped over first.
fn line_at(data: &[u8], byte: u64) -> u64 {
    let offset = usize::try_from(byte).map_or(data.len(), |b| b.min(data.len()));
    let start = data[offset..]
        .iter()
        .position(|b| !matches!(b, b'\r' | b'\n'))
        .map_or(data.len(), |skip| offset + skip);

    data[..start].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

fn read_contacts(data: &[u8]) -> Result<ParsedContacts, AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut parsed = ParsedContacts {
        contacts: Vec::new(),
        skipped_lines: Vec::new(),
    };

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = line_at(data, e.position().map_or(0, |pos| pos.byte()));
                warn!("Skipping unreadable contact on line {}: {}", line, e);
                parsed.skipped_lines.push(line);
                continue;
            }
        };

        match parse_record(&record) {
            Ok(contact) => parsed.contacts.push(contact),
            Err(reason) => {
                let line = line_at(data, record.position().map_or(0, |pos| pos.byte()));
                warn!("Skipping contact on line {}: {}", line, reason);
                parsed.skipped_lines.push(line);
            }
        }
    }

    Ok(parsed)
}

impl ContactStore for CsvStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "{} does not exist. Starting with an empty contact book.",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let parsed = read_contacts(&data)?;

        info!(
            "Loaded {} contacts from {}, skipped {} lines",
            parsed.contacts.len(),
            self.path.display(),
            parsed.skipped_lines.len()
        );
        Ok(Some(parsed.contacts))
    }

    fn save(&self, contacts: &[&Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let temp_path = self.temp_path();

        if let Err(e) = self.write_contacts(&temp_path, contacts) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        info!(
            "Saved {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
