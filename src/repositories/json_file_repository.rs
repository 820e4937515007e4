use crate::domain::{Birthday, Name, Phone};
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::BookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Version written to every storage file.
pub const STORAGE_VERSION: u32 = 1;

/// On-disk layout of the address book.
#[derive(Debug, Serialize, Deserialize)]
struct BookDocument {
    version: u32,
    #[serde(default)]
    contacts: Vec<ContactEntry>,
}

/// On-disk layout of one record.
///
/// Field types validate on deserialization, so a hand-edited file with a
/// bad phone or date fails to load instead of being accepted.
#[derive(Debug, Serialize, Deserialize)]
struct ContactEntry {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl From<&Record> for ContactEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().clone(),
            phones: record.phones().to_vec(),
            birthday: record.birthday().cloned(),
        }
    }
}

impl From<ContactEntry> for Record {
    fn from(entry: ContactEntry) -> Self {
        Record::from_parts(entry.name, entry.phones, entry.birthday)
    }
}

/// Address book repository backed by a single JSON file.
///
/// A missing file loads as an empty book. Saving overwrites the file and
/// creates missing parent directories.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(content: &str) -> StorageResult<AddressBook> {
        let document: BookDocument = serde_json::from_str(content)?;
        if document.version != STORAGE_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: document.version,
                expected: STORAGE_VERSION,
            });
        }

        let mut book = AddressBook::new();
        for entry in document.contacts {
            if book.find(entry.name.as_str()).is_some() {
                return Err(StorageError::DuplicateContact(entry.name.into_inner()));
            }
            book.add_record(Record::from(entry));
        }
        Ok(book)
    }

    fn encode(book: &AddressBook) -> StorageResult<String> {
        let document = BookDocument {
            version: STORAGE_VERSION,
            contacts: book.iter().map(ContactEntry::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No address book file, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book = Self::decode(&content)?;
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = Self::encode(book)?;
        debug!(bytes = content.len(), "Encoded address book");
        fs::write(&self.path, content)?;
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
