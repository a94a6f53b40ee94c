//! Record store for the contact book.
//!
//! Contacts persist as a flat comma-delimited text file with a fixed
//! `name,phone,email` header row. There is no index and no cache: reads
//! parse the whole file, and every mutation besides append rewrites it.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::contact::Contact;
use crate::error::{Error, Result};

/// Column header of the record file; field order is fixed.
const HEADER: [&str; 3] = ["name", "phone", "email"];

/// File-backed store for the ordered contact sequence.
///
/// The store is only a path plus parsing rules; it holds no open handles,
/// so every operation sees the file as it is on disk.
#[derive(Debug)]
pub struct ContactStore {
    /// Path to the record file.
    path: PathBuf,
}

impl ContactStore {
    /// Open a store at the given path.
    ///
    /// Creates parent directories as needed and, if the record file does not
    /// exist, writes a file containing only the header row. Idempotent; safe
    /// to call on every process start.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or the file cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        if !path.exists() {
            debug!("creating record file at {}", path.display());
            let file = File::create(&path).map_err(|source| Error::StoreOpen {
                path: path.clone(),
                source,
            })?;
            let mut writer = csv::Writer::from_writer(file);
            writer.write_record(HEADER)?;
            writer.flush()?;
        }

        info!("record store ready at {}", path.display());
        Ok(Self { path })
    }

    /// Get the path to the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every contact, in file order.
    ///
    /// A file holding only the header row yields an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, the header row is missing
    /// or mismatched, or a record fails to parse.
    pub fn read_all(&self) -> Result<Vec<Contact>> {
        let file = File::open(&self.path).map_err(|source| Error::StoreOpen {
            path: self.path.clone(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let headers = reader.headers()?.clone();
        self.check_header(&headers)?;

        let mut contacts = Vec::new();
        for row in reader.deserialize() {
            contacts.push(row?);
        }
        Ok(contacts)
    }

    /// Append a single contact to the end of the file.
    ///
    /// Existing rows are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, contact: &Contact) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| Error::StoreOpen {
                path: self.path.clone(),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(contact)?;
        writer.flush()?;

        debug!("appended record for {}", contact.name);
        Ok(())
    }

    /// Rewrite the entire file: header plus every row in the given order.
    ///
    /// The medium has no in-place row deletion, so update and delete
    /// regenerate the whole file through this call. The new contents are
    /// written to a temporary sibling and renamed into place, so an
    /// interrupted rewrite cannot leave the record file truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or renamed.
    pub fn overwrite_all(&self, contacts: &[Contact]) -> Result<()> {
        let tmp = self.path.with_extension("csv.tmp");

        {
            let file = File::create(&tmp).map_err(|source| Error::StoreOpen {
                path: tmp.clone(),
                source,
            })?;
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);
            writer.write_record(HEADER)?;
            for contact in contacts {
                writer.serialize(contact)?;
            }
            writer.flush()?;
        }

        std::fs::rename(&tmp, &self.path)?;
        debug!("rewrote record file with {} records", contacts.len());
        Ok(())
    }

    /// Verify the header row matches the fixed column layout.
    fn check_header(&self, headers: &csv::StringRecord) -> Result<()> {
        if headers.len() != HEADER.len() || headers.iter().zip(HEADER).any(|(got, want)| got != want)
        {
            return Err(Error::MalformedHeader {
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}
