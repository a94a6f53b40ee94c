//! Business rules for the contact book.
//!
//! This module enforces the invariants of the record set (required fields
//! on create, case-insensitive name uniqueness, lookup semantics) and
//! orchestrates the record store calls beneath them.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::contact::Contact;
use crate::error::{Error, Result};
use crate::storage::ContactStore;

/// Contact operations with the book's invariants enforced.
///
/// All store access goes through one process-wide lock, so concurrent
/// read-modify-write cycles (update, remove) cannot interleave. Cloning is
/// cheap; clones share the same store.
#[derive(Debug, Clone)]
pub struct ContactService {
    store: Arc<Mutex<ContactStore>>,
}

impl ContactService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: ContactStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Add a new contact.
    ///
    /// All three fields are trimmed and must be non-empty, and the name must
    /// not collide (ignoring case) with an existing contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFields`] if a field is empty after trimming,
    /// [`Error::DuplicateContact`] on a name collision, or a storage error.
    pub async fn add(&self, name: &str, phone: &str, email: &str) -> Result<Contact> {
        let name = name.trim();
        let phone = phone.trim();
        let email = email.trim();

        if name.is_empty() || phone.is_empty() || email.is_empty() {
            return Err(Error::MissingFields);
        }

        let store = self.store.lock().await;
        if store.read_all()?.iter().any(|c| c.is_named(name)) {
            debug!(name, "rejected duplicate contact");
            return Err(Error::duplicate(name));
        }

        let contact = Contact::new(name, phone, email);
        store.append(&contact)?;
        info!(name, "contact added");
        Ok(contact)
    }

    /// List every contact, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying store fails.
    pub async fn list(&self) -> Result<Vec<Contact>> {
        self.store.lock().await.read_all()
    }

    /// Contacts whose name contains `term`, ignoring case.
    ///
    /// An empty term matches every contact; no match yields an empty vec.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying store fails.
    pub async fn search(&self, term: &str) -> Result<Vec<Contact>> {
        let contacts = self.store.lock().await.read_all()?;
        Ok(contacts
            .into_iter()
            .filter(|c| c.name_contains(term))
            .collect())
    }

    /// Replace the phone and email of the first contact matching `name`.
    ///
    /// The two fields are trimmed; empty values are accepted and overwrite
    /// the stored ones. The name and the record's position are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContactNotFound`] if no name matches, or a storage
    /// error.
    pub async fn update(&self, name: &str, phone: &str, email: &str) -> Result<Contact> {
        let phone = phone.trim();
        let email = email.trim();

        let store = self.store.lock().await;
        let mut contacts = store.read_all()?;

        let Some(contact) = contacts.iter_mut().find(|c| c.is_named(name)) else {
            debug!(name, "update target not found");
            return Err(Error::not_found(name));
        };
        contact.phone = phone.to_string();
        contact.email = email.to_string();
        let updated = contact.clone();

        store.overwrite_all(&contacts)?;
        info!(name, "contact updated");
        Ok(updated)
    }

    /// Remove every contact matching `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContactNotFound`] if no name matches, or a storage
    /// error.
    pub async fn remove(&self, name: &str) -> Result<()> {
        let store = self.store.lock().await;
        let contacts = store.read_all()?;

        let remaining: Vec<Contact> = contacts
            .iter()
            .filter(|c| !c.is_named(name))
            .cloned()
            .collect();
        if remaining.len() == contacts.len() {
            debug!(name, "remove target not found");
            return Err(Error::not_found(name));
        }

        store.overwrite_all(&remaining)?;
        info!(name, "contact removed");
        Ok(())
    }
}
