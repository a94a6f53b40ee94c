//! Core contact record type.
//!
//! This module defines the single entity the service manages, along with
//! the case-insensitive name matching the rest of the crate builds on.

use serde::{Deserialize, Serialize};

/// A single entry in the contact book.
///
/// One type serves both the record file (CSV row, fields in declaration
/// order) and the HTTP surface (JSON body). The name is the unique key and
/// is compared case-insensitively everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique key for the record, compared case-insensitively.
    pub name: String,

    /// Phone number; free-form, no format validation.
    pub phone: String,

    /// Email address; free-form, no format validation.
    pub email: String,
}

impl Contact {
    /// Create a contact from the given fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Check whether this contact's name equals `name`, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Check whether this contact's name contains `term`, ignoring case.
    ///
    /// An empty term matches every contact.
    #[must_use]
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}
