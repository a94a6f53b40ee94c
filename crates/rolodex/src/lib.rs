//! `rolodex` - A file-backed contact book with an HTTP API
//!
//! This library provides the core functionality for storing contact records
//! in a flat comma-delimited file and serving them over a small JSON API:
//! create, list, search, update, and delete, with case-insensitive name
//! uniqueness.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod http;
pub mod logging;
pub mod service;
pub mod storage;

pub use config::Config;
pub use contact::Contact;
pub use error::{Error, Result};
pub use http::{build_router, AppState};
pub use logging::init_logging;
pub use service::ContactService;
pub use storage::ContactStore;
