//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Override the configured bind address
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Contact name (the unique key)
    pub name: String,

    /// Phone number
    pub phone: String,

    /// Email address
    pub email: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// The search term (matches names, case-insensitive)
    pub term: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Name of the contact to update
    pub name: String,

    /// New phone number (empty clears the field)
    #[arg(long, default_value = "")]
    pub phone: String,

    /// New email address (empty clears the field)
    #[arg(long, default_value = "")]
    pub email: String,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Name of the contact to remove
    pub name: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_command_debug() {
        let cmd = ServeCommand {
            bind: Some("0.0.0.0".to_string()),
            port: Some(8080),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("bind"));
        assert!(debug_str.contains("8080"));
    }

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            name: "Alice".to_string(),
            phone: "123".to_string(),
            email: "a@x.com".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Alice"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
