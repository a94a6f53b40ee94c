//! Command-line interface for rolodex.
//!
//! This module provides the CLI structure for the `rolodex` binary: the
//! HTTP server plus direct contact-book commands against the same store.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, ListCommand, RemoveCommand, SearchCommand, ServeCommand,
    UpdateCommand,
};

/// rolodex - A file-backed contact book
///
/// Stores contacts in a flat comma-delimited record file and exposes them
/// over a small JSON HTTP API, with CLI commands for direct access.
#[derive(Debug, Parser)]
#[command(name = "rolodex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(ServeCommand),

    /// Add a contact
    Add(AddCommand),

    /// List all contacts
    List(ListCommand),

    /// Search contacts by name
    Search(SearchCommand),

    /// Update a contact's phone and email
    Update(UpdateCommand),

    /// Remove a contact
    Remove(RemoveCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "rolodex");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::List(ListCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        for (verbose, expected) in [
            (0, crate::logging::Verbosity::Normal),
            (1, crate::logging::Verbosity::Verbose),
            (2, crate::logging::Verbosity::Trace),
            (5, crate::logging::Verbosity::Trace),
        ] {
            let cli = Cli {
                config: None,
                verbose,
                quiet: false,
                command: Command::List(ListCommand { json: false }),
            };
            assert_eq!(cli.verbosity(), expected);
        }
    }

    #[test]
    fn test_parse_serve() {
        let args = vec!["rolodex", "serve"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Serve(_)));
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let args = vec!["rolodex", "serve", "--bind", "0.0.0.0", "--port", "8080"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Serve(cmd) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(cmd.bind, Some("0.0.0.0".to_string()));
        assert_eq!(cmd.port, Some(8080));
    }

    #[test]
    fn test_parse_add() {
        let args = vec!["rolodex", "add", "Alice", "123", "a@x.com"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Add(cmd) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(cmd.name, "Alice");
        assert_eq!(cmd.phone, "123");
        assert_eq!(cmd.email, "a@x.com");
    }

    #[test]
    fn test_parse_add_requires_all_fields() {
        let args = vec!["rolodex", "add", "Alice", "123"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_list_json() {
        let args = vec!["rolodex", "list", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::List(ListCommand { json: true })));
    }

    #[test]
    fn test_parse_search() {
        let args = vec!["rolodex", "search", "smith"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Search(cmd) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.term, "smith");
    }

    #[test]
    fn test_parse_update_defaults_to_empty_fields() {
        let args = vec!["rolodex", "update", "Alice"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Update(cmd) = cli.command else {
            panic!("expected update command");
        };
        assert_eq!(cmd.name, "Alice");
        assert_eq!(cmd.phone, "");
        assert_eq!(cmd.email, "");
    }

    #[test]
    fn test_parse_remove() {
        let args = vec!["rolodex", "remove", "Alice"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Remove(_)));
    }

    #[test]
    fn test_parse_config_path() {
        let args = vec!["rolodex", "config", "path"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }

    #[test]
    fn test_parse_with_config_file() {
        let args = vec!["rolodex", "-c", "/custom/config.toml", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let args = vec!["rolodex", "-v", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
    }
}
