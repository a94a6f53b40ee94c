//! `rolodex` - CLI and HTTP server for the contact book
//!
//! This binary runs the HTTP API server and provides direct command-line
//! access to the same record file.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use rolodex::cli::{
    AddCommand, Cli, Command, ConfigCommand, ListCommand, RemoveCommand, SearchCommand,
    ServeCommand, UpdateCommand,
};
use rolodex::{init_logging, Config, Contact, ContactService, ContactStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, serve_cmd).await,
        Command::Add(add_cmd) => handle_add(&config, &add_cmd).await,
        Command::List(list_cmd) => handle_list(&config, &list_cmd).await,
        Command::Search(search_cmd) => handle_search(&config, &search_cmd).await,
        Command::Update(update_cmd) => handle_update(&config, &update_cmd).await,
        Command::Remove(remove_cmd) => handle_remove(&config, &remove_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

/// Open the record store and build a service over it.
fn open_service(config: &Config) -> Result<ContactService> {
    let store = ContactStore::open(config.contacts_path())?;
    Ok(ContactService::new(store))
}

async fn handle_serve(mut config: Config, cmd: ServeCommand) -> Result<()> {
    if let Some(bind) = cmd.bind {
        config.server.bind_address = bind;
    }
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    config.validate()?;

    let service = open_service(&config)?;
    rolodex::http::serve(&config, service).await?;
    Ok(())
}

async fn handle_add(config: &Config, cmd: &AddCommand) -> Result<()> {
    let service = open_service(config)?;
    let contact = service.add(&cmd.name, &cmd.phone, &cmd.email).await?;
    println!("Added {}", contact.name);
    Ok(())
}

async fn handle_list(config: &Config, cmd: &ListCommand) -> Result<()> {
    let service = open_service(config)?;
    let contacts = service.list().await?;
    print_contacts(&contacts, cmd.json)?;
    Ok(())
}

async fn handle_search(config: &Config, cmd: &SearchCommand) -> Result<()> {
    let service = open_service(config)?;
    let contacts = service.search(&cmd.term).await?;
    print_contacts(&contacts, cmd.json)?;
    Ok(())
}

async fn handle_update(config: &Config, cmd: &UpdateCommand) -> Result<()> {
    let service = open_service(config)?;
    let contact = service.update(&cmd.name, &cmd.phone, &cmd.email).await?;
    println!("Updated {}", contact.name);
    Ok(())
}

async fn handle_remove(config: &Config, cmd: &RemoveCommand) -> Result<()> {
    let service = open_service(config)?;
    service.remove(&cmd.name).await?;
    println!("Removed {}", cmd.name);
    Ok(())
}

fn print_contacts(contacts: &[Contact], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    println!("{:<24} {:<16} EMAIL", "NAME", "PHONE");
    for contact in contacts {
        println!(
            "{:<24} {:<16} {}",
            contact.name, contact.phone, contact.email
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Record file:  {}", config.contacts_path().display());
                println!();
                println!("[Server]");
                println!("  Bind address: {}", config.server.bind_address);
                println!("  Port:         {}", config.server.port);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
