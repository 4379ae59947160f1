//! Command-line frontend.
//!
//! A thin renderer over the store: collects raw field strings, runs them
//! through the validator, invokes the store, and prints results or
//! notifications. All decision logic lives in the library; this module is
//! the single catch point for `StorageError`.

use anyhow::bail;
use chrono::Utc;
use clap::{Parser, Subcommand};
use contact_agenda::{validate, ContactDraft, ContactId, ContactStore};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(author, version, about = "Local contact book")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all contacts
    List,
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number (digits only)
        #[arg(short, long)]
        phone: String,
    },
    /// Update an existing contact
    Update {
        /// Contact id
        id: String,

        /// Contact name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number (digits only)
        #[arg(short, long)]
        phone: String,
    },
    /// Delete a contact
    Delete {
        /// Contact id
        id: String,
    },
    /// Export all contacts to a JSON file
    Export {
        /// Output path (default: contactos_<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import contacts from a JSON file, replacing the collection
    Import {
        /// Input path
        file: PathBuf,
    },
}

/// Execute a parsed command against the store.
pub fn run(cli: Cli, store: &ContactStore) -> anyhow::Result<()> {
    match cli.command {
        Commands::List => list(store),
        Commands::Add { name, email, phone } => add(store, name, email, phone),
        Commands::Update {
            id,
            name,
            email,
            phone,
        } => update(store, id, name, email, phone),
        Commands::Delete { id } => delete(store, id),
        Commands::Export { output } => export(store, output),
        Commands::Import { file } => import(store, file),
    }
}

fn list(store: &ContactStore) -> anyhow::Result<()> {
    let contacts = store.list_all()?;
    if contacts.is_empty() {
        println!("No contacts yet.");
        return Ok(());
    }

    println!(
        "{:<36}  {:<24}  {:<28}  {}",
        "ID", "NAME", "EMAIL", "PHONE"
    );
    for contact in &contacts {
        println!(
            "{:<36}  {:<24}  {:<28}  {}",
            contact.id.as_str(),
            contact.name.as_str(),
            contact.email.as_str(),
            contact.phone.as_str()
        );
    }
    println!("\n{} contact(s)", contacts.len());
    Ok(())
}

fn add(store: &ContactStore, name: String, email: String, phone: String) -> anyhow::Result<()> {
    let fields = match validate(&ContactDraft::new(name, email, phone)) {
        Ok(fields) => fields,
        Err(errors) => return report_field_errors(errors),
    };

    let contact = store.add(fields)?;
    println!("Added contact {} ({})", contact.name, contact.id);
    Ok(())
}

fn update(
    store: &ContactStore,
    id: String,
    name: String,
    email: String,
    phone: String,
) -> anyhow::Result<()> {
    let id = ContactId::new(id)?;
    let fields = match validate(&ContactDraft::new(name, email, phone)) {
        Ok(fields) => fields,
        Err(errors) => return report_field_errors(errors),
    };

    match store.update(&id, fields)? {
        Some(contact) => {
            println!("Updated contact {} ({})", contact.name, contact.id);
            Ok(())
        }
        None => bail!("Contact not found: {}", id),
    }
}

fn delete(store: &ContactStore, id: String) -> anyhow::Result<()> {
    let id = ContactId::new(id)?;
    if store.delete(&id)? {
        println!("Deleted contact {}", id);
        Ok(())
    } else {
        bail!("Contact not found: {}", id)
    }
}

fn export(store: &ContactStore, output: Option<PathBuf>) -> anyhow::Result<()> {
    let json = store.export_all()?;
    // Date-only portion of the current timestamp, the agenda's traditional
    // export name.
    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("contactos_{}.json", Utc::now().format("%Y-%m-%d")))
    });
    fs::write(&path, &json)?;
    println!("Exported contacts to {}", path.display());
    Ok(())
}

fn import(store: &ContactStore, file: PathBuf) -> anyhow::Result<()> {
    let payload = fs::read_to_string(&file)?;
    store.import_all(&payload)?;
    println!("Imported contacts from {}", file.display());
    Ok(())
}

fn report_field_errors(errors: contact_agenda::FieldErrors) -> anyhow::Result<()> {
    eprintln!("Invalid contact fields:");
    for (field, message) in errors.messages() {
        eprintln!("  {}: {}", field, message);
    }
    bail!("contact fields failed validation")
}
