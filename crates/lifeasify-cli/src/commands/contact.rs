//! Friends & connections commands for CLI.
//!
//! The list is sorted by priority: people you haven't connected with the
//! longest appear first.

use chrono::NaiveDate;
use clap::Subcommand;
use lifeasify_core::{format_recency, Contact, ContactDraft, ContactStats, StoreMessage};

use super::common;

#[derive(Subcommand)]
pub enum ContactAction {
    /// Add a new friend
    Add {
        /// Friend's name
        name: String,
        /// Email or phone number
        contact_info: String,
        /// Evaluation date override (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List contacts by outreach priority
    List {
        /// Evaluation date override (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Record that you connected with a friend today
    Touch {
        /// Contact ID
        id: String,
        /// Evaluation date override (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Update a contact's name and contact info
    Update {
        /// Contact ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New email or phone number
        #[arg(long)]
        contact_info: Option<String>,
    },
    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
    },
    /// Search contacts by name or contact info
    Search {
        /// Query text
        query: String,
        /// Evaluation date override (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Contact statistics
    Stats {
        /// Evaluation date override (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: ContactAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, path) = common::load_store()?;

    match action {
        ContactAction::Add {
            name,
            contact_info,
            today,
        } => {
            let today = common::resolve_today(today);
            let contact = ContactDraft { name, contact_info }.into_contact(today)?;
            println!("Contact added: {}", contact.id);
            println!("{}", serde_json::to_string_pretty(&contact)?);
            store.apply(StoreMessage::AddContact { contact })?;
            common::save_store(&store, &path)?;
        }
        ContactAction::List { today } => {
            let today = common::resolve_today(today);
            let ranked = store.ranked_contacts();
            if ranked.is_empty() {
                println!("No friends yet!");
            } else {
                println!("{}", header());
                for contact in ranked {
                    println!("{}", contact_row(contact, today));
                }
                println!();
                println!(
                    "Sorted by priority: People you haven't connected with the longest appear first"
                );
            }
        }
        ContactAction::Touch { id, today } => {
            let date = common::resolve_today(today);
            let event = store.apply(StoreMessage::MarkContacted { id, date })?;
            common::save_store(&store, &path)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ContactAction::Update {
            id,
            name,
            contact_info,
        } => {
            let existing = store
                .find_contact(&id)
                .ok_or(lifeasify_core::StoreError::ContactNotFound(id.clone()))?;
            let draft = ContactDraft {
                name: name.unwrap_or_else(|| existing.name.clone()),
                contact_info: contact_info.unwrap_or_else(|| existing.contact_info.clone()),
            };
            let (name, contact_info) = draft.validate()?;
            let event = store.apply(StoreMessage::UpdateContact {
                id,
                name,
                contact_info,
            })?;
            common::save_store(&store, &path)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ContactAction::Delete { id } => {
            let event = store.apply(StoreMessage::RemoveContact { id })?;
            common::save_store(&store, &path)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ContactAction::Search { query, today } => {
            let today = common::resolve_today(today);
            let hits = lifeasify_core::search(store.contacts(), &query);
            if hits.is_empty() {
                println!("No contacts match '{query}'");
            } else {
                println!("{}", header());
                for contact in hits {
                    println!("{}", contact_row(contact, today));
                }
            }
        }
        ContactAction::Stats { today } => {
            let today = common::resolve_today(today);
            let stats = ContactStats::compute(store.contacts(), today);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}

fn header() -> String {
    format!(
        "{:<36}  {:<24}  {:<28}  {:<16}  {}",
        "ID", "Name", "Contact Info", "Last Contact", "Status"
    )
}

fn contact_row(contact: &Contact, today: NaiveDate) -> String {
    format!(
        "{:<36}  {:<24}  {:<28}  {:<16}  {}",
        contact.id,
        contact.name,
        contact.contact_info,
        format_recency(contact.days_since_contact(today)),
        contact.staleness(today).label()
    )
}
