//! Chore management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use lifeasify_core::{chore_status, Chore, ChoreDraft, Config, StoreMessage};

use super::common;

#[derive(Subcommand)]
pub enum ChoreAction {
    /// Create a new chore
    Add {
        /// Chore name
        name: String,
        /// Time effort per occurrence, in minutes
        #[arg(long)]
        effort: f64,
        /// Repeat frequency in days (omit for a one-time chore)
        #[arg(long)]
        every: Option<u32>,
        /// One-time chore
        #[arg(long)]
        one_time: bool,
        /// Due date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Free-text note
        #[arg(long)]
        note: Option<String>,
        /// Evaluation date override (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List today's and upcoming chores
    List {
        /// Evaluation date override (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Mark a chore complete
    Complete {
        /// Chore ID
        id: String,
    },
    /// Delete a chore
    Delete {
        /// Chore ID
        id: String,
    },
    /// Completed-chore history
    History,
}

pub fn run(action: ChoreAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (mut store, path) = common::load_store()?;

    match action {
        ChoreAction::Add {
            name,
            effort,
            every,
            one_time,
            due,
            note,
            today,
        } => {
            let today = common::resolve_today(today);
            let chore = ChoreDraft {
                name,
                time_effort_minutes: Some(effort),
                repeat_frequency_days: every,
                next_due: due,
                is_one_time: one_time,
                note,
            }
            .into_chore(today)?;

            let id = chore.id.clone();
            let rendered = serde_json::to_string_pretty(&chore)?;
            let projection = chore.lifetime_minutes(config.projection.lifespan_years);

            store.apply(StoreMessage::AddChore { chore })?;
            common::save_store(&store, &path)?;

            println!("Chore created: {id}");
            println!("{rendered}");
            if let Some(total) = projection {
                println!(
                    "* It will take {} along your life.",
                    lifeasify_core::format_duration(total, false)
                );
            }
        }
        ChoreAction::List { today } => {
            let today = common::resolve_today(today);
            let lifespan_years = config.projection.lifespan_years;

            println!("Today's Tasks");
            let due_now = store.due_today(today);
            if due_now.is_empty() {
                println!("No chores for today! Enjoy your day!");
            } else {
                println!("{}", header("It'll take in a life"));
                for chore in due_now {
                    println!("{}", chore_row(chore, today, lifespan_years, false));
                }
            }

            let upcoming = store.upcoming(today);
            if !upcoming.is_empty() {
                println!();
                println!("Upcoming Tasks");
                println!("{}", header("When"));
                for chore in upcoming {
                    println!("{}", chore_row(chore, today, lifespan_years, true));
                }
            }
        }
        ChoreAction::Complete { id } => {
            let event = store.apply(StoreMessage::CompleteChore { id })?;
            common::save_store(&store, &path)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ChoreAction::Delete { id } => {
            let event = store.apply(StoreMessage::RemoveChore { id })?;
            common::save_store(&store, &path)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ChoreAction::History => {
            if store.chore_history().is_empty() {
                println!("No completed chores yet.");
            } else {
                println!("{}", serde_json::to_string_pretty(store.chore_history())?);
            }
        }
    }
    Ok(())
}

fn header(fourth_column: &str) -> String {
    format!(
        "{:<36}  {:<24}  {:<14}  {:<28}  {:<22}  {}",
        "ID", "Task", "It takes", "Repeats every", fourth_column, "Status"
    )
}

fn chore_row(chore: &Chore, today: NaiveDate, lifespan_years: f64, upcoming: bool) -> String {
    let effort = format!("{} minutes", chore.time_effort_minutes);
    // A malformed record just loses its projection column, nothing else.
    let life = chore
        .lifetime_minutes(lifespan_years)
        .map(|total| lifeasify_core::format_duration(total, upcoming))
        .unwrap_or_default();
    format!(
        "{:<36}  {:<24}  {:<14}  {:<28}  {:<22}  {}",
        chore.id,
        chore.name,
        effort,
        chore.repeat_description(),
        life,
        chore_status(chore, today).label()
    )
}
