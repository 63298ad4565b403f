//! Explicit application state container.
//!
//! The original client shared one ambient global store across every view;
//! here callers own an [`AppStore`] value and hand it to whatever needs it.
//! All mutation goes through [`AppStore::apply`] with a [`StoreMessage`],
//! and every applied mutation yields a serializable [`StoreEvent`] record
//! the caller can log or relay. The engines never touch the store; reads
//! hand out plain slices and derived views take `today` explicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chore::{partition_by_due, Chore, ChoreCompletion};
use crate::contact::Contact;
use crate::error::StoreError;

/// Mutation entry points, one per user action the original store exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreMessage {
    AddChore { chore: Chore },
    RemoveChore { id: String },
    /// Replace the chore with `id` wholesale
    EditChore { id: String, chore: Chore },
    /// Flip the completion flag and append the snapshot to history
    CompleteChore { id: String },
    SetChores { chores: Vec<Chore> },
    AddContact { contact: Contact },
    /// Overwrite name/contact info; values must be pre-validated
    UpdateContact {
        id: String,
        name: String,
        contact_info: String,
    },
    /// Record that contact happened on `date`
    MarkContacted { id: String, date: NaiveDate },
    RemoveContact { id: String },
    SetContacts { contacts: Vec<Contact> },
}

/// Record of one applied mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreEvent {
    ChoreAdded { id: String },
    ChoreRemoved { id: String },
    ChoreEdited { id: String },
    ChoreCompleted { id: String },
    ChoresReplaced { count: usize },
    ContactAdded { id: String },
    ContactUpdated { id: String },
    ContactMarked { id: String, date: NaiveDate },
    ContactRemoved { id: String },
    ContactsReplaced { count: usize },
}

/// Owned snapshot of all client-side records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppStore {
    chores: Vec<Chore>,
    chore_history: Vec<Chore>,
    contacts: Vec<Contact>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted record lists.
    pub fn from_parts(
        chores: Vec<Chore>,
        chore_history: Vec<Chore>,
        contacts: Vec<Contact>,
    ) -> Self {
        AppStore {
            chores,
            chore_history,
            contacts,
        }
    }

    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    pub fn chore_history(&self) -> &[Chore] {
        &self.chore_history
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find_chore(&self, id: &str) -> Option<&Chore> {
        self.chores.iter().find(|c| c.id == id)
    }

    pub fn find_contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Chores due on or before `today`, overdue included, in stored order.
    pub fn due_today(&self, today: NaiveDate) -> Vec<&Chore> {
        partition_by_due(&self.chores, today).0
    }

    /// Chores due strictly after `today`, in stored order.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Chore> {
        partition_by_due(&self.chores, today).1
    }

    /// Contacts in outreach-priority order, oldest last-contact first;
    /// equal dates keep stored order.
    pub fn ranked_contacts(&self) -> Vec<&Contact> {
        let mut ranked: Vec<&Contact> = self.contacts.iter().collect();
        ranked.sort_by_key(|c| c.last_contact_date);
        ranked
    }

    /// Apply one mutation. Unknown ids are an error, never a silent no-op.
    pub fn apply(&mut self, message: StoreMessage) -> Result<StoreEvent, StoreError> {
        match message {
            StoreMessage::AddChore { chore } => {
                let id = chore.id.clone();
                self.chores.push(chore);
                Ok(StoreEvent::ChoreAdded { id })
            }
            StoreMessage::RemoveChore { id } => {
                let index = self.chore_index(&id)?;
                self.chores.remove(index);
                Ok(StoreEvent::ChoreRemoved { id })
            }
            StoreMessage::EditChore { id, chore } => {
                let index = self.chore_index(&id)?;
                self.chores[index] = chore;
                Ok(StoreEvent::ChoreEdited { id })
            }
            StoreMessage::CompleteChore { id } => {
                let index = self.chore_index(&id)?;
                self.chores[index].status = ChoreCompletion::Done;
                self.chore_history.push(self.chores[index].clone());
                Ok(StoreEvent::ChoreCompleted { id })
            }
            StoreMessage::SetChores { chores } => {
                let count = chores.len();
                self.chores = chores;
                Ok(StoreEvent::ChoresReplaced { count })
            }
            StoreMessage::AddContact { contact } => {
                let id = contact.id.clone();
                self.contacts.push(contact);
                Ok(StoreEvent::ContactAdded { id })
            }
            StoreMessage::UpdateContact {
                id,
                name,
                contact_info,
            } => {
                let index = self.contact_index(&id)?;
                self.contacts[index].name = name;
                self.contacts[index].contact_info = contact_info;
                Ok(StoreEvent::ContactUpdated { id })
            }
            StoreMessage::MarkContacted { id, date } => {
                let index = self.contact_index(&id)?;
                self.contacts[index].mark_contacted(date);
                Ok(StoreEvent::ContactMarked { id, date })
            }
            StoreMessage::RemoveContact { id } => {
                let index = self.contact_index(&id)?;
                self.contacts.remove(index);
                Ok(StoreEvent::ContactRemoved { id })
            }
            StoreMessage::SetContacts { contacts } => {
                let count = contacts.len();
                self.contacts = contacts;
                Ok(StoreEvent::ContactsReplaced { count })
            }
        }
    }

    fn chore_index(&self, id: &str) -> Result<usize, StoreError> {
        self.chores
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::ChoreNotFound(id.to_string()))
    }

    fn contact_index(&self, id: &str) -> Result<usize, StoreError> {
        self.contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::ContactNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chore::ChoreStatus;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn chore(id: &str, next_due: &str) -> Chore {
        Chore {
            id: id.to_string(),
            name: id.to_string(),
            time_effort_minutes: 10.0,
            is_one_time: false,
            repeat_frequency_days: Some(2),
            next_due: date(next_due),
            status: ChoreCompletion::NotDone,
            note: None,
        }
    }

    fn contact(id: &str, last: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: id.to_string(),
            contact_info: format!("{id}@example.com"),
            last_contact_date: date(last),
        }
    }

    #[test]
    fn add_then_remove_chore() {
        let mut store = AppStore::new();
        let event = store
            .apply(StoreMessage::AddChore {
                chore: chore("c1", "2024-05-01"),
            })
            .unwrap();
        assert_eq!(event, StoreEvent::ChoreAdded { id: "c1".into() });
        assert_eq!(store.chores().len(), 1);

        store
            .apply(StoreMessage::RemoveChore { id: "c1".into() })
            .unwrap();
        assert!(store.chores().is_empty());
    }

    #[test]
    fn complete_chore_flips_flag_and_records_history() {
        let mut store = AppStore::new();
        store
            .apply(StoreMessage::AddChore {
                chore: chore("c1", "2024-05-01"),
            })
            .unwrap();

        let event = store
            .apply(StoreMessage::CompleteChore { id: "c1".into() })
            .unwrap();
        assert_eq!(event, StoreEvent::ChoreCompleted { id: "c1".into() });

        let done = store.find_chore("c1").unwrap();
        assert_eq!(done.status, ChoreCompletion::Done);
        assert_eq!(store.chore_history().len(), 1);
        assert_eq!(store.chore_history()[0].id, "c1");
        // Completed chores classify as Done even past the due date.
        assert_eq!(
            crate::chore::chore_status(done, date("2024-06-01")),
            ChoreStatus::Done
        );
    }

    #[test]
    fn edit_chore_replaces_record() {
        let mut store = AppStore::new();
        store
            .apply(StoreMessage::AddChore {
                chore: chore("c1", "2024-05-01"),
            })
            .unwrap();

        let mut edited = chore("c1", "2024-05-08");
        edited.name = "Deep clean".to_string();
        store
            .apply(StoreMessage::EditChore {
                id: "c1".into(),
                chore: edited,
            })
            .unwrap();

        let stored = store.find_chore("c1").unwrap();
        assert_eq!(stored.name, "Deep clean");
        assert_eq!(stored.next_due, date("2024-05-08"));
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut store = AppStore::new();
        assert_eq!(
            store
                .apply(StoreMessage::CompleteChore { id: "nope".into() })
                .unwrap_err(),
            StoreError::ChoreNotFound("nope".into())
        );
        assert_eq!(
            store
                .apply(StoreMessage::RemoveContact { id: "nope".into() })
                .unwrap_err(),
            StoreError::ContactNotFound("nope".into())
        );
    }

    #[test]
    fn due_today_and_upcoming_views() {
        let mut store = AppStore::new();
        for (id, due) in [
            ("overdue", "2024-04-20"),
            ("today", "2024-05-01"),
            ("later", "2024-05-10"),
        ] {
            store
                .apply(StoreMessage::AddChore {
                    chore: chore(id, due),
                })
                .unwrap();
        }

        let today = date("2024-05-01");
        let due_ids: Vec<&str> = store.due_today(today).iter().map(|c| c.id.as_str()).collect();
        let upcoming_ids: Vec<&str> = store.upcoming(today).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(due_ids, ["overdue", "today"]);
        assert_eq!(upcoming_ids, ["later"]);
    }

    #[test]
    fn mark_contacted_resets_priority() {
        let mut store = AppStore::new();
        store
            .apply(StoreMessage::AddContact {
                contact: contact("old", "2024-01-01"),
            })
            .unwrap();
        store
            .apply(StoreMessage::AddContact {
                contact: contact("new", "2024-04-01"),
            })
            .unwrap();

        let before: Vec<&str> = store.ranked_contacts().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(before, ["old", "new"]);

        store
            .apply(StoreMessage::MarkContacted {
                id: "old".into(),
                date: date("2024-05-01"),
            })
            .unwrap();

        let after: Vec<&str> = store.ranked_contacts().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(after, ["new", "old"]);
    }

    #[test]
    fn update_contact_overwrites_fields() {
        let mut store = AppStore::new();
        store
            .apply(StoreMessage::AddContact {
                contact: contact("c1", "2024-04-01"),
            })
            .unwrap();
        store
            .apply(StoreMessage::UpdateContact {
                id: "c1".into(),
                name: "Sarah J.".into(),
                contact_info: "sarah@new.example".into(),
            })
            .unwrap();

        let updated = store.find_contact("c1").unwrap();
        assert_eq!(updated.name, "Sarah J.");
        assert_eq!(updated.contact_info, "sarah@new.example");
        // Updating details never touches the last-contact date.
        assert_eq!(updated.last_contact_date, date("2024-04-01"));
    }

    #[test]
    fn set_messages_replace_wholesale() {
        let mut store = AppStore::new();
        store
            .apply(StoreMessage::SetChores {
                chores: vec![chore("a", "2024-05-01"), chore("b", "2024-05-02")],
            })
            .unwrap();
        assert_eq!(store.chores().len(), 2);

        let event = store
            .apply(StoreMessage::SetContacts {
                contacts: vec![contact("x", "2024-04-01")],
            })
            .unwrap();
        assert_eq!(event, StoreEvent::ContactsReplaced { count: 1 });
        assert_eq!(store.contacts().len(), 1);
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = StoreEvent::ChoreCompleted { id: "c1".into() };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ChoreCompleted\""));
    }
}
