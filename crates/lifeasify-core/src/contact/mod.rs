//! Contact records and the recency engine.
//!
//! Contacts carry a last-contact date used to rank whom to reach out to
//! next. Like the chore engine, everything date-dependent takes an
//! explicit `today`.

pub mod recency;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use recency::{
    classify_staleness, days_since, format_recency, priority_order, rank_by_priority, Staleness,
};

/// Maximum accepted length for a contact name.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum accepted length for the contact-info channel.
pub const MAX_CONTACT_INFO_LEN: usize = 100;

/// A friend/contact with a free-text channel and a last-contact date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier
    pub id: String,
    /// Display label
    pub name: String,
    /// Free-text channel (email/phone)
    pub contact_info: String,
    /// Calendar date of the most recent interaction
    pub last_contact_date: NaiveDate,
}

impl Contact {
    /// Record that contact happened on `today`.
    pub fn mark_contacted(&mut self, today: NaiveDate) {
        self.last_contact_date = today;
    }

    /// Days elapsed since last contact, clamped to zero for future dates.
    pub fn days_since_contact(&self, today: NaiveDate) -> i64 {
        days_since(self.last_contact_date, today)
    }

    /// Staleness band for this contact as of `today`.
    pub fn staleness(&self, today: NaiveDate) -> Staleness {
        classify_staleness(self.days_since_contact(today))
    }

    /// Case-insensitive substring match against name or contact info.
    /// `term` must already be lowercased.
    fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.contact_info.to_lowercase().contains(term)
    }
}

/// Filter contacts by a free-text query on name or contact info. A blank
/// query matches everything.
pub fn search<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return contacts.iter().collect();
    }
    contacts.iter().filter(|c| c.matches(&term)).collect()
}

/// Aggregate dashboard numbers over a contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    pub total: usize,
    /// Contacted within the last 30 days
    pub recent: usize,
    /// Not contacted for over six months
    pub stale: usize,
    /// `recent / total`, rounded to whole percent; 0 for an empty list
    pub percentage_recent: u32,
}

impl ContactStats {
    pub fn compute(contacts: &[Contact], today: NaiveDate) -> Self {
        let total = contacts.len();
        let recent = contacts
            .iter()
            .filter(|c| c.staleness(today) == Staleness::Recent)
            .count();
        let stale = contacts
            .iter()
            .filter(|c| c.staleness(today) == Staleness::Stale)
            .count();
        let percentage_recent = if total > 0 {
            (recent as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        ContactStats {
            total,
            recent,
            stale,
            percentage_recent,
        }
    }
}

/// Pre-validation user input for a new or edited contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub contact_info: String,
}

impl ContactDraft {
    /// Validate the draft, returning the trimmed `(name, contact_info)`
    /// pair. Both fields are required, non-blank, and length-capped.
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let contact_info = self.contact_info.trim();
        if contact_info.is_empty() {
            return Err(ValidationError::MissingContactInfo);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
        }
        if contact_info.chars().count() > MAX_CONTACT_INFO_LEN {
            return Err(ValidationError::ContactInfoTooLong {
                max: MAX_CONTACT_INFO_LEN,
            });
        }
        Ok((name.to_string(), contact_info.to_string()))
    }

    /// Validate and build a contact record whose last-contact date is
    /// `today` (adding someone counts as having just connected).
    pub fn into_contact(self, today: NaiveDate) -> Result<Contact, ValidationError> {
        let (name, contact_info) = self.validate()?;
        Ok(Contact {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            contact_info,
            last_contact_date: today,
        })
    }
}
