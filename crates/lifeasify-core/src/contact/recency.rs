//! Staleness classification, recency phrases, and outreach ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Contact;
use crate::style::{ColorToken, StatusStyle};

/// A contact is Recent up to this many days since last contact.
pub const RECENT_WITHIN_DAYS: i64 = 30;

/// Beyond this many days a contact is Stale.
pub const STALE_AFTER_DAYS: i64 = 180;

/// The recency phrase counts 30-day months.
pub const DAYS_PER_MONTH: i64 = 30;

/// Whole days elapsed between the last contact and `today`.
///
/// Clamped to zero when the stored date lies in the future, so a violated
/// input invariant still yields deterministic output instead of a negative
/// "days ago".
pub fn days_since(last_contact_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - last_contact_date).num_days().max(0)
}

/// Staleness of a contact relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Staleness {
    /// Contacted within the last 30 days
    Recent,
    /// Between one and six months
    Aging,
    /// More than six months
    Stale,
}

impl Staleness {
    /// Static label/color-band lookup for this classification.
    pub fn style(&self) -> StatusStyle {
        match self {
            Staleness::Recent => StatusStyle {
                label: "Recent",
                color: ColorToken::Green,
            },
            Staleness::Aging => StatusStyle {
                label: "Aging",
                color: ColorToken::Yellow,
            },
            Staleness::Stale => StatusStyle {
                label: "Stale",
                color: ColorToken::Red,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.style().label
    }
}

/// Classify how stale a relationship is from the elapsed day count.
pub fn classify_staleness(days_since_last_contact: i64) -> Staleness {
    if days_since_last_contact <= RECENT_WITHIN_DAYS {
        Staleness::Recent
    } else if days_since_last_contact <= STALE_AFTER_DAYS {
        Staleness::Aging
    } else {
        Staleness::Stale
    }
}

/// Human "time since" phrase for the elapsed day count.
///
/// Month counts are floored 30-day months, singular exactly when the
/// computed count is 1. Day counts at or below zero render as "Today",
/// consistent with the clamping in [`days_since`].
pub fn format_recency(days_since_last_contact: i64) -> String {
    if days_since_last_contact <= 0 {
        "Today".to_string()
    } else if days_since_last_contact == 1 {
        "1 day ago".to_string()
    } else if days_since_last_contact <= RECENT_WITHIN_DAYS {
        format!("{days_since_last_contact} days ago")
    } else {
        let months = days_since_last_contact / DAYS_PER_MONTH;
        if months == 1 {
            "1 month ago".to_string()
        } else {
            format!("{months} months ago")
        }
    }
}

/// Outreach priority: the longer since last contact, the earlier the
/// contact ranks.
pub fn priority_order(a: &Contact, b: &Contact) -> Ordering {
    a.last_contact_date.cmp(&b.last_contact_date)
}

/// Sort contacts by outreach priority, oldest last-contact first. The sort
/// is stable, so contacts sharing a date keep their original relative
/// order.
pub fn rank_by_priority(contacts: &mut [Contact]) {
    contacts.sort_by(priority_order);
}
