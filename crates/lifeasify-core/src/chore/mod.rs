//! Chore records and the status classification engine.
//!
//! A chore is either one-time or repeats every N days. The only persisted
//! completion state is the externally-set [`ChoreCompletion`] flag; the
//! displayed status (including "After Deadline") is always derived from a
//! snapshot of the record plus an explicit `today`, never stored.

pub mod status;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::projection::project_lifetime_minutes;

pub use status::{chore_status, partition_by_due, ChoreStatus};

/// Externally-set completion flag.
///
/// `AfterDeadline` is deliberately not representable here: overdue is a
/// derived display state, see [`chore_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChoreCompletion {
    Done,
    NotDone,
}

impl Default for ChoreCompletion {
    fn default() -> Self {
        ChoreCompletion::NotDone
    }
}

/// A task record, one-time or recurring, with an effort cost and due date.
///
/// Field names serialize in the camelCase shape the remote service uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    /// Unique identifier
    pub id: String,
    /// Display label
    pub name: String,
    /// Cost of one occurrence, in minutes
    pub time_effort_minutes: f64,
    /// One-time chores never repeat; the frequency field is ignored for them
    pub is_one_time: bool,
    /// Days between occurrences; meaningful only when not one-time
    #[serde(default)]
    pub repeat_frequency_days: Option<u32>,
    /// Calendar date the chore is next due (no time component)
    pub next_due: NaiveDate,
    /// Externally-set completion flag, independent of date
    #[serde(default)]
    pub status: ChoreCompletion,
    /// Optional free text
    #[serde(default)]
    pub note: Option<String>,
}

impl Chore {
    /// Lifetime projection for this chore, see
    /// [`project_lifetime_minutes`]. `None` when the record's frequency is
    /// unusable for a repeating chore.
    pub fn lifetime_minutes(&self, lifespan_years: f64) -> Option<f64> {
        project_lifetime_minutes(
            self.time_effort_minutes,
            self.is_one_time,
            self.repeat_frequency_days,
            lifespan_years,
        )
    }

    /// The repeat column text: "Doesn't repeat", "Repeats every single
    /// days" (frequency 1), or "Repeats every N days".
    pub fn repeat_description(&self) -> String {
        match self.repeat_frequency_days.filter(|_| !self.is_one_time) {
            Some(1) => "Repeats every single days".to_string(),
            Some(days) => format!("Repeats every {days} days"),
            None => "Doesn't repeat".to_string(),
        }
    }
}

/// Pre-validation user input for a new chore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreDraft {
    pub name: String,
    pub time_effort_minutes: Option<f64>,
    pub repeat_frequency_days: Option<u32>,
    pub next_due: Option<NaiveDate>,
    pub is_one_time: bool,
    pub note: Option<String>,
}

impl ChoreDraft {
    /// A draft submitted with no repeat frequency is a one-time chore,
    /// exactly as the create form treated it.
    pub fn normalize(mut self) -> Self {
        if self.repeat_frequency_days.is_none() {
            self.is_one_time = true;
        }
        self
    }

    /// Validate the draft and build a chore record.
    ///
    /// `today` supplies the default due date when the draft carries none.
    /// The resulting record satisfies the repeating-chore invariant:
    /// `repeat_frequency_days` is `Some(d >= 1)` iff the chore repeats.
    pub fn into_chore(self, today: NaiveDate) -> Result<Chore, ValidationError> {
        let draft = self.normalize();

        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let time_effort_minutes = draft
            .time_effort_minutes
            .ok_or(ValidationError::MissingTimeEffort)?;
        if time_effort_minutes < 0.0 {
            return Err(ValidationError::NegativeTimeEffort);
        }
        if !draft.is_one_time && draft.repeat_frequency_days.map_or(true, |d| d == 0) {
            return Err(ValidationError::MissingRepeatFrequency);
        }

        Ok(Chore {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            time_effort_minutes,
            is_one_time: draft.is_one_time,
            repeat_frequency_days: if draft.is_one_time {
                None
            } else {
                draft.repeat_frequency_days
            },
            next_due: draft.next_due.unwrap_or(today),
            status: ChoreCompletion::NotDone,
            note: draft.note.filter(|n| !n.trim().is_empty()),
        })
    }
}
