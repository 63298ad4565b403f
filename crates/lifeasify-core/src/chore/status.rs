//! Due-date status classification.
//!
//! Classification is a pure function of a record snapshot and an explicit
//! `today`; nothing here reads a clock or mutates the record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Chore, ChoreCompletion};
use crate::style::{ColorToken, StatusStyle};

/// Display status of a chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChoreStatus {
    /// Explicitly completed
    Done,
    /// Open, due today or later
    NotDone,
    /// Open, due date strictly in the past
    AfterDeadline,
}

impl ChoreStatus {
    /// Static label/color lookup for this status.
    pub fn style(&self) -> StatusStyle {
        match self {
            ChoreStatus::Done => StatusStyle {
                label: "Done",
                color: ColorToken::Green,
            },
            ChoreStatus::NotDone => StatusStyle {
                label: "Not Done",
                color: ColorToken::Blue,
            },
            ChoreStatus::AfterDeadline => StatusStyle {
                label: "After Deadline",
                color: ColorToken::Red,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.style().label
    }
}

/// Classify a chore for display.
///
/// The explicit completion flag always wins, regardless of date. Overdue
/// requires the due date to be strictly before `today`: a chore due
/// exactly today is still `NotDone`. Dates are compared at day
/// granularity, so a timezone boundary cannot produce a false overdue.
pub fn chore_status(chore: &Chore, today: NaiveDate) -> ChoreStatus {
    if chore.status == ChoreCompletion::Done {
        ChoreStatus::Done
    } else if chore.next_due < today {
        ChoreStatus::AfterDeadline
    } else {
        ChoreStatus::NotDone
    }
}

/// Split chores into today's list (due on or before `today`, overdue
/// included) and the upcoming list (due strictly later). Relative order is
/// preserved in both halves.
pub fn partition_by_due(chores: &[Chore], today: NaiveDate) -> (Vec<&Chore>, Vec<&Chore>) {
    chores.iter().partition(|chore| chore.next_due <= today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn chore(next_due: &str, status: ChoreCompletion) -> Chore {
        Chore {
            id: "c".to_string(),
            name: "Dishes".to_string(),
            time_effort_minutes: 15.0,
            is_one_time: false,
            repeat_frequency_days: Some(2),
            next_due: date(next_due),
            status,
            note: None,
        }
    }

    #[test]
    fn done_flag_wins_over_far_past_due_date() {
        let c = chore("2020-01-01", ChoreCompletion::Done);
        assert_eq!(chore_status(&c, date("2024-05-01")), ChoreStatus::Done);
    }

    #[test]
    fn past_due_is_after_deadline() {
        let c = chore("2024-04-30", ChoreCompletion::NotDone);
        assert_eq!(
            chore_status(&c, date("2024-05-01")),
            ChoreStatus::AfterDeadline
        );
    }

    #[test]
    fn due_today_is_not_overdue() {
        let c = chore("2024-05-01", ChoreCompletion::NotDone);
        assert_eq!(chore_status(&c, date("2024-05-01")), ChoreStatus::NotDone);
    }

    #[test]
    fn due_in_future_is_not_done() {
        let c = chore("2024-05-02", ChoreCompletion::NotDone);
        assert_eq!(chore_status(&c, date("2024-05-01")), ChoreStatus::NotDone);
    }

    #[test]
    fn styles_are_fixed() {
        assert_eq!(ChoreStatus::Done.label(), "Done");
        assert_eq!(ChoreStatus::Done.style().color, ColorToken::Green);
        assert_eq!(ChoreStatus::NotDone.label(), "Not Done");
        assert_eq!(ChoreStatus::NotDone.style().color, ColorToken::Blue);
        assert_eq!(ChoreStatus::AfterDeadline.label(), "After Deadline");
        assert_eq!(ChoreStatus::AfterDeadline.style().color, ColorToken::Red);
    }

    #[test]
    fn partition_keeps_overdue_in_todays_list() {
        let chores = vec![
            chore("2024-04-28", ChoreCompletion::NotDone),
            chore("2024-05-01", ChoreCompletion::NotDone),
            chore("2024-05-02", ChoreCompletion::NotDone),
            chore("2024-06-01", ChoreCompletion::NotDone),
        ];
        let (today, upcoming) = partition_by_due(&chores, date("2024-05-01"));
        assert_eq!(today.len(), 2);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(today[0].next_due, date("2024-04-28"));
        assert_eq!(today[1].next_due, date("2024-05-01"));
        assert_eq!(upcoming[0].next_due, date("2024-05-02"));
    }

    #[test]
    fn partition_of_empty_list() {
        let (today, upcoming) = partition_by_due(&[], date("2024-05-01"));
        assert!(today.is_empty());
        assert!(upcoming.is_empty());
    }
}
