//! Integration tests for the contact workflow.
//!
//! These tests verify the friends-list path: draft validation, priority
//! ranking, the confirm-contact update, search, and dashboard stats.

use chrono::NaiveDate;
use lifeasify_core::{
    format_recency, AppStore, ColorToken, Contact, ContactDraft, ContactStats, Staleness,
    StoreMessage,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn contact(id: &str, name: &str, info: &str, last: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        contact_info: info.to_string(),
        last_contact_date: date(last),
    }
}

#[test]
fn test_ranked_list_with_recency_and_bands() {
    let today = date("2024-05-01");
    let mut store = AppStore::new();
    store
        .apply(StoreMessage::SetContacts {
            contacts: vec![
                contact("1", "Sarah Johnson", "sarah.johnson@email.com", "2024-04-16"),
                contact("2", "Mike Chen", "+1 555 123 4567", "2024-03-17"),
                contact("3", "Alex Rodriguez", "+1 532 987 6543", "2023-10-14"),
            ],
        })
        .unwrap();

    let ranked = store.ranked_contacts();
    let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alex Rodriguez", "Mike Chen", "Sarah Johnson"]);

    // 200 days: stale/red, "6 months ago".
    assert_eq!(ranked[0].staleness(today), Staleness::Stale);
    assert_eq!(ranked[0].staleness(today).style().color, ColorToken::Red);
    assert_eq!(
        format_recency(ranked[0].days_since_contact(today)),
        "6 months ago"
    );

    // 45 days: aging/yellow, "1 month ago".
    assert_eq!(ranked[1].staleness(today), Staleness::Aging);
    assert_eq!(ranked[1].staleness(today).style().color, ColorToken::Yellow);
    assert_eq!(
        format_recency(ranked[1].days_since_contact(today)),
        "1 month ago"
    );

    // 15 days: recent/green, "15 days ago".
    assert_eq!(ranked[2].staleness(today), Staleness::Recent);
    assert_eq!(
        format_recency(ranked[2].days_since_contact(today)),
        "15 days ago"
    );
}

#[test]
fn test_add_and_confirm_contact_workflow() {
    let today = date("2024-05-01");
    let mut store = AppStore::new();

    store
        .apply(StoreMessage::AddContact {
            contact: contact("old", "Emma Wilson", "emma.wilson@outlook.com", "2024-01-01"),
        })
        .unwrap();

    // Adding a friend counts as having just connected.
    let new = ContactDraft {
        name: "Lisa Park".to_string(),
        contact_info: "+1 543 456 7890".to_string(),
    }
    .into_contact(today)
    .unwrap();
    assert_eq!(new.last_contact_date, today);
    store.apply(StoreMessage::AddContact { contact: new }).unwrap();

    let before: Vec<&str> = store
        .ranked_contacts()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(before, ["Emma Wilson", "Lisa Park"]);

    // "Did you really connect with this person today? Yes, I did."
    store
        .apply(StoreMessage::MarkContacted {
            id: "old".to_string(),
            date: today,
        })
        .unwrap();

    let emma = store.find_contact("old").unwrap();
    assert_eq!(format_recency(emma.days_since_contact(today)), "Today");
    assert_eq!(emma.staleness(today), Staleness::Recent);
}

#[test]
fn test_search_and_stats_dashboard() {
    let today = date("2024-05-01");
    let mut store = AppStore::new();
    store
        .apply(StoreMessage::SetContacts {
            contacts: vec![
                contact("1", "Sarah Johnson", "sarah.johnson@email.com", "2024-04-28"),
                contact("2", "Robert Smith", "robert.smith@tech.io", "2024-01-01"),
                contact("3", "Michael Taylor", "michael.taylor@startup.com", "2023-07-01"),
            ],
        })
        .unwrap();

    let hits = lifeasify_core::search(store.contacts(), "TECH.IO");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Robert Smith");

    let stats = ContactStats::compute(store.contacts(), today);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.recent, 1);
    assert_eq!(stats.stale, 1);
    assert_eq!(stats.percentage_recent, 33);
}

#[test]
fn test_future_dated_contact_stays_deterministic() {
    let today = date("2024-05-01");
    let ahead = contact("1", "Time Traveler", "x@y.z", "2024-06-01");
    assert_eq!(ahead.days_since_contact(today), 0);
    assert_eq!(ahead.staleness(today), Staleness::Recent);
    assert_eq!(format_recency(ahead.days_since_contact(today)), "Today");
}
