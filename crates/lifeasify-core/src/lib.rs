//! # Lifeasify Core Library
//!
//! This library provides the core business logic for Lifeasify, a personal
//! chore and contact tracker. It implements a CLI-first philosophy where
//! all operations are available via a standalone CLI binary, with any
//! desktop shell being a thin GUI layer over the same core library.
//!
//! ## Architecture
//!
//! - **Derivation engines**: pure functions over record snapshots — the
//!   lifetime time projection, chore status classification, and contact
//!   recency/staleness ranking. Every date-dependent function takes an
//!   explicit `today`; nothing in the core reads a clock.
//! - **State container**: an owned [`AppStore`] mutated through
//!   message-style entry points, each applied mutation yielding an event
//!   record.
//! - **Storage**: TOML-based configuration and a JSON snapshot of the
//!   record lists.
//!
//! ## Key Components
//!
//! - [`project_lifetime_minutes`] / [`format_duration`]: lifetime cost
//! - [`chore_status`]: due-date classification
//! - [`classify_staleness`] / [`format_recency`]: contact recency
//! - [`AppStore`]: client-side state container
//! - [`Config`]: application configuration management

pub mod chore;
pub mod contact;
pub mod error;
pub mod projection;
pub mod storage;
pub mod store;
pub mod style;

pub use chore::{
    chore_status, partition_by_due, Chore, ChoreCompletion, ChoreDraft, ChoreStatus,
};
pub use contact::{
    classify_staleness, days_since, format_recency, priority_order, rank_by_priority, search,
    Contact, ContactDraft, ContactStats, Staleness,
};
pub use error::{
    ConfigError, CoreError, Result, SnapshotError, StoreError, ValidationError,
};
pub use projection::{
    format_duration, project_lifetime_minutes, DAYS_PER_YEAR, DEFAULT_LIFESPAN_YEARS,
};
pub use storage::{data_dir, Config, ProjectionConfig, Snapshot};
pub use store::{AppStore, StoreEvent, StoreMessage};
pub use style::{ColorToken, StatusStyle};
