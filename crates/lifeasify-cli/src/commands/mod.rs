pub mod chore;
pub mod common;
pub mod config;
pub mod contact;
