//! Terminal display formatting

pub mod registration;

pub use registration::{format_registration_table, format_summary};
