//! Core data models for Registro CLI

pub mod ids;
pub mod money;
pub mod month;
pub mod registration;

pub use ids::RegistrationId;
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use registration::{DraftValidationError, Registration, RegistrationDraft};
