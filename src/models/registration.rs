//! Registration model
//!
//! A registration records one fee-collection event: who paid, for which
//! calendar period, how much, and under which classification. Records are
//! created once via a validated draft and never mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RegistrationId;
use super::money::Money;
use super::month::Month;

/// One fee-registration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// Unique identifier, assigned at creation, never reused
    pub id: RegistrationId,

    /// Payer/subject name
    pub name: String,

    /// Calendar month of the registration period
    pub month: Month,

    /// Calendar year of the registration period
    pub year: i32,

    /// Registered amount (strictly positive)
    pub amount: Money,

    /// Free-text classification label
    pub category: String,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.month, self.year, self.amount
        )
    }
}

/// A candidate registration, structurally complete except for the id
///
/// Drafts carry raw user input; `validate` enforces the record invariants
/// before an id is assigned.
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub name: String,
    pub month: Month,
    pub year: i32,
    pub amount: Money,
    pub category: String,
}

impl RegistrationDraft {
    /// Create a new draft
    pub fn new(
        name: impl Into<String>,
        month: Month,
        year: i32,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            month,
            year,
            amount,
            category: category.into(),
        }
    }

    /// Validate the draft against the record invariants
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::MissingField("name"));
        }
        if self.category.trim().is_empty() {
            return Err(DraftValidationError::MissingField("category"));
        }
        if self.year <= 0 {
            return Err(DraftValidationError::InvalidYear(self.year));
        }
        if !self.amount.is_positive() {
            return Err(DraftValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }

    /// Finalize the draft into a record with the given id
    ///
    /// Free-text fields are stored trimmed.
    pub fn into_registration(self, id: RegistrationId) -> Registration {
        Registration {
            id,
            name: self.name.trim().to_string(),
            month: self.month,
            year: self.year,
            amount: self.amount,
            category: self.category.trim().to_string(),
        }
    }
}

/// Validation errors for registration drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    MissingField(&'static str),
    InvalidYear(i32),
    NonPositiveAmount(Money),
}

impl fmt::Display for DraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Field '{}' is required", field),
            Self::InvalidYear(year) => write!(f, "Year must be positive, got {}", year),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
        }
    }
}

impl std::error::Error for DraftValidationError {}
