//! Registration filter engine
//!
//! Three independent criteria: a free-text term, a month, and a year. The text
//! criterion alone produces the *visible* subset, which drives the on-screen
//! table and both exports. Month and year narrow the visible subset further,
//! but only for computing the aggregate total; they never shrink the table.

use crate::models::{Month, Registration};

/// Year criterion state
///
/// Year selections arrive as free text and are compared by value. Text that
/// names no year (other than "all") is a constraint nothing satisfies, the
/// same as comparing records against a selector option that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearCriterion {
    /// No constraint
    #[default]
    All,
    /// Exact year match
    Exact(i32),
    /// Unparseable year text; matches no record
    Unmatched,
}

/// Options for filtering registrations
#[derive(Debug, Clone, Default)]
pub struct RegistrationFilter {
    /// Case-insensitive substring matched against name OR category
    pub term: Option<String>,
    /// Month criterion; `None` means "all"
    pub month: Option<Month>,
    /// Year criterion
    pub year: YearCriterion,
}

impl RegistrationFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text term
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Set the month criterion
    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Set the year criterion
    pub fn year(mut self, year: i32) -> Self {
        self.year = YearCriterion::Exact(year);
        self
    }

    /// Set the year criterion from free text, compared by value
    ///
    /// "all" (or blank) imposes no constraint; other non-numeric text is a
    /// criterion no record matches.
    pub fn year_text(mut self, year: &str) -> Self {
        let year = year.trim();
        self.year = if year.is_empty() || year.eq_ignore_ascii_case("all") {
            YearCriterion::All
        } else {
            year.parse()
                .map_or(YearCriterion::Unmatched, YearCriterion::Exact)
        };
        self
    }

    /// The visible subset: records passing the text criterion only
    pub fn visible<'a>(&self, records: &'a [Registration]) -> Vec<&'a Registration> {
        records
            .iter()
            .filter(|r| self.matches_text(r))
            .collect()
    }

    /// The total subset: the visible subset further narrowed by month/year
    ///
    /// Used only for the aggregate total, never for listing or export.
    pub fn total_subset<'a>(&self, records: &'a [Registration]) -> Vec<&'a Registration> {
        records
            .iter()
            .filter(|r| self.matches_text(r) && self.matches_period(r))
            .collect()
    }

    fn matches_text(&self, registration: &Registration) -> bool {
        match &self.term {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                registration.name.to_lowercase().contains(&term)
                    || registration.category.to_lowercase().contains(&term)
            }
        }
    }

    fn matches_period(&self, registration: &Registration) -> bool {
        let month_match = self.month.map_or(true, |m| registration.month == m);
        let year_match = match self.year {
            YearCriterion::All => true,
            YearCriterion::Exact(y) => registration.year == y,
            YearCriterion::Unmatched => false,
        };
        month_match && year_match
    }
}
