//! Derived views over registration subsets
//!
//! The aggregate total over a filtered subset, and the set of selectable
//! years, which is always derived from the full collection regardless of any
//! active filter.

use crate::models::{Money, Registration};

/// Sum the amounts of a filtered subset
///
/// An empty subset sums to exactly zero. Accumulation happens in cents, so the
/// result is exact to two decimal places.
pub fn total(records: &[&Registration]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// Distinct years across all records, sorted descending
pub fn available_years(records: &[Registration]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, RegistrationDraft, RegistrationId};

    fn registration(year: i32, cents: i64) -> Registration {
        RegistrationDraft::new("X", Month::Enero, year, Money::from_cents(cents), "Y")
            .into_registration(RegistrationId::new())
    }

    #[test]
    fn test_total_of_empty_subset_is_zero() {
        assert_eq!(total(&[]), Money::zero());
    }

    #[test]
    fn test_total_sums_cents_exactly() {
        let a = registration(2024, 1005); // 10.05
        let b = registration(2024, 995); // 9.95
        assert_eq!(total(&[&a, &b]), Money::from_cents(2000));
    }

    #[test]
    fn test_available_years_distinct_descending() {
        let records = vec![
            registration(2022, 100),
            registration(2024, 100),
            registration(2022, 100),
            registration(2023, 100),
        ];
        assert_eq!(available_years(&records), vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_available_years_empty() {
        assert!(available_years(&[]).is_empty());
    }
}
