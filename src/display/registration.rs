//! Registration display formatting
//!
//! Provides utilities for formatting registrations for terminal display.

use crate::models::{Money, Registration};

/// Format a single registration for display (table row)
pub fn format_registration_row(reg: &Registration) -> String {
    format!(
        "{:36} {:22} {:10} {:4} {:>12}  {}",
        reg.id.to_string(),
        truncate(&reg.name, 22),
        reg.month.label(),
        reg.year,
        reg.amount.to_string(),
        truncate(&reg.category, 22)
    )
}

/// Format a list of registrations as a table
pub fn format_registration_table(registrations: &[&Registration]) -> String {
    if registrations.is_empty() {
        return "No registrations found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:36} {:22} {:10} {:4} {:>12}  {}\n",
        "ID", "Name", "Month", "Year", "Amount", "Category"
    ));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for reg in registrations {
        output.push_str(&format_registration_row(reg));
        output.push('\n');
    }

    output
}

/// Format the filtered total and the visible/total counts
pub fn format_summary(total: Money, shown: usize, all: usize) -> String {
    format!(
        "Total for selection: {}\nShowing {} of {} registration(s)\n",
        total, shown, all
    )
}

/// Truncate a string to a maximum length, appending an ellipsis when cut
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, RegistrationDraft, RegistrationId};

    fn registration(name: &str) -> Registration {
        RegistrationDraft::new(name, Month::Enero, 2024, Money::from_cents(1050), "Tasas")
            .into_registration(RegistrationId::from("1"))
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_registration_table(&[]), "No registrations found.\n");
    }

    #[test]
    fn test_table_contains_fields() {
        let reg = registration("Acme Corp");
        let table = format_registration_table(&[&reg]);

        assert!(table.contains("Acme Corp"));
        assert!(table.contains("Enero"));
        assert!(table.contains("$10.50"));
        assert!(table.contains("Tasas"));
    }

    #[test]
    fn test_summary_counts() {
        let summary = format_summary(Money::from_cents(10_000), 2, 5);
        assert!(summary.contains("$100.00"));
        assert!(summary.contains("Showing 2 of 5"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long registration name", 10), "a very ...");
    }
}
