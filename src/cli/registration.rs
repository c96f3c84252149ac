//! CLI commands for registration management
//!
//! Handlers for adding, listing, and deleting registrations. Month and year
//! criteria narrow only the printed total; the table always shows every
//! text-matching record.

use std::io::{self, BufRead, Write};

use chrono::{Datelike, Local};

use crate::display::{format_registration_table, format_summary};
use crate::error::{RegistroError, RegistroResult};
use crate::models::{Money, Month, RegistrationDraft, RegistrationId};
use crate::services::{available_years, total, ConfirmationPort, RegistrationFilter,
    RegistrationService};

/// Confirmation port reading a y/n answer from stdin
pub struct StdinConfirmation;

impl ConfirmationPort for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Confirmation port that always confirms (for `--yes`)
pub struct AlwaysConfirm;

impl ConfirmationPort for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Handle `registro add`
pub fn handle_add_command(
    service: &mut RegistrationService,
    name: String,
    amount: String,
    category: String,
    month: Option<String>,
    year: Option<i32>,
) -> RegistroResult<()> {
    let amount = Money::parse(&amount)
        .map_err(|e| RegistroError::Validation(e.to_string()))?;

    // Month and year default to today, like the entry form did
    let now = Local::now();
    let month = match month {
        Some(m) => m
            .parse::<Month>()
            .map_err(|e| RegistroError::Validation(e.to_string()))?,
        None => Month::from_number(now.month())
            .ok_or_else(|| RegistroError::Validation("Could not resolve current month".into()))?,
    };
    let year = year.unwrap_or_else(|| now.year());

    let draft = RegistrationDraft::new(name, month, year, amount, category);
    let registration = service.create(draft)?;

    println!("Added registration {}", registration.id);
    println!(
        "  {} - {} {} - {} ({})",
        registration.name, registration.month, registration.year, registration.amount,
        registration.category
    );

    Ok(())
}

/// Handle `registro list`
pub fn handle_list_command(
    service: &RegistrationService,
    search: Option<String>,
    month: Option<String>,
    year: Option<String>,
) -> RegistroResult<()> {
    let mut filter = RegistrationFilter::new();
    if let Some(term) = search {
        filter = filter.term(term);
    }
    if let Some(m) = month {
        if !m.eq_ignore_ascii_case("all") {
            let month = m
                .parse::<Month>()
                .map_err(|e| RegistroError::Validation(e.to_string()))?;
            filter = filter.month(month);
        }
    }
    if let Some(y) = year {
        filter = filter.year_text(&y);
    }

    let records = service.list();
    let visible = filter.visible(records);
    let for_total = filter.total_subset(records);

    print!("{}", format_registration_table(&visible));
    println!();
    print!(
        "{}",
        format_summary(total(&for_total), visible.len(), records.len())
    );

    Ok(())
}

/// Handle `registro delete`
pub fn handle_delete_command(
    service: &mut RegistrationService,
    id: String,
    yes: bool,
) -> RegistroResult<()> {
    let id = RegistrationId::from(id);

    let deleted = if yes {
        service.delete_confirmed(&id, &AlwaysConfirm)?
    } else {
        service.delete_confirmed(&id, &StdinConfirmation)?
    };

    if deleted {
        println!("Registration {} deleted.", id);
    } else {
        println!("No registration deleted.");
    }

    Ok(())
}

/// Handle `registro years`
pub fn handle_years_command(service: &RegistrationService) -> RegistroResult<()> {
    let years = available_years(service.list());
    if years.is_empty() {
        println!("No registrations yet.");
        return Ok(());
    }
    for year in years {
        println!("{}", year);
    }
    Ok(())
}
