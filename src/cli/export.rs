//! CLI commands for data export
//!
//! Exports the currently visible (text-filtered) subset; month and year never
//! narrow an export. An empty subset produces a notice and no file.

use std::path::PathBuf;

use crate::display::format_registration_table;
use crate::error::{RegistroError, RegistroResult};
use crate::export::{build_export, DiskSaver, ExportFormat, FileSaver, DEFAULT_BASENAME};
use crate::services::{RegistrationFilter, RegistrationService};

/// Handle `registro export`
pub fn handle_export_command(
    service: &RegistrationService,
    format: ExportFormat,
    search: Option<String>,
    output: Option<PathBuf>,
    show: bool,
) -> RegistroResult<()> {
    let mut filter = RegistrationFilter::new();
    if let Some(term) = search {
        filter = filter.term(term);
    }

    let visible = filter.visible(service.list());

    let payload = match build_export(&visible, DEFAULT_BASENAME, format) {
        Ok(payload) => payload,
        Err(RegistroError::EmptyExport) => {
            println!("No records to export.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let saver = DiskSaver::new(output.unwrap_or_else(|| PathBuf::from(".")));
    saver.save(&payload)?;

    println!(
        "Exported {} registration(s) to: {}",
        visible.len(),
        saver.target_path(&payload).display()
    );

    if show {
        println!();
        print!("{}", format_registration_table(&visible));
    }

    Ok(())
}
