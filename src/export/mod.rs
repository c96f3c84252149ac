//! Export functionality
//!
//! Exporting is one pure transformation from a filtered record slice to an
//! `ExportPayload` (bytes + suggested filename + MIME hint), parameterized by
//! format. Both formats share the same empty-set guard and the same snapshot:
//! whatever subset the caller hands in, in its existing order. Handing the
//! payload to a destination goes through the `FileSaver` port.

pub mod csv;
pub mod pdf;

use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{RegistroError, RegistroResult};
use crate::models::Registration;

/// Default basename for exported files
pub const DEFAULT_BASENAME: &str = "registros-inspeccion";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-delimited text (Excel-compatible, BOM-prefixed UTF-8)
    Csv,
    /// Paginated PDF document
    Pdf,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    /// MIME-type hint for this format
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8",
            Self::Pdf => "application/pdf",
        }
    }
}

/// A finished export: bytes plus the filename and MIME hint for saving
#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime: &'static str,
}

/// Serialize a filtered record slice into an export payload
///
/// Fails with `EmptyExport` on zero records; no payload is produced.
pub fn build_export(
    records: &[&Registration],
    basename: &str,
    format: ExportFormat,
) -> RegistroResult<ExportPayload> {
    if records.is_empty() {
        return Err(RegistroError::EmptyExport);
    }

    let bytes = match format {
        ExportFormat::Csv => csv::to_csv_bytes(records),
        ExportFormat::Pdf => pdf::render_pdf(records)?,
    };

    Ok(ExportPayload {
        bytes,
        filename: format!("{}.{}", basename, format.extension()),
        mime: format.mime(),
    })
}

/// Port for handing a finished export to its destination
pub trait FileSaver {
    /// Persist the payload; the core consumes no return value beyond success
    fn save(&self, payload: &ExportPayload) -> RegistroResult<()>;
}

/// Saves export payloads as files under a target directory
pub struct DiskSaver {
    dir: PathBuf,
}

impl DiskSaver {
    /// Create a saver writing into the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Full path the payload would be written to
    pub fn target_path(&self, payload: &ExportPayload) -> PathBuf {
        self.dir.join(&payload.filename)
    }
}

impl FileSaver for DiskSaver {
    fn save(&self, payload: &ExportPayload) -> RegistroResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            RegistroError::Export(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.target_path(payload);
        std::fs::write(&path, &payload.bytes).map_err(|e| {
            RegistroError::Export(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month, RegistrationDraft, RegistrationId};
    use tempfile::TempDir;

    fn sample() -> Registration {
        RegistrationDraft::new("X", Month::Marzo, 2024, Money::from_cents(1050), "Y")
            .into_registration(RegistrationId::from("1"))
    }

    #[test]
    fn test_empty_export_fails_for_both_formats() {
        let err = build_export(&[], DEFAULT_BASENAME, ExportFormat::Csv).unwrap_err();
        assert!(err.is_empty_export());

        let err = build_export(&[], DEFAULT_BASENAME, ExportFormat::Pdf).unwrap_err();
        assert!(err.is_empty_export());
    }

    #[test]
    fn test_csv_payload_metadata() {
        let reg = sample();
        let payload = build_export(&[&reg], DEFAULT_BASENAME, ExportFormat::Csv).unwrap();

        assert_eq!(payload.filename, "registros-inspeccion.csv");
        assert_eq!(payload.mime, "text/csv;charset=utf-8");
        assert!(!payload.bytes.is_empty());
    }

    #[test]
    fn test_pdf_payload_metadata() {
        let reg = sample();
        let payload = build_export(&[&reg], DEFAULT_BASENAME, ExportFormat::Pdf).unwrap();

        assert_eq!(payload.filename, "registros-inspeccion.pdf");
        assert_eq!(payload.mime, "application/pdf");
        assert!(payload.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_disk_saver_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let saver = DiskSaver::new(temp_dir.path().join("out"));

        let reg = sample();
        let payload = build_export(&[&reg], DEFAULT_BASENAME, ExportFormat::Csv).unwrap();
        saver.save(&payload).unwrap();

        let written = std::fs::read(saver.target_path(&payload)).unwrap();
        assert_eq!(written, payload.bytes);
    }
}
