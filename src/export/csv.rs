//! Delimited (CSV) export
//!
//! Byte-exact rendition of the established export format: a UTF-8 byte-order
//! marker, the literal header `ID,Name,Month,Year,Amount,Category`, then one
//! comma-joined line per record in the slice's existing order, joined by `\n`
//! with no trailing newline. Fields are not quoted or escaped; an embedded
//! comma shifts columns downstream. Amounts print as plain numbers, not
//! currency.

use crate::models::Registration;

/// UTF-8 byte-order marker so spreadsheet tools detect the encoding
const BOM: &str = "\u{FEFF}";

/// Column header, literal field order
const HEADER: &str = "ID,Name,Month,Year,Amount,Category";

/// Serialize records to CSV bytes
pub fn to_csv_bytes(records: &[&Registration]) -> Vec<u8> {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.to_string());

    for reg in records {
        lines.push(format!(
            "{},{},{},{},{},{}",
            reg.id,
            reg.name,
            reg.month,
            reg.year,
            reg.amount.format_plain(),
            reg.category
        ));
    }

    format!("{}{}", BOM, lines.join("\n")).into_bytes()
}
