//! PDF document export
//!
//! Renders the filtered records as an A4 document: a title line at a fixed
//! top offset, then a striped table with Name, Month, Year, Amount (currency
//! formatted), and Category columns. Rows flow in the slice's existing order
//! and overflow onto new pages, each with the header band repeated. Built-in
//! Helvetica keeps the output self-contained.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};

use crate::error::{RegistroError, RegistroResult};
use crate::models::Registration;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;

const TITLE: &str = "Inspection Registrations";
const TITLE_Y: f32 = 281.0;
const TABLE_TOP: f32 = 275.0;
const BOTTOM_MARGIN: f32 = 18.0;
const ROW_HEIGHT: f32 = 8.0;

const BAND_LEFT: f32 = 12.0;
const BAND_RIGHT: f32 = 198.0;

const COL_NAME: f32 = 16.0;
const COL_MONTH: f32 = 80.0;
const COL_YEAR: f32 = 108.0;
const COL_AMOUNT: f32 = 128.0;
const COL_CATEGORY: f32 = 156.0;

/// Render records into PDF bytes
pub fn render_pdf(records: &[&Registration]) -> RegistroResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RegistroError::Export(format!("Failed to load font: {}", e)))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RegistroError::Export(format!("Failed to load font: {}", e)))?;

    let mut current = doc.get_page(page).get_layer(layer);

    // Title on the first page only
    set_black(&current);
    current.use_text(TITLE, 16.0, Mm(14.0), Mm(TITLE_Y), &font_bold);

    let mut y = TABLE_TOP;
    draw_header_band(&current, &font_bold, y);
    y -= ROW_HEIGHT;

    for (i, reg) in records.iter().enumerate() {
        if y < BOTTOM_MARGIN {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = TABLE_TOP;
            draw_header_band(&current, &font_bold, y);
            y -= ROW_HEIGHT;
        }

        // Striped rows: shade every other one
        if i % 2 == 1 {
            current.set_fill_color(Color::Rgb(Rgb::new(0.93, 0.95, 0.98, None)));
            current.add_rect(
                Rect::new(Mm(BAND_LEFT), Mm(y - ROW_HEIGHT), Mm(BAND_RIGHT), Mm(y))
                    .with_mode(PaintMode::Fill),
            );
        }

        set_black(&current);
        let baseline = y - ROW_HEIGHT + 2.5;
        current.use_text(truncate(&reg.name, 34), 10.0, Mm(COL_NAME), Mm(baseline), &font);
        current.use_text(reg.month.label(), 10.0, Mm(COL_MONTH), Mm(baseline), &font);
        current.use_text(reg.year.to_string(), 10.0, Mm(COL_YEAR), Mm(baseline), &font);
        current.use_text(
            format!("${}.{:02}", reg.amount.units(), reg.amount.cents_part()),
            10.0,
            Mm(COL_AMOUNT),
            Mm(baseline),
            &font,
        );
        current.use_text(
            truncate(&reg.category, 24),
            10.0,
            Mm(COL_CATEGORY),
            Mm(baseline),
            &font,
        );

        y -= ROW_HEIGHT;
    }

    doc.save_to_bytes()
        .map_err(|e| RegistroError::Export(format!("Failed to serialize PDF: {}", e)))
}

/// Draw the filled header band with white column labels
fn draw_header_band(layer: &PdfLayerReference, font_bold: &IndirectFontRef, y: f32) {
    // Header band fill: rgb(37, 99, 235)
    layer.set_fill_color(Color::Rgb(Rgb::new(37.0 / 255.0, 99.0 / 255.0, 235.0 / 255.0, None)));
    layer.add_rect(
        Rect::new(Mm(BAND_LEFT), Mm(y - ROW_HEIGHT), Mm(BAND_RIGHT), Mm(y))
            .with_mode(PaintMode::Fill),
    );

    layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    let baseline = y - ROW_HEIGHT + 2.5;
    layer.use_text("Name", 10.0, Mm(COL_NAME), Mm(baseline), font_bold);
    layer.use_text("Month", 10.0, Mm(COL_MONTH), Mm(baseline), font_bold);
    layer.use_text("Year", 10.0, Mm(COL_YEAR), Mm(baseline), font_bold);
    layer.use_text("Amount", 10.0, Mm(COL_AMOUNT), Mm(baseline), font_bold);
    layer.use_text("Category", 10.0, Mm(COL_CATEGORY), Mm(baseline), font_bold);
}

fn set_black(layer: &PdfLayerReference) {
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
}

/// Truncate a string for its column, appending an ellipsis when cut
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
