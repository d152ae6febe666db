//! Invoice rendering for completed bookings.
//!
//! The generator is stateless: it takes a [`BookingRecord`] plus the issue
//! date and produces a single fixed-layout A4 page. Financial lines are
//! recomputed from the package price and traveler count; the record's stored
//! total is never displayed.

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use thiserror::Error;

use crate::{format_money, BookingRecord};

pub const ISSUER_NAME: &str = "Travel Adventure Co.";
pub const ISSUER_ADDRESS: &str = "123 Travel Street, Adventure City";
pub const ISSUER_CONTACT: &str = "Contact: (123) 123-4567 | travel@example.com";

/// A4 portrait.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;

const HEADER_FONT_SIZE: f32 = 18.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const TOTAL_FONT_SIZE: f32 = 12.0;
const NORMAL_FONT_SIZE: f32 = 10.0;
const FOOTER_FONT_SIZE: f32 = 8.0;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("failed to prepare PDF font: {0}")]
    Font(String),
    #[error("failed to write PDF: {0}")]
    Write(String),
}

/// Invoice number derived from the last 8 characters of the booking id,
/// with a literal `N/A` when the id is missing.
pub fn invoice_number(booking_id: Option<&str>) -> String {
    format!("INV-{}", id_suffix(booking_id))
}

/// Download file name carrying the same derived suffix as the number.
pub fn invoice_filename(booking_id: Option<&str>) -> String {
    format!("Invoice-{}.pdf", id_suffix(booking_id))
}

fn id_suffix(booking_id: Option<&str>) -> String {
    match booking_id {
        Some(id) if !id.is_empty() => {
            let chars: Vec<char> = id.chars().collect();
            let start = chars.len().saturating_sub(8);
            chars[start..].iter().collect()
        }
        _ => "N/A".to_string(),
    }
}

/// The only trusted total: unit price times traveler count, recomputed at
/// render time.
pub fn recomputed_total(booking: &BookingRecord) -> f64 {
    booking.package.price * booking.travelers as f64
}

/// Render the booking as a one-page PDF and return the document bytes.
pub fn generate_invoice_pdf(
    booking: &BookingRecord,
    issued_on: &str,
) -> Result<Vec<u8>, InvoiceError> {
    let (doc, page, layer) = PdfDocument::new(
        "Booking Invoice",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| InvoiceError::Font(e.to_string()))?;

    // Issuer header block, centered.
    text_centered(&layer, ISSUER_NAME, HEADER_FONT_SIZE, 267.0, &font);
    text_centered(&layer, ISSUER_ADDRESS, NORMAL_FONT_SIZE, 260.0, &font);
    text_centered(&layer, ISSUER_CONTACT, NORMAL_FONT_SIZE, 253.0, &font);

    // Title band separated by a rule.
    draw_rule(&layer, MARGIN_MM, 242.0, PAGE_WIDTH_MM - MARGIN_MM);
    text_centered(&layer, "BOOKING INVOICE", TITLE_FONT_SIZE, 232.0, &font);

    // Invoice metadata.
    let number = invoice_number(booking.id.as_deref());
    text_left(
        &layer,
        &format!("Invoice Number: {}", number),
        NORMAL_FONT_SIZE,
        217.0,
        &font,
    );
    text_left(
        &layer,
        &format!("Date: {}", issued_on),
        NORMAL_FONT_SIZE,
        210.0,
        &font,
    );

    // Customer block.
    text_left(&layer, "Customer Details:", NORMAL_FONT_SIZE, 197.0, &font);
    text_left(
        &layer,
        &format!("Name: {}", booking.customer_name),
        NORMAL_FONT_SIZE,
        190.0,
        &font,
    );
    text_left(
        &layer,
        &format!("Email: {}", booking.customer_email),
        NORMAL_FONT_SIZE,
        183.0,
        &font,
    );

    // Booking block.
    text_left(&layer, "Booking Details:", NORMAL_FONT_SIZE, 170.0, &font);
    text_left(
        &layer,
        &format!("Package: {}", booking.package.title),
        NORMAL_FONT_SIZE,
        163.0,
        &font,
    );
    text_left(
        &layer,
        &format!("Travelers: {}", booking.travelers),
        NORMAL_FONT_SIZE,
        156.0,
        &font,
    );
    text_left(
        &layer,
        &format!("Travel Date: {}", booking.travel_date),
        NORMAL_FONT_SIZE,
        149.0,
        &font,
    );

    // Financial block. Subtotal is recomputed, never read from the record.
    let subtotal = recomputed_total(booking);
    text_left(&layer, "Financial Summary:", NORMAL_FONT_SIZE, 136.0, &font);
    text_left(
        &layer,
        &format!("Package Price: {}", format_money(booking.package.price)),
        NORMAL_FONT_SIZE,
        129.0,
        &font,
    );
    text_left(
        &layer,
        &format!("Total Travelers: {}", booking.travelers),
        NORMAL_FONT_SIZE,
        122.0,
        &font,
    );
    text_left(
        &layer,
        &format!("Subtotal: {}", format_money(subtotal)),
        NORMAL_FONT_SIZE,
        115.0,
        &font,
    );
    text_left(
        &layer,
        &format!("Total Amount: {}", format_money(subtotal)),
        TOTAL_FONT_SIZE,
        97.0,
        &font,
    );

    // Footer.
    text_centered(
        &layer,
        "Thank you for choosing Travel Adventure Co.",
        FOOTER_FONT_SIZE,
        17.0,
        &font,
    );

    doc.save_to_bytes()
        .map_err(|e| InvoiceError::Write(e.to_string()))
}

fn text_left(layer: &PdfLayerReference, text: &str, size: f32, y: f32, font: &IndirectFontRef) {
    layer.use_text(text, size, Mm(MARGIN_MM), Mm(y), font);
}

fn text_centered(
    layer: &PdfLayerReference,
    text: &str,
    size: f32,
    y: f32,
    font: &IndirectFontRef,
) {
    let x = (PAGE_WIDTH_MM - estimate_width_mm(text, size)) / 2.0;
    layer.use_text(text, size, Mm(x.max(MARGIN_MM)), Mm(y), font);
}

/// Helvetica averages roughly half an em per glyph, which is close enough
/// to center short header lines.
fn estimate_width_mm(text: &str, size: f32) -> f32 {
    const PT_TO_MM: f32 = 0.352_778;
    text.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

fn draw_rule(layer: &PdfLayerReference, x1: f32, y: f32, x2: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Package;

    fn sample_booking() -> BookingRecord {
        BookingRecord {
            id: Some("64f3a9b1c2d3e4f5a6b7c8d9".to_string()),
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            package: Package {
                id: "64f3a9b1c2d3e4f5a6b7c8d9".to_string(),
                title: "Alpine Trek".to_string(),
                description: "Five days in the mountains".to_string(),
                price: 100.0,
                image_url: String::new(),
                available_dates: vec![],
                max_travelers: 12,
            },
            travelers: 3,
            travel_date: "August 25, 2026".to_string(),
            total_price: 300.0,
        }
    }

    #[test]
    fn test_invoice_number_uses_last_eight_characters() {
        assert_eq!(
            invoice_number(Some("64f3a9b1c2d3e4f5a6b7c8d9")),
            "INV-a6b7c8d9"
        );
        assert_eq!(invoice_number(Some("short")), "INV-short");
        assert_eq!(invoice_number(None), "INV-N/A");
        assert_eq!(invoice_number(Some("")), "INV-N/A");
    }

    #[test]
    fn test_invoice_filename_matches_number_suffix() {
        assert_eq!(
            invoice_filename(Some("64f3a9b1c2d3e4f5a6b7c8d9")),
            "Invoice-a6b7c8d9.pdf"
        );
        assert_eq!(invoice_filename(None), "Invoice-N/A.pdf");
    }

    #[test]
    fn test_id_suffix_counts_characters_not_bytes() {
        // Multi-byte ids must not split inside a character boundary.
        assert_eq!(invoice_number(Some("réservation-α1β2γ3δ4")), "INV-α1β2γ3δ4");
    }

    #[test]
    fn test_total_recomputed_even_when_stored_total_is_stale() {
        let mut booking = sample_booking();
        booking.total_price = 1.0;
        assert_eq!(recomputed_total(&booking), 300.0);
        assert_eq!(format_money(recomputed_total(&booking)), "$300.00");
    }

    #[test]
    fn test_generate_invoice_pdf_produces_a_pdf_document() {
        let bytes = generate_invoice_pdf(&sample_booking(), "August 25, 2026")
            .expect("invoice should render");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_generate_invoice_pdf_without_booking_id() {
        let mut booking = sample_booking();
        booking.id = None;
        let bytes =
            generate_invoice_pdf(&booking, "August 25, 2026").expect("invoice should render");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
