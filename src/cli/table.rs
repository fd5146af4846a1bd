//! Plain-text table rendering for filter results.
//!
//! Columns are sized to their widest cell using display width, so
//! descriptions with wide characters still line up.

use crate::models::Property;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Column headers, in display order
pub const HEADERS: [&str; 8] = [
    "Sq ft",
    "Lighting",
    "Price",
    "Rooms",
    "WC",
    "Location",
    "Description",
    "Amenities",
];

/// Message shown instead of an empty table
pub const NO_MATCHES: &str = "No properties match your criteria.";

/// Format a price as currency with two decimals
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a coordinate pair as `(lat, lon)` with four decimals
pub fn format_location(latitude: f64, longitude: f64) -> String {
    format!("({:.4}, {:.4})", latitude, longitude)
}

/// Build the table cells for one property
pub fn row_cells(property: &Property) -> [String; 8] {
    [
        property.square_footage.to_string(),
        property.lighting.clone(),
        format_price(property.price),
        property.rooms.to_string(),
        property.bathrooms.to_string(),
        format_location(property.location.latitude, property.location.longitude),
        property.description.clone(),
        property.present_amenities().collect::<Vec<_>>().join(", "),
    ]
}

/// Render the results as a bordered table, or the no-match message
pub fn render(properties: &[&Property]) -> String {
    if properties.is_empty() {
        return format!("{}\n", NO_MATCHES);
    }

    let rows: Vec<[String; 8]> = properties.iter().map(|p| row_cells(p)).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let border = separator(&widths);
    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&line(&HEADERS, &widths));
    out.push_str(&border);
    for row in &rows {
        out.push_str(&line(row, &widths));
    }
    out.push_str(&border);
    out
}

/// Write the rendered results to `out`
pub fn display<W: Write + ?Sized>(out: &mut W, properties: &[&Property]) -> io::Result<()> {
    out.write_all(render(properties).as_bytes())?;
    out.flush()
}

fn separator(widths: &[usize]) -> String {
    let mut s = String::from("+");
    for width in widths {
        s.push_str(&"-".repeat(width + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut s = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let pad = width.saturating_sub(cell.width());
        s.push(' ');
        s.push_str(cell);
        s.push_str(&" ".repeat(pad));
        s.push_str(" |");
    }
    s.push('\n');
    s
}
