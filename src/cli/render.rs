//! Table rendering

use crate::record::Record;
use crate::store::SlotId;

/// Newlines printed to push the previous screen out of view
pub const CLEAR_LINES: usize = 85;

/// One table line: ID, DESCRIPTION, QTTY, PRICE
pub fn format_row(id: &str, description: &str, quantity: &str, price: &str) -> String {
    format!("{:>5} {:<45} {:>6} {:>6}", id, description, quantity, price)
}

pub fn header() -> String {
    format_row("ID", "DESCRIPTION", "QTTY", "PRICE")
}

/// A product line, price rendered with two decimals
pub fn product_row(id: SlotId, record: &Record) -> String {
    format_row(
        &id.to_string(),
        &record.description,
        &record.quantity.to_string(),
        &format!("{:.2}", record.price),
    )
}
