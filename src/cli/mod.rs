//! CLI Module
//!
//! Text-menu front end for the record store.
//!
//! ## Responsibilities
//! - Render the main menu and the product table
//! - Prompt for fields and parse them leniently
//! - Translate recoverable store errors into user messages
//! - Ask for confirmation before deleting

mod input;
mod render;
mod session;

pub use input::{parse_int, parse_price, parse_quantity, strip_line_ending};
pub use render::{format_row, header, product_row, CLEAR_LINES};
pub use session::Session;
