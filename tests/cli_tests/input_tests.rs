//! Tests for lenient input parsing and table rendering

use stockdb::cli::{format_row, header, parse_int, parse_price, parse_quantity, product_row, strip_line_ending};
use stockdb::Record;

// =============================================================================
// Integer Parsing Tests
// =============================================================================

#[test]
fn test_parse_int_plain() {
    assert_eq!(parse_int("42"), 42);
    assert_eq!(parse_int("-7"), -7);
    assert_eq!(parse_int("+3"), 3);
}

#[test]
fn test_parse_int_prefix_and_whitespace() {
    assert_eq!(parse_int("   12abc"), 12);
    assert_eq!(parse_int("5 6"), 5);
    assert_eq!(parse_int("\t-1\n"), -1);
}

#[test]
fn test_parse_int_garbage_is_zero() {
    assert_eq!(parse_int(""), 0);
    assert_eq!(parse_int("abc"), 0);
    assert_eq!(parse_int("-"), 0);
    assert_eq!(parse_int("- 5"), 0);
}

#[test]
fn test_parse_int_saturates() {
    assert_eq!(parse_int("99999999999999999999999"), i64::MAX);
    assert_eq!(parse_int("-99999999999999999999999"), i64::MIN);
}

#[test]
fn test_parse_quantity_clamps_to_i32() {
    assert_eq!(parse_quantity("10"), 10);
    assert_eq!(parse_quantity("3000000000"), i32::MAX);
    assert_eq!(parse_quantity("-3000000000"), i32::MIN);
}

// =============================================================================
// Price Parsing Tests
// =============================================================================

#[test]
fn test_parse_price() {
    assert_eq!(parse_price("2.50"), 2.5);
    assert_eq!(parse_price("19.99"), 19.99f32);
    assert_eq!(parse_price("-1.25"), -1.25);
    assert_eq!(parse_price("5"), 5.0);
}

#[test]
fn test_parse_price_partial_forms() {
    assert_eq!(parse_price(".5"), 0.5);
    assert_eq!(parse_price("3."), 3.0);
    assert_eq!(parse_price("  4.5kg"), 4.5);
    assert_eq!(parse_price("1e2"), 100.0);
    assert_eq!(parse_price("2e"), 2.0);
    assert_eq!(parse_price("2e+"), 2.0);
}

#[test]
fn test_parse_price_garbage_is_zero() {
    assert_eq!(parse_price(""), 0.0);
    assert_eq!(parse_price("."), 0.0);
    assert_eq!(parse_price("free"), 0.0);
    assert_eq!(parse_price("-"), 0.0);
}

// =============================================================================
// Line Handling Tests
// =============================================================================

#[test]
fn test_strip_line_ending() {
    assert_eq!(strip_line_ending("abc\n"), "abc");
    assert_eq!(strip_line_ending("abc\r\n"), "abc");
    assert_eq!(strip_line_ending("abc"), "abc");
    assert_eq!(strip_line_ending("\n"), "");
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_header_layout() {
    let expected = format!("{:>5} {:<45} {:>6} {:>6}", "ID", "DESCRIPTION", "QTTY", "PRICE");
    assert_eq!(header(), expected);
    assert_eq!(header().len(), 5 + 1 + 45 + 1 + 6 + 1 + 6);
}

#[test]
fn test_product_row_two_decimals() {
    let row = product_row(1, &Record::new("Gadget", 3, 19.99));

    assert_eq!(row, format_row("1", "Gadget", "3", "19.99"));
    assert!(row.starts_with("    1 Gadget"));
    assert!(row.ends_with("     3  19.99"));
}
