//! Tests for the record codec
//!
//! These tests verify:
//! - Slot size and field offsets
//! - Description truncation at the 499/500 boundary
//! - Status byte validation
//! - Decoding of malformed buffers

use stockdb::record::{
    decode_record, encode_record, truncate_description, Record, Status, DESCRIPTION_MAX_LEN,
    RECORD_SIZE,
};
use stockdb::StockError;

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_record_size_is_509() {
    assert_eq!(RECORD_SIZE, 509);
    assert_eq!(encode_record(&Record::empty()).len(), RECORD_SIZE);
    assert_eq!(encode_record(&Record::new("Widget", 10, 2.5)).len(), RECORD_SIZE);
}

#[test]
fn test_field_offsets() {
    let bytes = encode_record(&Record::new("AB", -2, 1.5));

    assert_eq!(bytes[0], 1);
    assert_eq!(&bytes[1..3], b"AB");
    assert!(bytes[3..501].iter().all(|&b| b == 0));
    assert_eq!(&bytes[501..505], &(-2i32).to_le_bytes());
    assert_eq!(&bytes[505..509], &1.5f32.to_le_bytes());
}

#[test]
fn test_empty_record_is_all_zero() {
    let bytes = encode_record(&Record::empty());
    assert!(bytes.iter().all(|&b| b == 0));
}

#[test]
fn test_decode_widget() {
    let record = Record::new("Widget", 10, 2.5);
    let decoded = decode_record(&encode_record(&record)).unwrap();

    assert_eq!(decoded, record);
    assert_eq!(decoded.status, Status::Occupied);
}

#[test]
fn test_decode_keeps_fields_of_empty_slot() {
    let mut record = Record::new("Old", 3, 9.0);
    record.status = Status::Empty;

    let decoded = decode_record(&encode_record(&record)).unwrap();

    assert_eq!(decoded.status, Status::Empty);
    assert_eq!(decoded.description, "Old");
    assert_eq!(decoded.quantity, 3);
}

#[test]
fn test_extreme_numbers() {
    let record = Record::new("x", i32::MIN, f32::MAX);
    let decoded = decode_record(&encode_record(&record)).unwrap();

    assert_eq!(decoded.quantity, i32::MIN);
    assert_eq!(decoded.price, f32::MAX);
}

// =============================================================================
// Description Truncation Tests
// =============================================================================

#[test]
fn test_description_of_499_chars_is_kept() {
    let text = "a".repeat(499);
    let decoded = decode_record(&encode_record(&Record::new(text.clone(), 1, 1.0))).unwrap();

    assert_eq!(decoded.description, text);
}

#[test]
fn test_description_of_500_chars_is_truncated() {
    let text = "b".repeat(500);
    let bytes = encode_record(&Record::new(text, 1, 1.0));

    // Last description byte is the terminator
    assert_eq!(bytes[500], 0);

    let decoded = decode_record(&bytes).unwrap();
    assert_eq!(decoded.description.len(), DESCRIPTION_MAX_LEN);
    assert_eq!(decoded.description, "b".repeat(499));
}

#[test]
fn test_long_description_does_not_touch_quantity() {
    let bytes = encode_record(&Record::new("c".repeat(2000), 77, 0.5));
    let decoded = decode_record(&bytes).unwrap();

    assert_eq!(decoded.quantity, 77);
    assert_eq!(decoded.price, 0.5);
}

#[test]
fn test_truncation_respects_char_boundary() {
    // 498 ASCII bytes + a 2-byte char = 500 bytes; the char must be dropped whole
    let text = format!("{}é", "d".repeat(498));
    assert_eq!(text.len(), 500);

    let truncated = truncate_description(&text);
    assert_eq!(truncated, "d".repeat(498));

    let decoded = decode_record(&encode_record(&Record::new(text, 0, 0.0))).unwrap();
    assert_eq!(decoded.description, "d".repeat(498));
}

#[test]
fn test_truncate_short_description_is_identity() {
    assert_eq!(truncate_description("Gadget"), "Gadget");
    assert_eq!(truncate_description(""), "");
}

// =============================================================================
// Malformed Input Tests
// =============================================================================

#[test]
fn test_undefined_status_byte() {
    let mut bytes = encode_record(&Record::new("x", 1, 1.0)).to_vec();
    bytes[0] = 7;

    let result = decode_record(&bytes);
    assert!(matches!(result, Err(StockError::CorruptStore(_))));
}

#[test]
fn test_wrong_buffer_length() {
    let result = decode_record(&[0u8; RECORD_SIZE - 1]);
    assert!(matches!(result, Err(StockError::CorruptStore(_))));

    let result = decode_record(&[0u8; RECORD_SIZE + 1]);
    assert!(matches!(result, Err(StockError::CorruptStore(_))));
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let mut bytes = encode_record(&Record::new("ok", 1, 1.0)).to_vec();
    bytes[3] = 0xff;

    let decoded = decode_record(&bytes).unwrap();
    assert!(decoded.description.starts_with("ok"));
    assert!(decoded.description.contains('\u{fffd}'));
}

#[test]
fn test_status_from_byte() {
    assert_eq!(Status::from_byte(0), Some(Status::Empty));
    assert_eq!(Status::from_byte(1), Some(Status::Occupied));
    assert_eq!(Status::from_byte(2), None);
}
