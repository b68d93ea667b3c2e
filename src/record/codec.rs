//! Record codec
//!
//! Encoding and decoding of a `Record` to and from its 509-byte slot.
//! The layout is explicit (field order, widths, little-endian) and does not
//! depend on any in-memory struct representation.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Result, StockError};

use super::{Record, Status, DESCRIPTION_CAPACITY, DESCRIPTION_MAX_LEN, RECORD_SIZE};

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record into exactly `RECORD_SIZE` bytes
///
/// Descriptions longer than `DESCRIPTION_MAX_LEN` bytes are cut at a char
/// boundary so the stored text stays valid UTF-8 and keeps a NUL terminator.
pub fn encode_record(record: &Record) -> Bytes {
    let description = truncate_description(&record.description);

    let mut buf = BytesMut::with_capacity(RECORD_SIZE);
    buf.put_u8(record.status as u8);
    buf.put_slice(description.as_bytes());
    buf.put_bytes(0, DESCRIPTION_CAPACITY - description.len());
    buf.put_i32_le(record.quantity);
    buf.put_f32_le(record.price);

    debug_assert_eq!(buf.len(), RECORD_SIZE);
    buf.freeze()
}

/// Longest prefix of `description` that fits the field
pub fn truncate_description(description: &str) -> &str {
    if description.len() <= DESCRIPTION_MAX_LEN {
        return description;
    }

    let mut end = DESCRIPTION_MAX_LEN;
    while !description.is_char_boundary(end) {
        end -= 1;
    }
    &description[..end]
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a record from a slot buffer
///
/// The buffer must be exactly `RECORD_SIZE` bytes. The description ends at
/// the first NUL; invalid UTF-8 is replaced rather than rejected.
pub fn decode_record(bytes: &[u8]) -> Result<Record> {
    if bytes.len() != RECORD_SIZE {
        return Err(StockError::CorruptStore(format!(
            "slot buffer is {} bytes, expected {}",
            bytes.len(),
            RECORD_SIZE
        )));
    }

    let mut buf = bytes;

    let status_byte = buf.get_u8();
    let status = Status::from_byte(status_byte).ok_or_else(|| {
        StockError::CorruptStore(format!("undefined status byte 0x{:02x}", status_byte))
    })?;

    let field = &buf[..DESCRIPTION_CAPACITY];
    let text_len = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    let description = String::from_utf8_lossy(&field[..text_len]).into_owned();
    buf.advance(DESCRIPTION_CAPACITY);

    let quantity = buf.get_i32_le();
    let price = buf.get_f32_le();

    Ok(Record {
        status,
        description,
        quantity,
        price,
    })
}
