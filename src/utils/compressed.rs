//! Compressed integer codec (ECMA-335 II.23.2).
//!
//! Signatures, blob and user string length prefixes, and a handful of other variable length
//! fields store 32-bit integers in a big-endian 1, 2 or 4 byte form. The number of leading one
//! bits in the first byte selects the form:
//!
//! | Form    | First byte  | Unsigned range         | Signed range                    |
//! |---------|-------------|------------------------|---------------------------------|
//! | 1 byte  | `0xxxxxxx`  | `0x00..=0x7F`          | `-0x40..=0x3F`                  |
//! | 2 bytes | `10xxxxxx`  | `0x80..=0x3FFF`        | `-0x2000..=0x1FFF`              |
//! | 4 bytes | `110xxxxx`  | `0x4000..=0x1FFF_FFFF` | `-0x1000_0000..=0x0FFF_FFFF`    |
//!
//! Signed values are first truncated to the 7, 14 or 29 bit two's complement width of their form
//! and then rotated left by one bit, which moves the sign into bit 0.

use crate::{Error, Result};

/// Largest value representable as a compressed unsigned integer.
pub const COMPRESSED_UINT_MAX: u32 = 0x1FFF_FFFF;

/// Smallest value representable as a compressed signed integer.
pub const COMPRESSED_INT_MIN: i32 = -0x1000_0000;

/// Largest value representable as a compressed signed integer.
pub const COMPRESSED_INT_MAX: i32 = 0x0FFF_FFFF;

/// Number of bytes the compressed form of `value` occupies.
///
/// # Errors
/// Returns [`Error::IntegerRange`] if `value` exceeds [`COMPRESSED_UINT_MAX`].
pub fn compressed_uint_size(value: u32) -> Result<usize> {
    match value {
        0..=0x7F => Ok(1),
        0x80..=0x3FFF => Ok(2),
        0x4000..=COMPRESSED_UINT_MAX => Ok(4),
        _ => Err(Error::IntegerRange(i64::from(value))),
    }
}

/// Append the compressed form of an unsigned integer to `buffer`.
///
/// # Errors
/// Returns [`Error::IntegerRange`] if `value` exceeds [`COMPRESSED_UINT_MAX`]; `buffer` is left
/// untouched in that case.
///
/// # Examples
///
/// ```rust
/// use cilmeta::utils::write_compressed_uint;
///
/// let mut buffer = Vec::new();
/// write_compressed_uint(0x3FFF, &mut buffer)?;
/// assert_eq!(buffer, [0xBF, 0xFF]);
/// # Ok::<(), cilmeta::Error>(())
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn write_compressed_uint(value: u32, buffer: &mut Vec<u8>) -> Result<()> {
    match compressed_uint_size(value)? {
        1 => buffer.push(value as u8),
        2 => buffer.extend_from_slice(&(0x8000 | value as u16).to_be_bytes()),
        _ => buffer.extend_from_slice(&(0xC000_0000 | value).to_be_bytes()),
    }

    Ok(())
}

/// Append the compressed form of a signed integer to `buffer`.
///
/// # Errors
/// Returns [`Error::IntegerRange`] if `value` is outside
/// [`COMPRESSED_INT_MIN`]`..=`[`COMPRESSED_INT_MAX`]; `buffer` is left untouched in that case.
///
/// # Examples
///
/// ```rust
/// use cilmeta::utils::write_compressed_int;
///
/// let mut buffer = Vec::new();
/// write_compressed_int(-3, &mut buffer)?;
/// assert_eq!(buffer, [0x7B]);
/// # Ok::<(), cilmeta::Error>(())
/// ```
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn write_compressed_int(value: i32, buffer: &mut Vec<u8>) -> Result<()> {
    // Two's complement bits of the value, truncated to the width of the form below
    let bits = value as u32;

    match value {
        -0x40..=0x3F => {
            let rotated = ((bits << 1) | ((bits >> 6) & 1)) & 0x7F;
            buffer.push(rotated as u8);
        }
        -0x2000..=0x1FFF => {
            let rotated = ((bits << 1) | ((bits >> 13) & 1)) & 0x3FFF;
            buffer.extend_from_slice(&(0x8000 | rotated as u16).to_be_bytes());
        }
        COMPRESSED_INT_MIN..=COMPRESSED_INT_MAX => {
            let rotated = ((bits << 1) | ((bits >> 28) & 1)) & COMPRESSED_UINT_MAX;
            buffer.extend_from_slice(&(0xC000_0000 | rotated).to_be_bytes());
        }
        _ => return Err(Error::IntegerRange(i64::from(value))),
    }

    Ok(())
}

/// Decode a compressed unsigned integer from the start of `data`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
/// Returns [`Error::OutOfBounds`] if `data` ends inside the encoding, or
/// [`Error::Malformed`] if the first byte does not start a valid form (`111xxxxx`).
pub fn read_compressed_uint(data: &[u8]) -> Result<(u32, usize)> {
    let Some(&first) = data.first() else {
        return Err(Error::OutOfBounds);
    };

    if first & 0x80 == 0 {
        return Ok((u32::from(first), 1));
    }

    if first & 0xC0 == 0x80 {
        let Some(&second) = data.get(1) else {
            return Err(Error::OutOfBounds);
        };
        let value = (u32::from(first & 0x3F) << 8) | u32::from(second);
        return Ok((value, 2));
    }

    if first & 0xE0 == 0xC0 {
        let Some(rest) = data.get(1..4) else {
            return Err(Error::OutOfBounds);
        };
        let value = (u32::from(first & 0x1F) << 24)
            | (u32::from(rest[0]) << 16)
            | (u32::from(rest[1]) << 8)
            | u32::from(rest[2]);
        return Ok((value, 4));
    }

    Err(malformed_error!("Invalid compressed uint - 0x{:02X}", first))
}

/// Decode a compressed signed integer from the start of `data`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
/// Same as [`read_compressed_uint`].
#[allow(clippy::cast_possible_wrap)]
pub fn read_compressed_int(data: &[u8]) -> Result<(i32, usize)> {
    let (raw, consumed) = read_compressed_uint(data)?;

    let sign_extension = match consumed {
        1 => 0xFFFF_FFC0,
        2 => 0xFFFF_E000,
        _ => 0xF000_0000,
    };

    let value = if raw & 1 == 0 {
        raw >> 1
    } else {
        (raw >> 1) | sign_extension
    };

    Ok((value as i32, consumed))
}
