//! Numeric helpers shared by the reader and the writer.

use crate::Result;

/// Converts a `usize` to `u32`, returning an error if the value exceeds `u32::MAX`.
/// Every offset and size in a metadata image is stored as a 32-bit value.
///
/// # Errors
///
/// Returns an error if `value` exceeds `u32::MAX`.
pub fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| malformed_error!("Metadata value {value} exceeds u32::MAX"))
}

/// Round `value` up to the next multiple of `alignment`, which must be a power of two.
#[must_use]
pub fn align_to(value: usize, alignment: usize) -> usize {
    (value + alignment - 1) & !(alignment - 1)
}

/// Number of bits needed to distinguish `count` values, `ceil(log2(count))`.
///
/// Used for the tag width of coded indices; a single candidate needs no tag bits.
#[must_use]
pub const fn bits_for(count: usize) -> u8 {
    if count <= 1 {
        0
    } else {
        #[allow(clippy::cast_possible_truncation)]
        let bits = (usize::BITS - (count - 1).leading_zeros()) as u8;
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align() {
        assert_eq!(align_to(0, 4), 0);
        assert_eq!(align_to(1, 4), 4);
        assert_eq!(align_to(4, 4), 4);
        assert_eq!(align_to(13, 4), 16);
    }

    #[test]
    fn tag_bits() {
        assert_eq!(bits_for(1), 0);
        assert_eq!(bits_for(2), 1);
        assert_eq!(bits_for(3), 2);
        assert_eq!(bits_for(4), 2);
        assert_eq!(bits_for(5), 3);
        assert_eq!(bits_for(22), 5);
    }

    #[test]
    fn narrowing() {
        assert_eq!(to_u32(42).unwrap(), 42);
        #[cfg(target_pointer_width = "64")]
        assert!(to_u32(usize::MAX).is_err());
    }
}
