use std::collections::HashMap;

use crate::{
    utils::{align_to, to_u32, write_compressed_uint},
    writer::heaps::HeapBuilder,
    Result,
};

/// Builder of the `#US` heap.
///
/// Each entry is the compressed byte length, the UTF-16LE code units and a trailing flag byte.
/// The length counts the flag byte. Every string gets an entry, including `""`, since offset 0
/// is reserved.
///
/// # Examples
///
/// ```rust
/// use cilmeta::writer::heaps::{HeapBuilder, UserStringHeapBuilder};
///
/// let mut heap = UserStringHeapBuilder::new();
/// assert_eq!(heap.get_or_add("Hi")?, 1);
/// assert_eq!(heap.build()?, vec![0x00, 0x05, b'H', 0x00, b'i', 0x00, 0x00, 0x00]);
/// # Ok::<(), cilmeta::Error>(())
/// ```
#[derive(Debug)]
pub struct UserStringHeapBuilder {
    data: Vec<u8>,
    index: HashMap<String, u32>,
    accessed: bool,
}

impl UserStringHeapBuilder {
    /// Create an empty builder holding only the reserved first byte.
    #[must_use]
    pub fn new() -> Self {
        UserStringHeapBuilder {
            data: vec![0],
            index: HashMap::new(),
            accessed: false,
        }
    }

    /// Offset of the entry for `value`, adding it if it is not in the heap yet.
    ///
    /// # Errors
    /// Returns [`crate::Error::IntegerRange`] if the encoded string is too long for its length
    /// prefix, and [`crate::Error::Malformed`] if the heap outgrows 32-bit offsets.
    pub fn get_or_add(&mut self, value: &str) -> Result<u32> {
        self.accessed = true;
        if let Some(&offset) = self.index.get(value) {
            return Ok(offset);
        }

        let units: Vec<u16> = value.encode_utf16().collect();
        let length = to_u32(units.len() * 2 + 1)?;

        let mut entry = Vec::with_capacity(units.len() * 2 + 5);
        write_compressed_uint(length, &mut entry)?;
        for unit in &units {
            entry.extend_from_slice(&unit.to_le_bytes());
        }
        entry.push(u8::from(needs_special_handling(&units)));

        let offset = to_u32(self.data.len())?;
        self.data.extend_from_slice(&entry);
        self.index.insert(value.to_string(), offset);

        Ok(offset)
    }
}

/// The trailing flag byte is 1 if any unit has its high byte set or is one of the control and
/// punctuation characters ECMA-335 II.24.2.4 singles out.
fn needs_special_handling(units: &[u16]) -> bool {
    units.iter().any(|&unit| {
        unit > 0x7E
            || (0x01..=0x08).contains(&unit)
            || (0x0E..=0x1F).contains(&unit)
            || unit == 0x27
            || unit == 0x2D
    })
}

impl Default for UserStringHeapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapBuilder for UserStringHeapBuilder {
    fn build(&self) -> Result<Vec<u8>> {
        let mut heap = self.data.clone();
        heap.resize(align_to(heap.len(), 4), 0);
        Ok(heap)
    }

    fn calculate_size(&self) -> Result<u64> {
        Ok(u64::from(to_u32(align_to(self.data.len(), 4))?))
    }

    fn heap_name(&self) -> &'static str {
        "#US"
    }

    fn is_accessed(&self) -> bool {
        self.accessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::streams::UserStrings;

    #[test]
    fn flag_byte() {
        assert!(!needs_special_handling(&[]));
        assert!(!needs_special_handling(&[u16::from(b'a'), 0x7E, 0x20, 0x09, 0x0D]));
        assert!(needs_special_handling(&[0x7F]));
        assert!(needs_special_handling(&[0x01]));
        assert!(needs_special_handling(&[0x08]));
        assert!(needs_special_handling(&[0x0E]));
        assert!(needs_special_handling(&[0x1F]));
        assert!(needs_special_handling(&[0x27]));
        assert!(needs_special_handling(&[0x2D]));
        assert!(needs_special_handling(&[0x00E9]));
    }

    #[test]
    fn entries() {
        let mut heap = UserStringHeapBuilder::new();
        assert!(!heap.is_accessed());

        assert_eq!(heap.get_or_add("").unwrap(), 1);
        assert_eq!(heap.get_or_add("it's").unwrap(), 3);
        assert_eq!(heap.get_or_add("").unwrap(), 1);
        assert!(heap.is_accessed());

        let built = heap.build().unwrap();
        assert_eq!(&built[..3], &[0x00, 0x01, 0x00]);
        assert_eq!(built[3], 0x09);
        assert_eq!(built[12], 0x01);
        assert_eq!(built.len() % 4, 0);

        let reader = UserStrings::from(&built).unwrap();
        assert!(reader.get(1).unwrap().is_empty());
        assert_eq!(reader.get(3).unwrap().to_string_lossy(), "it's");
        assert_eq!(reader.flag(3).unwrap(), 1);
    }

    #[test]
    fn long_string_uses_wide_prefix() {
        let mut heap = UserStringHeapBuilder::new();
        let value = "x".repeat(100);

        assert_eq!(heap.get_or_add(&value).unwrap(), 1);
        let built = heap.build().unwrap();
        assert_eq!(&built[1..3], &[0x80, 0xC9]);

        let reader = UserStrings::from(&built).unwrap();
        assert_eq!(reader.get(1).unwrap().len(), 100);
    }
}
