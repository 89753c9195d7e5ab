use std::collections::HashMap;

use crate::{
    utils::{align_to, to_u32, write_compressed_uint},
    writer::heaps::HeapBuilder,
    Result,
};

/// Builder of the `#Blob` heap.
///
/// Entries are a compressed length followed by the bytes. Identical content shares one entry and
/// the empty blob maps to offset 0.
///
/// ```rust
/// use cilmeta::writer::heaps::{BlobHeapBuilder, HeapBuilder};
///
/// let mut heap = BlobHeapBuilder::new();
/// assert_eq!(heap.get_or_add(&[])?, 0);
/// assert_eq!(heap.get_or_add(&[0x06, 0x08])?, 1);
/// assert_eq!(heap.get_or_add(&[0x06, 0x08])?, 1);
/// assert_eq!(heap.build()?, vec![0x00, 0x02, 0x06, 0x08]);
/// # Ok::<(), cilmeta::Error>(())
/// ```
#[derive(Debug)]
pub struct BlobHeapBuilder {
    data: Vec<u8>,
    index: HashMap<Vec<u8>, u32>,
    accessed: bool,
}

impl BlobHeapBuilder {
    /// Create an empty builder holding only the null entry.
    #[must_use]
    pub fn new() -> Self {
        BlobHeapBuilder {
            data: vec![0],
            index: HashMap::new(),
            accessed: false,
        }
    }

    /// Offset of `value`, adding it if it is not in the heap yet.
    ///
    /// # Errors
    /// Returns [`crate::Error::IntegerRange`] if `value` is longer than a compressed length can
    /// express, and [`crate::Error::Malformed`] if the heap outgrows 32-bit offsets.
    pub fn get_or_add(&mut self, value: &[u8]) -> Result<u32> {
        self.accessed = true;
        if value.is_empty() {
            return Ok(0);
        }

        if let Some(&offset) = self.index.get(value) {
            return Ok(offset);
        }

        let mut prefix = Vec::with_capacity(4);
        write_compressed_uint(to_u32(value.len())?, &mut prefix)?;

        let offset = to_u32(self.data.len())?;
        self.data.extend_from_slice(&prefix);
        self.data.extend_from_slice(value);
        self.index.insert(value.to_vec(), offset);

        Ok(offset)
    }
}

impl Default for BlobHeapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapBuilder for BlobHeapBuilder {
    fn build(&self) -> Result<Vec<u8>> {
        let mut heap = self.data.clone();
        heap.resize(align_to(heap.len(), 4), 0);
        Ok(heap)
    }

    fn calculate_size(&self) -> Result<u64> {
        Ok(u64::from(to_u32(align_to(self.data.len(), 4))?))
    }

    fn heap_name(&self) -> &'static str {
        "#Blob"
    }

    fn is_accessed(&self) -> bool {
        self.accessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::streams::Blob;

    #[test]
    fn shared_entries() {
        let mut heap = BlobHeapBuilder::new();
        assert!(!heap.is_accessed());

        let first = heap.get_or_add(&[1, 2, 3]).unwrap();
        let second = heap.get_or_add(&[1, 2, 3]).unwrap();
        assert_eq!(first, 1);
        assert_eq!(first, second);
        assert_eq!(heap.get_or_add(&[9]).unwrap(), 5);

        let built = heap.build().unwrap();
        assert_eq!(built, vec![0x00, 0x03, 1, 2, 3, 0x01, 9, 0x00]);

        let reader = Blob::from(&built).unwrap();
        assert_eq!(reader.get(first).unwrap(), &[1, 2, 3]);
        assert_eq!(reader.get(5).unwrap(), &[9]);
    }

    #[test]
    fn empty_blob_still_accesses() {
        let mut heap = BlobHeapBuilder::new();
        assert_eq!(heap.get_or_add(&[]).unwrap(), 0);
        assert!(heap.is_accessed());
        assert_eq!(heap.calculate_size().unwrap(), 4);
    }

    #[test]
    fn two_byte_length_prefix() {
        let mut heap = BlobHeapBuilder::new();
        let value = vec![0xCC; 0x80];

        assert_eq!(heap.get_or_add(&value).unwrap(), 1);
        let built = heap.build().unwrap();
        assert_eq!(&built[1..3], &[0x80, 0x80]);
        assert_eq!(heap.calculate_size().unwrap(), 132);

        let reader = Blob::from(&built).unwrap();
        assert_eq!(reader.get(1).unwrap(), value.as_slice());
    }
}
