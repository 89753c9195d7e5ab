use std::collections::HashMap;

use crate::{
    utils::{align_to, to_u32},
    writer::heaps::HeapBuilder,
    Result,
};

/// Builder of the `#Strings` heap.
///
/// Entries are null-terminated UTF-8. The empty string maps to offset 0 unless it is requested
/// through [`StringHeapBuilder::get_or_add_non_null`], which gives it an entry of its own.
///
/// # Examples
///
/// ```rust
/// use cilmeta::writer::heaps::{HeapBuilder, StringHeapBuilder};
///
/// let mut heap = StringHeapBuilder::new();
/// assert_eq!(heap.get_or_add("")?, 0);
/// assert_eq!(heap.get_or_add("Object")?, 1);
/// assert_eq!(heap.get_or_add("System")?, 8);
/// assert_eq!(heap.get_or_add("Object")?, 1);
///
/// assert_eq!(heap.build()?, b"\0Object\0System\0\0");
/// # Ok::<(), cilmeta::Error>(())
/// ```
#[derive(Debug)]
pub struct StringHeapBuilder {
    data: Vec<u8>,
    index: HashMap<String, u32>,
    non_null_empty: Option<u32>,
    accessed: bool,
}

impl StringHeapBuilder {
    /// Create an empty builder holding only the null entry.
    #[must_use]
    pub fn new() -> Self {
        StringHeapBuilder {
            data: vec![0],
            index: HashMap::new(),
            non_null_empty: None,
            accessed: false,
        }
    }

    /// Offset of `value`, adding it if it is not in the heap yet. `""` maps to 0.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if `value` contains a null character or the heap
    /// outgrows 32-bit offsets.
    pub fn get_or_add(&mut self, value: &str) -> Result<u32> {
        self.accessed = true;
        if value.is_empty() {
            return Ok(0);
        }

        if let Some(&offset) = self.index.get(value) {
            return Ok(offset);
        }

        if value.contains('\0') {
            return Err(malformed_error!("String heap entry contains a null character"));
        }

        let offset = self.append(value.as_bytes())?;
        self.index.insert(value.to_string(), offset);
        Ok(offset)
    }

    /// Like [`StringHeapBuilder::get_or_add`], but `""` gets a non-zero entry of its own.
    ///
    /// # Errors
    /// See [`StringHeapBuilder::get_or_add`].
    pub fn get_or_add_non_null(&mut self, value: &str) -> Result<u32> {
        if !value.is_empty() {
            return self.get_or_add(value);
        }

        self.accessed = true;
        if let Some(offset) = self.non_null_empty {
            return Ok(offset);
        }

        let offset = self.append(&[])?;
        self.non_null_empty = Some(offset);
        Ok(offset)
    }

    fn append(&mut self, bytes: &[u8]) -> Result<u32> {
        let offset = to_u32(self.data.len())?;
        self.data.extend_from_slice(bytes);
        self.data.push(0);

        Ok(offset)
    }
}

impl Default for StringHeapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapBuilder for StringHeapBuilder {
    fn build(&self) -> Result<Vec<u8>> {
        let mut heap = self.data.clone();
        heap.resize(align_to(heap.len(), 4), 0);
        Ok(heap)
    }

    fn calculate_size(&self) -> Result<u64> {
        Ok(u64::from(to_u32(align_to(self.data.len(), 4))?))
    }

    fn heap_name(&self) -> &'static str {
        "#Strings"
    }

    fn is_accessed(&self) -> bool {
        self.accessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_and_layout() {
        let mut heap = StringHeapBuilder::new();
        assert!(!heap.is_accessed());

        assert_eq!(heap.get_or_add("A.dll").unwrap(), 1);
        assert_eq!(heap.get_or_add("C").unwrap(), 7);
        assert_eq!(heap.get_or_add("A.dll").unwrap(), 1);
        assert!(heap.is_accessed());

        let built = heap.build().unwrap();
        assert_eq!(built, b"\0A.dll\0C\0\0\0\0");
        assert_eq!(heap.calculate_size().unwrap(), 12);
        assert_eq!(heap.heap_name(), "#Strings");
    }

    #[test]
    fn empty_strings() {
        let mut heap = StringHeapBuilder::new();
        assert_eq!(heap.get_or_add("").unwrap(), 0);
        assert!(heap.is_accessed());

        let first = heap.get_or_add_non_null("").unwrap();
        assert_eq!(first, 1);
        assert_eq!(heap.get_or_add_non_null("").unwrap(), first);
        assert_eq!(heap.get_or_add_non_null("X").unwrap(), 2);
        assert_eq!(heap.build().unwrap(), vec![0, 0, b'X', 0]);
    }

    #[test]
    fn rejects_embedded_null() {
        let mut heap = StringHeapBuilder::new();
        assert!(heap.get_or_add("a\0b").is_err());
        assert_eq!(heap.calculate_size().unwrap(), 4);
    }

    #[test]
    fn deterministic() {
        let build = || {
            let mut heap = StringHeapBuilder::new();
            for name in ["System", "Object", "System", "Console", "WriteLine"] {
                heap.get_or_add(name).unwrap();
            }
            heap.build().unwrap()
        };

        assert_eq!(build(), build());
    }
}
