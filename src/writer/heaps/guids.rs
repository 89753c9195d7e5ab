use std::collections::HashMap;

use crate::{metadata::streams::GUID_SIZE, utils::to_u32, writer::heaps::HeapBuilder, Result};

/// Builder of the `#GUID` heap.
///
/// GUIDs are addressed by one-based slot. Adding the same bytes twice returns the first slot.
///
/// ```rust
/// use cilmeta::writer::heaps::{GuidHeapBuilder, HeapBuilder};
///
/// let mut heap = GuidHeapBuilder::new();
/// assert_eq!(heap.get_or_add(&[0x11; 16])?, 1);
/// assert_eq!(heap.get_or_add(&[0x22; 16])?, 2);
/// assert_eq!(heap.get_or_add(&[0x11; 16])?, 1);
/// assert_eq!(heap.build()?.len(), 32);
/// # Ok::<(), cilmeta::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct GuidHeapBuilder {
    data: Vec<u8>,
    index: HashMap<[u8; GUID_SIZE], u32>,
    accessed: bool,
}

impl GuidHeapBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One-based slot of `guid`, adding it if it is not in the heap yet.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the slot count outgrows 32 bits.
    pub fn get_or_add(&mut self, guid: &[u8; GUID_SIZE]) -> Result<u32> {
        self.accessed = true;
        if let Some(&slot) = self.index.get(guid) {
            return Ok(slot);
        }

        let slot = to_u32(self.data.len() / GUID_SIZE + 1)?;
        self.data.extend_from_slice(guid);
        self.index.insert(*guid, slot);

        Ok(slot)
    }

    /// Number of GUIDs in the heap.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len() / GUID_SIZE
    }
}

impl HeapBuilder for GuidHeapBuilder {
    fn build(&self) -> Result<Vec<u8>> {
        Ok(self.data.clone())
    }

    fn calculate_size(&self) -> Result<u64> {
        Ok(u64::from(to_u32(self.data.len())?))
    }

    fn heap_name(&self) -> &'static str {
        "#GUID"
    }

    fn is_accessed(&self) -> bool {
        self.accessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::streams::Guid;

    #[test]
    fn slots() {
        let mut heap = GuidHeapBuilder::new();
        assert!(!heap.is_accessed());
        assert_eq!(heap.calculate_size().unwrap(), 0);

        let mvid = [0x8e, 0x90, 0x37, 0xd4, 0xe6, 0x65, 0x7c, 0x48, 0x97, 0x35, 0x7b, 0xdf, 0xf6, 0x99, 0xbe, 0xa5];
        assert_eq!(heap.get_or_add(&mvid).unwrap(), 1);
        assert_eq!(heap.get_or_add(&[0; 16]).unwrap(), 2);
        assert_eq!(heap.get_or_add(&mvid).unwrap(), 1);
        assert_eq!(heap.count(), 2);
        assert_eq!(heap.calculate_size().unwrap(), 32);

        let built = heap.build().unwrap();
        let reader = Guid::from(&built).unwrap();
        assert_eq!(
            reader.get(1).unwrap(),
            uguid::guid!("d437908e-65e6-487c-9735-7bdff699bea5")
        );
        assert_eq!(reader.get(2).unwrap().to_bytes(), [0; 16]);
    }
}
