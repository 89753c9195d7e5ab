//! GUID Heap (`#GUID`)
//!
//! A packed array of 16-byte GUIDs. Unlike the other heaps it is addressed by a one-based
//! element index rather than a byte offset, and index 0 means "no GUID".
//!
//! # Reference
//! - [ECMA-335 II.24.2.5](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

use crate::{Error, Error::OutOfBounds, Result};

/// Size of one GUID entry.
pub const GUID_SIZE: usize = 16;

/// The `#GUID` heap of a metadata image.
///
/// # Examples
///
/// ```rust
/// use cilmeta::metadata::streams::Guid;
///
/// let mut data = [0u8; 32];
/// data[16] = 0xAB;
/// let heap = Guid::from(&data)?;
///
/// assert_eq!(heap.count(), 2);
/// assert_eq!(heap.get(2)?.to_bytes()[0], 0xAB);
/// assert!(heap.get(0).is_err());
/// # Ok::<(), cilmeta::Error>(())
/// ```
pub struct Guid<'a> {
    data: &'a [u8],
}

impl<'a> Guid<'a> {
    /// Create a `Guid` view over the heap bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the heap size is not a multiple of 16.
    pub fn from(data: &'a [u8]) -> Result<Guid<'a>> {
        if data.len() % GUID_SIZE != 0 {
            return Err(malformed_error!(
                "#GUID heap size {} is not a multiple of {}",
                data.len(),
                GUID_SIZE
            ));
        }

        Ok(Guid { data })
    }

    /// The GUID at one-based `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::NullIndex`] for index 0 and [`crate::Error::OutOfBounds`] past
    /// the last entry.
    pub fn get(&self, index: u32) -> Result<uguid::Guid> {
        if index == 0 {
            return Err(Error::NullIndex("#GUID index 0".to_string()));
        }

        let start = (index as usize - 1)
            .checked_mul(GUID_SIZE)
            .ok_or(OutOfBounds)?;
        let Some(bytes) = self.data.get(start..start + GUID_SIZE) else {
            return Err(OutOfBounds);
        };

        let mut buffer = [0u8; GUID_SIZE];
        buffer.copy_from_slice(bytes);

        Ok(uguid::Guid::from_bytes(buffer))
    }

    /// Number of GUIDs in the heap.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len() / GUID_SIZE
    }

    /// Size of the heap in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for an absent heap.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate the GUIDs with their one-based index.
    pub fn iter(&self) -> impl Iterator<Item = (u32, uguid::Guid)> + '_ {
        self.data
            .chunks_exact(GUID_SIZE)
            .zip(1u32..)
            .map(|(bytes, index)| {
                let mut buffer = [0u8; GUID_SIZE];
                buffer.copy_from_slice(bytes);
                (index, uguid::Guid::from_bytes(buffer))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crafted() {
        #[rustfmt::skip]
        let data : [u8; 48] = [
            /* 1 - 0;16   */  0x8e, 0x90, 0x37, 0xd4, 0xe6, 0x65, 0x7c, 0x48, 0x97, 0x35, 0x7b, 0xdf, 0xf6, 0x99, 0xbe, 0xa5,
            /* 2 - 16;32  */  0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA,
            /* 3 - 32;48  */  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];

        let guids = Guid::from(&data).unwrap();

        assert_eq!(
            guids.get(1).unwrap(),
            uguid::guid!("d437908e-65e6-487c-9735-7bdff699bea5")
        );
        assert_eq!(
            guids.get(2).unwrap(),
            uguid::guid!("AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA")
        );
        assert_eq!(
            guids.get(3).unwrap(),
            uguid::guid!("00000000-0000-0000-0000-000000000000")
        );
        assert_eq!(guids.iter().count(), 3);
    }

    #[test]
    fn bounds() {
        let data = [0u8; 32];
        let guids = Guid::from(&data).unwrap();

        assert!(matches!(guids.get(0), Err(Error::NullIndex(_))));
        assert!(matches!(guids.get(3), Err(Error::OutOfBounds)));
        assert!(matches!(guids.get(u32::MAX), Err(Error::OutOfBounds)));
        assert!(Guid::from(&[0u8; 17]).is_err());
        assert!(Guid::from(&[]).unwrap().is_empty());
    }
}
