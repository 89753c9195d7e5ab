//! Blob Heap (`#Blob`)
//!
//! Binary data referenced by the metadata tables: signatures, constant values, custom attribute
//! arguments, public keys, marshalling descriptors. Each entry is a compressed length followed by
//! that many bytes. Offset 0 is the empty blob.
//!
//! # Reference
//! - [ECMA-335 II.24.2.4](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

use dashmap::DashMap;

use crate::{file::parser::Parser, utils::to_u32, Error::OutOfBounds, Result};

/// The `#Blob` heap of a metadata image.
///
/// # Examples
///
/// ```rust
/// use cilmeta::metadata::streams::Blob;
///
/// let data = &[0x00, 0x03, 0x41, 0x42, 0x43];
/// let blob = Blob::from(data)?;
///
/// assert_eq!(blob.get(1)?, &[0x41, 0x42, 0x43]);
/// assert!(blob.get(0)?.is_empty());
/// # Ok::<(), cilmeta::Error>(())
/// ```
pub struct Blob<'a> {
    data: &'a [u8],
    cache: DashMap<u32, &'a [u8]>,
}

impl<'a> Blob<'a> {
    /// Create a `Blob` view over the heap bytes.
    ///
    /// An empty slice stands for an absent heap.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the heap does not start with the empty blob.
    pub fn from(data: &'a [u8]) -> Result<Blob<'a>> {
        if !data.is_empty() && data[0] != 0 {
            return Err(malformed_error!("#Blob heap does not start with a null byte"));
        }

        Ok(Blob {
            data,
            cache: DashMap::new(),
        })
    }

    /// The bytes of the entry at `index`, without the length prefix.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the entry runs past the heap and
    /// [`crate::Error::Malformed`] for an invalid length prefix.
    pub fn get(&self, index: u32) -> Result<&'a [u8]> {
        if index == 0 {
            return Ok(&[]);
        }

        if let Some(cached) = self.cache.get(&index) {
            return Ok(*cached);
        }

        let (_, value) = self.entry(index as usize)?;
        Ok(*self.cache.entry(index).or_insert(value))
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

    /// Iterate the entries of the heap as `(offset, bytes)`, skipping the leading empty blob and the trailing padding.
    #[must_use]
    pub fn iter(&self) -> BlobIterator<'_, 'a> {
        BlobIterator {
            blob: self,
            position: 1,
        }
    }

    /// Size of the entry including its prefix, and its content.
    fn entry(&self, index: usize) -> Result<(usize, &'a [u8])> {
        let Some(rest) = self.data.get(index..) else {
            return Err(OutOfBounds);
        };

        let mut parser = Parser::new(rest);
        let length = parser.read_compressed_uint()? as usize;
        let value = parser.read_bytes(length)?;

        Ok((parser.pos(), value))
    }
}

impl<'b, 'a> IntoIterator for &'b Blob<'a> {
    type Item = Result<(u32, &'a [u8])>;
    type IntoIter = BlobIterator<'b, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sequential walk over the entries of a [`Blob`] heap.
pub struct BlobIterator<'b, 'a> {
    blob: &'b Blob<'a>,
    position: usize,
}

impl<'a> Iterator for BlobIterator<'_, 'a> {
    type Item = Result<(u32, &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.blob.data.get(self.position..).unwrap_or_default();
        if rest.is_empty() || super::is_padding(rest) {
            return None;
        }

        let start = self.position;
        match self
            .blob
            .entry(start)
            .and_then(|(size, value)| Ok((size, to_u32(start)?, value)))
        {
            Ok((size, index, value)) => {
                self.position += size;
                Some(Ok((index, value)))
            }
            Err(error) => {
                self.position = self.blob.data.len();
                Some(Err(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn crafted() {
        #[rustfmt::skip]
        let data = {
            let mut data = vec![0xCC; 66075];
            /* i - 0    - should always be 0    */ data[0]          = 0b_00000000_u8;

            /* i - 1    - len 10                */ data[1]          = 0b_00001010_u8;
            /* i - 1    - len 10                */ data[2..12]      .copy_from_slice(&[0x0A; 10]);

            /* i - 12   - len 5                 */ data[12]         = 0b_00000101_u8;
            /* i - 12   - len 5                 */ data[13..18]     .copy_from_slice(&[0xAB; 5]);

            /* i - 18   - len 257               */ data[18]         = 0b_10000001_u8;
            /* i - 18   - len 257               */ data[19]         = 0b_00000001_u8;
            /* i - 18   - len 257               */ data[20..277]    .copy_from_slice(&[0xBA; 257]);

            /* i - 277  - len 65793             */ data[277]        = 0b_11000000_u8;
            /* i - 277  - len 65793             */ data[278]        = 0b_00000001_u8;
            /* i - 277  - len 65793             */ data[279]        = 0b_00000001_u8;
            /* i - 277  - len 65793             */ data[280]        = 0b_00000001_u8;
            /* i - 277  - len 65793             */ data[281..66074] .copy_from_slice(&[0xBB; 65793]);

            data
        };

        let blob = Blob::from(&data).unwrap();

        assert_eq!(blob.get(1).unwrap(), &[0x0A; 10]);
        assert_eq!(blob.get(12).unwrap(), &[0xAB; 5]);
        assert_eq!(blob.get(18).unwrap().len(), 257);
        assert_eq!(blob.get(277).unwrap().len(), 65793);

        let offsets: Vec<u32> = blob
            .iter()
            .take(4)
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(offsets, vec![1, 12, 18, 277]);
    }

    #[test]
    fn invalid() {
        assert!(Blob::from(&[0x01, 0x00]).is_err());

        let blob = Blob::from(&[0x00, 0x05, 0x01, 0x02]).unwrap();
        assert!(matches!(blob.get(1), Err(Error::OutOfBounds)));
        assert!(matches!(blob.get(10), Err(Error::OutOfBounds)));

        let blob = Blob::from(&[0x00, 0xFF]).unwrap();
        assert!(blob.get(1).is_err());

        let mut entries = blob.iter();
        assert!(entries.next().unwrap().is_err());
        assert!(entries.next().is_none());
    }

    #[test]
    fn absent_heap() {
        let blob = Blob::from(&[]).unwrap();
        assert!(blob.get(0).unwrap().is_empty());
        assert!(blob.get(1).is_err());
        assert_eq!((&blob).into_iter().count(), 0);
    }
}
