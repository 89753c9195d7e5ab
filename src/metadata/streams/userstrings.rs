//! User String Heap (`#US`)
//!
//! Holds the string literals loaded by `ldstr`, stored as UTF-16. Each entry is a compressed
//! length followed by that many bytes: the UTF-16 code units and one trailing flag byte, which
//! is 1 when any unit needs more than plain 8-bit handling.
//!
//! ```text
//! +----------------+---------------------------+------+
//! | length (comp.) | UTF-16LE units (len-1 B)  | flag |
//! +----------------+---------------------------+------+
//! ```
//!
//! # Reference
//! - [ECMA-335 II.24.2.4](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

use std::sync::Arc;

use dashmap::DashMap;
use widestring::U16String;

use crate::{file::parser::Parser, Error::OutOfBounds, Result};

/// The `#US` heap of a metadata image.
///
/// Decoded strings are cached per offset and shared through [`Arc`].
///
/// # Examples
///
/// ```rust
/// use cilmeta::metadata::streams::UserStrings;
///
/// let data = [0x00, 0x05, b'H', 0x00, b'i', 0x00, 0x00];
/// let heap = UserStrings::from(&data)?;
///
/// assert_eq!(heap.get(1)?.to_string_lossy(), "Hi");
/// assert!(heap.get(0)?.is_empty());
/// # Ok::<(), cilmeta::Error>(())
/// ```
pub struct UserStrings<'a> {
    data: &'a [u8],
    cache: DashMap<u32, Arc<U16String>>,
}

impl<'a> UserStrings<'a> {
    /// Create a `UserStrings` view over the heap bytes.
    ///
    /// An empty slice stands for an absent heap.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the heap does not start with the empty entry.
    pub fn from(data: &'a [u8]) -> Result<UserStrings<'a>> {
        if !data.is_empty() && data[0] != 0 {
            return Err(malformed_error!("#US heap does not start with a null byte"));
        }

        Ok(UserStrings {
            data,
            cache: DashMap::new(),
        })
    }

    /// The string of the entry at `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the entry runs past the heap, and
    /// [`crate::Error::Malformed`] if its length leaves no room for the flag byte.
    pub fn get(&self, index: u32) -> Result<Arc<U16String>> {
        if let Some(cached) = self.cache.get(&index) {
            return Ok(cached.clone());
        }

        let (units, _) = self.entry(index)?;
        let value = Arc::new(U16String::from_vec(units));

        Ok(self.cache.entry(index).or_insert(value).clone())
    }

    /// The trailing flag byte of the entry at `index`, 0 for the empty entry.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the entry runs past the heap, and
    /// [`crate::Error::Malformed`] if its length leaves no room for the flag byte.
    pub fn flag(&self, index: u32) -> Result<u8> {
        Ok(self.entry(index)?.1)
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

    /// Iterate the entries of the heap as `(offset, string)`, skipping the leading empty entry and the trailing padding.
    #[must_use]
    pub fn iter(&self) -> UserStringsIterator<'_, 'a> {
        UserStringsIterator {
            heap: self,
            position: 1,
        }
    }

    fn entry(&self, index: u32) -> Result<(Vec<u16>, u8)> {
        if index == 0 && self.data.is_empty() {
            return Ok((Vec::new(), 0));
        }

        let Some(rest) = self.data.get(index as usize..) else {
            return Err(OutOfBounds);
        };

        let mut parser = Parser::new(rest);
        let length = parser.read_compressed_uint()? as usize;
        if length == 0 {
            return Ok((Vec::new(), 0));
        }
        // whole UTF-16 units plus the flag byte
        if length % 2 == 0 {
            return Err(malformed_error!(
                "user string at {} has even length {}",
                index,
                length
            ));
        }

        let bytes = parser.read_bytes(length)?;
        let units = bytes[..length - 1]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok((units, bytes[length - 1]))
    }

    fn entry_size(&self, index: usize) -> Result<usize> {
        let Some(rest) = self.data.get(index..) else {
            return Err(OutOfBounds);
        };

        let mut parser = Parser::new(rest);
        let length = parser.read_compressed_uint()? as usize;
        parser.advance_by(length)?;

        Ok(parser.pos())
    }
}

/// Sequential walk over the entries of a [`UserStrings`] heap.
pub struct UserStringsIterator<'h, 'a> {
    heap: &'h UserStrings<'a>,
    position: usize,
}

impl Iterator for UserStringsIterator<'_, '_> {
    type Item = Result<(u32, Arc<U16String>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.heap.data.get(self.position..).unwrap_or_default();
        if rest.is_empty() || super::is_padding(rest) {
            return None;
        }

        let start = self.position;
        let entry = self.heap.entry_size(start).and_then(|size| {
            let index = crate::utils::to_u32(start)?;
            let value = self.heap.get(index)?;
            Ok((size, index, value))
        });

        match entry {
            Ok((size, index, value)) => {
                self.position += size;
                Some(Ok((index, value)))
            }
            Err(error) => {
                self.position = self.heap.data.len();
                Some(Err(error))
            }
        }
    }
}
