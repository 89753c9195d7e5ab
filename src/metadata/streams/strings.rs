//! String Heap (`#Strings`)
//!
//! Identifier strings referenced by the metadata tables: type names, member names, namespaces.
//! Every entry is a null-terminated UTF-8 string, and offset 0 always holds the empty string.
//! Tables may point into the middle of an entry to share a suffix with it.
//!
//! # Reference
//! - [ECMA-335 II.24.2.3](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

use std::str;

use dashmap::DashMap;

use crate::{utils::to_u32, Error::OutOfBounds, Result};

/// The `#Strings` heap of a metadata image.
///
/// Lookups validate UTF-8 once per offset and cache the result, so repeated access to the same
/// name from any thread is a map lookup.
///
/// # Examples
///
/// ```rust
/// use cilmeta::metadata::streams::Strings;
///
/// let data = &[0u8, b'H', b'e', b'l', b'l', b'o', 0u8];
/// let strings = Strings::from(data)?;
///
/// assert_eq!(strings.get(0)?, "");
/// assert_eq!(strings.get(1)?, "Hello");
/// assert_eq!(strings.get(3)?, "llo");
/// # Ok::<(), cilmeta::Error>(())
/// ```
pub struct Strings<'a> {
    data: &'a [u8],
    cache: DashMap<u32, &'a str>,
}

impl<'a> Strings<'a> {
    /// Create a `Strings` view over the heap bytes.
    ///
    /// An empty slice stands for an absent heap, in which only offset 0 resolves.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the heap does not start with the empty string.
    pub fn from(data: &'a [u8]) -> Result<Strings<'a>> {
        if !data.is_empty() && data[0] != 0 {
            return Err(malformed_error!("#Strings heap does not start with a null byte"));
        }

        Ok(Strings {
            data,
            cache: DashMap::new(),
        })
    }

    /// The string starting at `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `index` is past the heap or the string has no
    /// terminator, and [`crate::Error::Malformed`] for invalid UTF-8.
    pub fn get(&self, index: u32) -> Result<&'a str> {
        if index == 0 {
            return Ok("");
        }

        if let Some(cached) = self.cache.get(&index) {
            return Ok(*cached);
        }

        let Some(rest) = self.data.get(index as usize..) else {
            return Err(OutOfBounds);
        };
        let Some(end) = rest.iter().position(|&byte| byte == 0) else {
            return Err(OutOfBounds);
        };
        let value = str::from_utf8(&rest[..end])
            .map_err(|_| malformed_error!("Invalid string at index - {}", index))?;

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

    /// Iterate the entries of the heap as `(offset, string)`, skipping the leading empty string and the trailing padding.
    #[must_use]
    pub fn iter(&self) -> StringsIterator<'_, 'a> {
        StringsIterator {
            strings: self,
            position: 1,
        }
    }
}

impl<'s, 'a> IntoIterator for &'s Strings<'a> {
    type Item = Result<(u32, &'a str)>;
    type IntoIter = StringsIterator<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sequential walk over the entries of a [`Strings`] heap.
pub struct StringsIterator<'s, 'a> {
    strings: &'s Strings<'a>,
    position: usize,
}

impl<'a> Iterator for StringsIterator<'_, 'a> {
    type Item = Result<(u32, &'a str)>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.strings.data.get(self.position..).unwrap_or_default();
        if rest.is_empty() || super::is_padding(rest) {
            return None;
        }

        let index = match to_u32(self.position) {
            Ok(index) => index,
            Err(error) => return Some(Err(error)),
        };

        match self.strings.get(index) {
            Ok(value) => {
                self.position += value.len() + 1;
                Some(Ok((index, value)))
            }
            Err(error) => {
                self.position = self.strings.data.len();
                Some(Err(error))
            }
        }
    }
}
