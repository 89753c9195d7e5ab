//! Forward cursor over a byte slice.
//!
//! [`Parser`] keeps a position into borrowed data and offers bounds-checked reads of
//! little-endian primitives, compressed integers, compressed `TypeDefOrRef` tokens and
//! null-terminated strings. Strings and byte runs are returned as borrows of the input, so
//! parsing a heap or the metadata root never copies.
//!
//! # Examples
//!
//! ```rust
//! use cilmeta::Parser;
//!
//! let data = [0x81, 0x02, 0x41, 0x42, 0x00, 0xFF];
//! let mut parser = Parser::new(&data);
//!
//! assert_eq!(parser.read_compressed_uint()?, 0x102);
//! assert_eq!(parser.read_string_utf8()?, "AB");
//! assert_eq!(parser.remaining(), 1);
//! # Ok::<(), cilmeta::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, CilIO},
    metadata::token::Token,
    utils::{read_compressed_int, read_compressed_uint},
    Error::OutOfBounds,
    Result,
};

/// A bounds-checked cursor over borrowed metadata bytes.
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`Parser`] positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Length of the underlying data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the underlying data is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if at least one more byte can be read.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Move the cursor to an absolute position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `pos` lies beyond the end of the data.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(OutOfBounds);
        }

        self.position = pos;
        Ok(())
    }

    /// Move the cursor forward by `step` bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if that would move past the end of the data.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        let Some(target) = self.position.checked_add(step) else {
            return Err(OutOfBounds);
        };
        self.seek(target)
    }

    /// Current position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Number of bytes left after the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Look at the next byte without consuming it.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at the end of the data.
    pub fn peek_byte(&self) -> Result<u8> {
        self.data.get(self.position).copied().ok_or(OutOfBounds)
    }

    /// Advance to the next multiple of `alignment` (relative to the start of the data).
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the aligned position lies beyond the data.
    pub fn align(&mut self, alignment: usize) -> Result<()> {
        let padding = (alignment - (self.position % alignment)) % alignment;
        self.advance_by(padding)
    }

    /// Read a little-endian primitive and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough data remains.
    pub fn read_le<T: CilIO>(&mut self) -> Result<T> {
        read_le_at(self.data, &mut self.position)
    }

    /// Read a compressed unsigned integer (ECMA-335 II.23.2).
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] on truncated input and
    /// [`crate::Error::Malformed`] on an invalid leading byte.
    pub fn read_compressed_uint(&mut self) -> Result<u32> {
        let (value, consumed) = read_compressed_uint(&self.data[self.position..])?;
        self.position += consumed;
        Ok(value)
    }

    /// Read a compressed signed integer (ECMA-335 II.23.2).
    ///
    /// # Errors
    /// Same as [`Parser::read_compressed_uint`].
    pub fn read_compressed_int(&mut self) -> Result<i32> {
        let (value, consumed) = read_compressed_int(&self.data[self.position..])?;
        self.position += consumed;
        Ok(value)
    }

    /// Read a compressed `TypeDefOrRefOrSpecEncoded` token as found in signatures.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCodedIndex`] if the tag bits select no table.
    pub fn read_compressed_token(&mut self) -> Result<Token> {
        let compressed = self.read_compressed_uint()?;
        Token::decode_type_def_or_ref(compressed)
    }

    /// Read a null-terminated UTF-8 string and advance past the terminator.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if no terminator is found and
    /// [`crate::Error::Malformed`] if the bytes are not valid UTF-8.
    pub fn read_string_utf8(&mut self) -> Result<&'a str> {
        let rest = &self.data[self.position..];
        let Some(end) = rest.iter().position(|&byte| byte == 0) else {
            return Err(OutOfBounds);
        };

        let value = std::str::from_utf8(&rest[..end])
            .map_err(|error| malformed_error!("Invalid UTF-8 string - {}", error))?;

        self.position += end + 1;
        Ok(value)
    }

    /// Borrow the next `length` bytes and advance past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let Some(end) = self.position.checked_add(length) else {
            return Err(OutOfBounds);
        };
        let Some(bytes) = self.data.get(self.position..end) else {
            return Err(OutOfBounds);
        };

        self.position = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metadata::tables::TableId, Error};

    #[test]
    fn read_compressed_uint() {
        let test_cases = vec![
            (vec![0x03], 3),                             // 1-byte format
            (vec![0x7F], 0x7F),                          // 1-byte format, max value
            (vec![0x80, 0x80], 0x80),                    // 2-byte format, min value
            (vec![0xBF, 0xFF], 0x3FFF),                  // 2-byte format, max value
            (vec![0xC0, 0x00, 0x00, 0x00], 0x00),        // 4-byte format, min value
            (vec![0xDF, 0xFF, 0xFF, 0xFF], 0x1FFF_FFFF), // 4-byte format, max value
        ];

        for (input, expected) in test_cases {
            let mut parser = Parser::new(&input);
            assert_eq!(parser.read_compressed_uint().unwrap(), expected);
            assert_eq!(parser.pos(), input.len());
        }

        let mut parser = Parser::new(&[]);
        assert!(matches!(
            parser.read_compressed_uint(),
            Err(Error::OutOfBounds)
        ));
    }

    #[test]
    fn read_compressed_int() {
        let mut parser = Parser::new(&[0x06, 0x7B, 0x80, 0x01]);
        assert_eq!(parser.read_compressed_int().unwrap(), 3);
        assert_eq!(parser.read_compressed_int().unwrap(), -3);
        assert_eq!(parser.read_compressed_int().unwrap(), -8192);
        assert!(!parser.has_more_data());
    }

    #[test]
    fn read_compressed_token() {
        // TypeRef row 0x12 => (0x12 << 2) | 1
        let mut parser = Parser::new(&[0x49]);
        let token = parser.read_compressed_token().unwrap();
        assert_eq!(token.table(), TableId::TypeRef as u8);
        assert_eq!(token.row(), 0x12);

        let mut parser = Parser::new(&[0x03]);
        assert!(matches!(
            parser.read_compressed_token(),
            Err(Error::InvalidCodedIndex { .. })
        ));
    }

    #[test]
    fn read_strings() {
        let test_cases = vec![
            (vec![0x61, 0x62, 0x63, 0x00], "abc"),
            (vec![0x00], ""),
            (vec![0xE4, 0xB8, 0xAD, 0xE6, 0x96, 0x87, 0x00], "中文"),
        ];

        for (input, expected) in test_cases {
            let mut parser = Parser::new(&input);
            assert_eq!(parser.read_string_utf8().unwrap(), expected);
            assert_eq!(parser.remaining(), 0);
        }

        let mut parser = Parser::new(&[0x61, 0x62]);
        assert!(matches!(parser.read_string_utf8(), Err(Error::OutOfBounds)));

        let mut parser = Parser::new(&[0xFF, 0x00]);
        assert!(matches!(
            parser.read_string_utf8(),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn cursor_movement() {
        let data = [0u8; 10];
        let mut parser = Parser::new(&data);
        parser.advance_by(3).unwrap();
        parser.align(4).unwrap();
        assert_eq!(parser.pos(), 4);
        assert_eq!(parser.read_bytes(4).unwrap().len(), 4);
        assert!(parser.read_bytes(3).is_err());
        assert!(parser.seek(11).is_err());
        parser.seek(10).unwrap();
        assert!(parser.peek_byte().is_err());
    }
}
