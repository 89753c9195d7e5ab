//! Metadata tokens.
//!
//! A token is a 32-bit reference to a row of a metadata table: the table tag lives in the high
//! byte and the one-based row index in the low 24 bits. Row index 0 is the null token for that
//! table.
//!
//! ```text
//! 31           24 23                                  0
//! +--------------+-------------------------------------+
//! |  table tag   |          row index (1-based)        |
//! +--------------+-------------------------------------+
//! ```
//!
//! Signatures use a second, more compact encoding for type references
//! (`TypeDefOrRefOrSpecEncoded`, ECMA-335 II.23.2.8): a 2-bit tag selecting TypeDef, TypeRef or
//! TypeSpec, with the row index in the remaining bits, stored as a compressed integer. See
//! [`Token::encode_type_def_or_ref`] and [`Token::decode_type_def_or_ref`].

use std::fmt;

use crate::{
    metadata::tables::{CodedIndexType, TableId},
    utils::write_compressed_uint,
    Error, Result,
};

/// Largest row index a token can carry.
pub const TOKEN_ROW_MAX: u32 = 0x00FF_FFFF;

/// A metadata token, `(table << 24) | rid`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Token(pub u32);

impl Token {
    /// Wrap a raw token value.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Build a token from a table and a one-based row index.
    ///
    /// # Errors
    /// Returns [`Error::IntegerRange`] if `rid` does not fit in 24 bits.
    pub fn from_parts(table: TableId, rid: u32) -> Result<Self> {
        if rid > TOKEN_ROW_MAX {
            return Err(Error::IntegerRange(i64::from(rid)));
        }

        Ok(Token((u32::from(table as u8) << 24) | rid))
    }

    /// The raw 32-bit value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The table tag byte.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The one-based row index.
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & TOKEN_ROW_MAX
    }

    /// Returns true if the row index is 0.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.row() == 0
    }

    /// Split into the table and the one-based row index.
    ///
    /// # Errors
    /// Returns [`Error::UnknownTable`] if the tag byte names no table.
    pub fn decode(&self) -> Result<(TableId, u32)> {
        Ok((TableId::try_from(self.table())?, self.row()))
    }

    /// Split into the table and the zero-based row index.
    ///
    /// # Errors
    /// Returns [`Error::UnknownTable`] if the tag byte names no table, and
    /// [`Error::NullIndex`] for a null token.
    pub fn decode_zero_based(&self) -> Result<(TableId, u32)> {
        let (table, rid) = self.decode()?;
        if rid == 0 {
            return Err(Error::NullIndex(format!("{self} has no zero-based row")));
        }

        Ok((table, rid - 1))
    }

    /// Encode as `TypeDefOrRefOrSpecEncoded`, before compression.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCodedIndex`] if the token does not reference a TypeDef, TypeRef
    /// or TypeSpec row, and [`Error::IntegerRange`] if the result cannot be compressed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cilmeta::metadata::token::Token;
    ///
    /// // TypeRef row 0x12
    /// assert_eq!(Token::new(0x0100_0012).encode_type_def_or_ref()?, 0x49);
    /// # Ok::<(), cilmeta::Error>(())
    /// ```
    pub fn encode_type_def_or_ref(&self) -> Result<u32> {
        let (table, rid) = self.decode().map_err(|_| Error::InvalidCodedIndex {
            kind: CodedIndexType::TypeDefOrRef,
            value: self.0,
        })?;

        let encoded = CodedIndexType::TypeDefOrRef.encode(table, rid)?;
        if encoded > crate::utils::compressed::COMPRESSED_UINT_MAX {
            return Err(Error::IntegerRange(i64::from(encoded)));
        }

        Ok(encoded)
    }

    /// Decode a `TypeDefOrRefOrSpecEncoded` value, after decompression.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCodedIndex`] if the tag bits are 3.
    pub fn decode_type_def_or_ref(value: u32) -> Result<Token> {
        let (table, rid) = CodedIndexType::TypeDefOrRef.decode(value)?;
        Token::from_parts(table, rid)
    }
}

/// Append the compressed `TypeDefOrRefOrSpecEncoded` form of `token` to `buffer`.
///
/// # Errors
/// See [`Token::encode_type_def_or_ref`].
pub fn write_compressed_token(token: Token, buffer: &mut Vec<u8>) -> Result<()> {
    write_compressed_uint(token.encode_type_def_or_ref()?, buffer)
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
