use crate::{
    metadata::tables::{types::RowCursor, RowReadable, TableId, TableInfoRef, TypeSpecRaw},
    Result,
};

impl RowReadable for TypeSpecRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* signature */ sizes.blob_bytes()
        )
    }

    /// Decode one `TypeSpec` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::TypeSpec, rid)?;

        Ok(TypeSpecRaw {
            rid,
            token,
            offset,
            signature: cursor.blob()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        tables::{types::decode_single, TableInfo},
        token::Token,
    };

    #[test]
    fn narrow_columns() {
        #[rustfmt::skip]
        let data = [
            0xB6, 0x09, // signature
        ];
        let sizes = TableInfo::new_test(&[], false, false, false);

        let row: TypeSpecRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            TypeSpecRaw {
                rid: 1,
                token: Token::new(0x1B00_0001),
                offset: 0,
                signature: 0x9B6,
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0x5E, 0x3C, // signature
        ];
        let sizes = TableInfo::new_test(&[], true, false, false);

        let row: TypeSpecRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            TypeSpecRaw {
                rid: 1,
                token: Token::new(0x1B00_0001),
                offset: 0,
                signature: 0x3C5E,
            }
        );
    }
}
