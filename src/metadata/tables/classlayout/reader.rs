use crate::{
    metadata::tables::{types::RowCursor, ClassLayoutRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for ClassLayoutRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* packing_size */ 2 +
            /* class_size   */ 4 +
            /* parent       */ sizes.table_index_bytes(TableId::TypeDef)
        )
    }

    /// Decode one `ClassLayout` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::ClassLayout, rid)?;

        Ok(ClassLayoutRaw {
            rid,
            token,
            offset,
            packing_size: cursor.fixed::<u16>()?,
            class_size: cursor.fixed::<u32>()?,
            parent: cursor.index(TableId::TypeDef)?,
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
            0x2C, 0x96,             // packing_size
            0x97, 0x36, 0xB5, 0xCF, // class_size
            0x4A, 0x03,             // parent
        ];
        let sizes = TableInfo::new_test(&[(TableId::TypeDef, 0x379)], false, false, false);

        let row: ClassLayoutRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            ClassLayoutRaw {
                rid: 1,
                token: Token::new(0x0F00_0001),
                offset: 0,
                packing_size: 0x962C,
                class_size: 0xCFB5_3697,
                parent: 0x34A,
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0x24, 0x44,             // packing_size
            0xD3, 0x64, 0x1C, 0x5D, // class_size
            0xD7, 0x46, 0x03, 0x00, // parent
        ];
        let sizes = TableInfo::new_test(&[(TableId::TypeDef, 0x3_5BA3)], true, false, true);

        let row: ClassLayoutRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            ClassLayoutRaw {
                rid: 1,
                token: Token::new(0x0F00_0001),
                offset: 0,
                packing_size: 0x4424,
                class_size: 0x5D1C_64D3,
                parent: 0x3_46D7,
            }
        );
    }
}
