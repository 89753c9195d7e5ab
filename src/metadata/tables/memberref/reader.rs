use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, MemberRefRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for MemberRefRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* class     */ sizes.coded_index_bytes(CodedIndexType::MemberRefParent) +
            /* name      */ sizes.str_bytes() +
            /* signature */ sizes.blob_bytes()
        )
    }

    /// Decode one `MemberRef` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::MemberRef, rid)?;

        Ok(MemberRefRaw {
            rid,
            token,
            offset,
            class: cursor.coded(CodedIndexType::MemberRefParent)?,
            name: cursor.string()?,
            signature: cursor.blob()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        tables::{types::decode_single, CodedIndex, TableInfo},
        token::Token,
    };

    #[test]
    fn narrow_columns() {
        #[rustfmt::skip]
        let data = [
            0x49, 0x12, // class
            0xE9, 0x97, // name
            0x6F, 0x76, // signature
        ];
        let sizes = TableInfo::new_test(&[(TableId::TypeRef, 0x258)], false, false, false);

        let row: MemberRefRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            MemberRefRaw {
                rid: 1,
                token: Token::new(0x0A00_0001),
                offset: 0,
                class: CodedIndex::new(TableId::TypeRef, 0x249),
                name: 0x97E9,
                signature: 0x766F,
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0xDB, 0x6A, 0x09, 0x00, // class
            0x67, 0xE2, 0x6B, 0x00, // name
            0x0B, 0x08, 0x4A, 0x00, // signature
        ];
        let sizes = TableInfo::new_test(&[(TableId::MethodDef, 0x1_CCAE)], true, true, false);

        let row: MemberRefRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            MemberRefRaw {
                rid: 1,
                token: Token::new(0x0A00_0001),
                offset: 0,
                class: CodedIndex::new(TableId::MethodDef, 0x1_2D5B),
                name: 0x6B_E267,
                signature: 0x4A_080B,
            }
        );
    }
}
