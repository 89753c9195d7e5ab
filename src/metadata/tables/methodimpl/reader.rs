use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, MethodImplRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for MethodImplRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* class              */ sizes.table_index_bytes(TableId::TypeDef) +
            /* method_body        */ sizes.coded_index_bytes(CodedIndexType::MethodDefOrRef) +
            /* method_declaration */ sizes.coded_index_bytes(CodedIndexType::MethodDefOrRef)
        )
    }

    /// Decode one `MethodImpl` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::MethodImpl, rid)?;

        Ok(MethodImplRaw {
            rid,
            token,
            offset,
            class: cursor.index(TableId::TypeDef)?,
            method_body: cursor.coded(CodedIndexType::MethodDefOrRef)?,
            method_declaration: cursor.coded(CodedIndexType::MethodDefOrRef)?,
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
            0x07, 0x00, // class
            0x15, 0x01, // method_body
            0x25, 0x00, // method_declaration
        ];
        let sizes = TableInfo::new_test(
            &[(TableId::TypeDef, 0x43), (TableId::MemberRef, 0x38E)],
            false,
            false,
            false,
        );

        let row: MethodImplRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            MethodImplRaw {
                rid: 1,
                token: Token::new(0x1900_0001),
                offset: 0,
                class: 0x7,
                method_body: CodedIndex::new(TableId::MemberRef, 0x8A),
                method_declaration: CodedIndex::new(TableId::MemberRef, 0x12),
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0x06, 0x00,             // class
            0xBD, 0xF5, 0x03, 0x00, // method_body
            0x8B, 0x1F, 0x02, 0x00, // method_declaration
        ];
        let sizes = TableInfo::new_test(
            &[(TableId::TypeDef, 0x23), (TableId::MemberRef, 0x2_E58D)],
            true,
            false,
            false,
        );

        let row: MethodImplRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            MethodImplRaw {
                rid: 1,
                token: Token::new(0x1900_0001),
                offset: 0,
                class: 0x6,
                method_body: CodedIndex::new(TableId::MemberRef, 0x1_FADE),
                method_declaration: CodedIndex::new(TableId::MemberRef, 0x1_0FC5),
            }
        );
    }
}
