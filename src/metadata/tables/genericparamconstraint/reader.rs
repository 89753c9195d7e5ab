use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, GenericParamConstraintRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for GenericParamConstraintRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* owner      */ sizes.table_index_bytes(TableId::GenericParam) +
            /* constraint */ sizes.coded_index_bytes(CodedIndexType::TypeDefOrRef)
        )
    }

    /// Decode one `GenericParamConstraint` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::GenericParamConstraint, rid)?;

        Ok(GenericParamConstraintRaw {
            rid,
            token,
            offset,
            owner: cursor.index(TableId::GenericParam)?,
            constraint: cursor.coded(CodedIndexType::TypeDefOrRef)?,
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
            0x56, 0x00, // owner
            0xD2, 0x06, // constraint
        ];
        let sizes = TableInfo::new_test(
            &[(TableId::GenericParam, 0x57), (TableId::TypeSpec, 0x2FC)],
            false,
            false,
            false,
        );

        let row: GenericParamConstraintRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            GenericParamConstraintRaw {
                rid: 1,
                token: Token::new(0x2C00_0001),
                offset: 0,
                owner: 0x56,
                constraint: CodedIndex::new(TableId::TypeSpec, 0x1B4),
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0x20, 0x39, 0x02, 0x00, // owner
            0x8D, 0x00,             // constraint
        ];
        let sizes = TableInfo::new_test(
            &[(TableId::GenericParam, 0x2_52F9), (TableId::TypeRef, 0x96)],
            true,
            true,
            false,
        );

        let row: GenericParamConstraintRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            GenericParamConstraintRaw {
                rid: 1,
                token: Token::new(0x2C00_0001),
                offset: 0,
                owner: 0x2_3920,
                constraint: CodedIndex::new(TableId::TypeRef, 0x23),
            }
        );
    }
}
