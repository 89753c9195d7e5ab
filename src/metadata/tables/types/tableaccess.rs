use crate::metadata::tables::{MetadataTable, RowReadable};

/// Typed access to the tables of a parsed `#~` stream.
///
/// ```rust,ignore
/// let types: Option<&MetadataTable<TypeDefRaw>> = header.table();
/// if let Some(types) = types {
///     for row in types {
///         println!("{}", row.type_name);
///     }
/// }
/// ```
pub trait TableAccess<T: RowReadable> {
    /// Retrieve a table of the specified type if present.
    ///
    /// # Returns
    /// * `Some(&MetadataTable<T>)` - Reference to the table if present
    /// * `None` - If the table has no rows in this image
    fn table(&self) -> Option<&MetadataTable<T>>;
}

macro_rules! impl_table_access {
    ($owner:ty, $($raw:ty => $variant:ident),* $(,)?) => {
        $(
            impl $crate::metadata::tables::TableAccess<$raw> for $owner {
                fn table(&self) -> Option<&$crate::metadata::tables::MetadataTable<$raw>> {
                    match self.tables.get($crate::metadata::tables::TableId::$variant as usize)? {
                        Some($crate::metadata::tables::TableData::$variant(table)) => Some(table),
                        _ => None,
                    }
                }
            }
        )*
    };
}

pub(crate) use impl_table_access;
