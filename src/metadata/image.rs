//! Reading a complete metadata image.
//!
//! [`MetadataImage`] is the reader entry point. Given the bytes of a metadata root it parses the
//! stream directory, wraps each heap region in its read view and decodes every supported table
//! of the `#~` stream. Heap content is resolved on demand through the views, with per-offset
//! caching, so an image can be shared across threads while binding.
//!
//! ```rust,ignore
//! use cilmeta::{metadata::tables::TypeDefRaw, MetadataImage};
//!
//! let image = MetadataImage::read(&bytes)?;
//! if let Some(types) = image.table::<TypeDefRaw>() {
//!     for row in types {
//!         println!("{}.{}", image.strings().get(row.type_namespace)?, image.strings().get(row.type_name)?);
//!     }
//! }
//! ```

use tracing::debug;

use crate::{
    metadata::{
        root::Root,
        streams::{Blob, Guid, Strings, TablesHeader, UserStrings},
        tables::{MetadataTable, RowReadable, TableAccess},
    },
    Result,
};

/// A parsed metadata image: root, tables and the four heaps.
///
/// Absent heaps behave as empty heaps, so the null offset of each still resolves.
pub struct MetadataImage<'a> {
    data: &'a [u8],
    root: Root,
    tables: Option<TablesHeader>,
    strings: Strings<'a>,
    userstrings: UserStrings<'a>,
    guids: Guid<'a>,
    blobs: Blob<'a>,
}

impl<'a> MetadataImage<'a> {
    /// Parse the metadata image starting at the metadata root in `data`.
    ///
    /// # Errors
    /// Fails on the first structural problem: a malformed root or stream directory, a heap that
    /// does not begin with its null entry, or any error while decoding the tables. A partially
    /// parsed image is never returned.
    pub fn read(data: &'a [u8]) -> Result<MetadataImage<'a>> {
        let root = Root::read(data)?;

        let mut tables = None;
        let mut strings = Strings::from(&[])?;
        let mut userstrings = UserStrings::from(&[])?;
        let mut guids = Guid::from(&[])?;
        let mut blobs = Blob::from(&[])?;

        for header in &root.stream_headers {
            let start = header.offset as usize;
            let Some(region) = data.get(start..start + header.size as usize) else {
                return Err(crate::Error::OutOfBounds);
            };

            debug!(name = %header.name, offset = header.offset, size = header.size, "stream");
            match header.name.as_str() {
                "#~" => tables = Some(TablesHeader::from(region)?),
                "#Strings" => strings = Strings::from(region)?,
                "#US" => userstrings = UserStrings::from(region)?,
                "#GUID" => guids = Guid::from(region)?,
                "#Blob" => blobs = Blob::from(region)?,
                _ => return Err(malformed_error!("Unsupported stream - {}", header.name)),
            }
        }

        Ok(MetadataImage {
            data,
            root,
            tables,
            strings,
            userstrings,
            guids,
            blobs,
        })
    }

    /// The bytes the image was parsed from.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The metadata root and stream directory.
    #[must_use]
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// The `#~` stream, `None` if the image has none.
    #[must_use]
    pub fn tables(&self) -> Option<&TablesHeader> {
        self.tables.as_ref()
    }

    /// The decoded rows of the table with row type `T`.
    #[must_use]
    pub fn table<T: RowReadable>(&self) -> Option<&MetadataTable<T>>
    where
        TablesHeader: TableAccess<T>,
    {
        TableAccess::<T>::table(self.tables.as_ref()?)
    }

    /// The `#Strings` heap.
    #[must_use]
    pub fn strings(&self) -> &Strings<'a> {
        &self.strings
    }

    /// The `#US` heap.
    #[must_use]
    pub fn userstrings(&self) -> &UserStrings<'a> {
        &self.userstrings
    }

    /// The `#GUID` heap.
    #[must_use]
    pub fn guids(&self) -> &Guid<'a> {
        &self.guids
    }

    /// The `#Blob` heap.
    #[must_use]
    pub fn blobs(&self) -> &Blob<'a> {
        &self.blobs
    }
}
