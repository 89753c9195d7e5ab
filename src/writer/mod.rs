//! Two-phase metadata writer.
//!
//! The byte width of a column depends on the final size of the table or heap it points into,
//! so nothing can be encoded while rows are still being added. [`MetadataBuilder`] therefore
//! works in two phases:
//!
//! 1. **Accumulation.** Heap entries and rows are added in any order. Heap builders return final
//!    indices immediately, rows of unsorted tables get their final token immediately, and rows
//!    of the sorted tables get a [`RowHandle`] that resolves to a token later.
//! 2. **Serialization.** [`MetadataBuilder::serialize`] derives the list columns from recorded
//!    ownership, takes the final row counts and heap sizes, computes every column width from
//!    them, encodes the whole image into a buffer while validating every reference, and only
//!    then writes the buffer to the sink.
//!
//! # Examples
//!
//! ```rust
//! use cilmeta::{
//!     metadata::{tables::{CodedIndex, CustomAttributeRaw, TableId, TypeDefRaw}, token::Token},
//!     MetadataBuilder, WriterConfig,
//! };
//!
//! let mut builder = MetadataBuilder::new(WriterConfig::default());
//! let name = builder.add_string("Program")?;
//! let program = builder.add_row(TypeDefRaw { type_name: name, ..Default::default() })?;
//!
//! let attribute = builder.add_sorted_row(CustomAttributeRaw {
//!     parent: CodedIndex::new(TableId::TypeDef, program.row()),
//!     ..Default::default()
//! })?;
//! assert_eq!(builder.resolve(attribute)?, Token::new(0x0C00_0001));
//!
//! let bytes = builder.to_bytes()?;
//! assert_eq!(&bytes[..4], b"BSJB");
//! # Ok::<(), cilmeta::Error>(())
//! ```

mod config;
pub mod heaps;
pub mod tables;

pub use config::WriterConfig;
pub use tables::{OwnedRow, RowHandle, RowList, StoredRow, TableStore};

use std::{io::Write, sync::Arc};

use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, trace};

use crate::{
    file::io::{write_bytes_at, write_le_at},
    metadata::{
        root::Root,
        streams::{StreamHeader, SORTED_MASK, TABLES_HEADER_SIZE},
        tables::{calculate_table_row_size, HeapSizes, TableId, TableInfo, TableInfoRef},
        token::Token,
    },
    utils::{align_to, to_u32},
    writer::heaps::{
        BlobHeapBuilder, GuidHeapBuilder, HeapBuilder, StringHeapBuilder, UserStringHeapBuilder,
    },
    Error, Result,
};

/// Outcome of a successful [`MetadataBuilder::serialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Number of bytes handed to the sink
    pub bytes_written: usize,
    /// Final row count of every table, indexed by table tag
    pub row_counts: [u32; TableId::COUNT],
}

/// Accumulates heaps and rows and serializes them as one metadata image.
#[derive(Debug)]
pub struct MetadataBuilder {
    config: WriterConfig,
    strings: StringHeapBuilder,
    userstrings: UserStringHeapBuilder,
    guids: GuidHeapBuilder,
    blobs: BlobHeapBuilder,
    tables: TableStore,
}

impl MetadataBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new(config: WriterConfig) -> Self {
        MetadataBuilder {
            config,
            strings: StringHeapBuilder::new(),
            userstrings: UserStringHeapBuilder::new(),
            guids: GuidHeapBuilder::new(),
            blobs: BlobHeapBuilder::new(),
            tables: TableStore::default(),
        }
    }

    /// The configuration the image is written with.
    #[must_use]
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// `#Strings` offset of `value`; `""` is 0.
    ///
    /// # Errors
    /// See [`StringHeapBuilder::get_or_add`].
    pub fn add_string(&mut self, value: &str) -> Result<u32> {
        self.strings.get_or_add(value)
    }

    /// `#Strings` offset of `value`, allocating a non-zero entry even for `""`.
    ///
    /// # Errors
    /// See [`StringHeapBuilder::get_or_add_non_null`].
    pub fn add_string_non_null(&mut self, value: &str) -> Result<u32> {
        self.strings.get_or_add_non_null(value)
    }

    /// `#US` offset of `value`.
    ///
    /// # Errors
    /// See [`UserStringHeapBuilder::get_or_add`].
    pub fn add_user_string(&mut self, value: &str) -> Result<u32> {
        self.userstrings.get_or_add(value)
    }

    /// One-based `#GUID` index of `guid`.
    ///
    /// # Errors
    /// See [`GuidHeapBuilder::get_or_add`].
    pub fn add_guid(&mut self, guid: uguid::Guid) -> Result<u32> {
        self.guids.get_or_add(&guid.to_bytes())
    }

    /// `#Blob` offset of `value`; the empty blob is 0.
    ///
    /// # Errors
    /// See [`BlobHeapBuilder::get_or_add`].
    pub fn add_blob(&mut self, value: &[u8]) -> Result<u32> {
        self.blobs.get_or_add(value)
    }

    /// The `#Strings` builder.
    pub fn strings_mut(&mut self) -> &mut StringHeapBuilder {
        &mut self.strings
    }

    /// The `#US` builder.
    pub fn userstrings_mut(&mut self) -> &mut UserStringHeapBuilder {
        &mut self.userstrings
    }

    /// The `#GUID` builder.
    pub fn guids_mut(&mut self) -> &mut GuidHeapBuilder {
        &mut self.guids
    }

    /// The `#Blob` builder.
    pub fn blobs_mut(&mut self) -> &mut BlobHeapBuilder {
        &mut self.blobs
    }

    /// Add `row` to its table and return its token.
    ///
    /// Rows of unsorted tables are appended. A row of a sorted table is inserted at its ordered
    /// position and the table is sealed, since the returned token fixes that position.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCodedIndex`] if a coded index of `row` names a table outside its
    /// column, [`Error::IntegerRange`] once a table holds 2^24 - 1 rows, and
    /// [`Error::SortOrder`] for a sorted table that was sealed and `row` does not sort last.
    pub fn add_row<T: StoredRow>(&mut self, row: T) -> Result<Token> {
        row.validate()?;
        let list = T::list_mut(&mut self.tables);
        if T::TABLE_ID.is_sorted() {
            let handle = list.insert_sorted(row)?;
            return self.resolve(handle);
        }

        let rid = list.push(row, None)?;
        Token::from_parts(T::TABLE_ID, rid)
    }

    /// Add `row` to a sorted table without fixing its position.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `T` belongs to an unsorted table, and the errors of
    /// [`MetadataBuilder::add_row`].
    pub fn add_sorted_row<T: StoredRow>(&mut self, row: T) -> Result<RowHandle> {
        row.validate()?;
        T::list_mut(&mut self.tables).insert_sorted(row)
    }

    /// Token of the row behind `handle`.
    ///
    /// Resolving seals the table: rows added to it afterwards must sort after every existing
    /// row.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] for a handle this builder did not issue.
    pub fn resolve(&mut self, handle: RowHandle) -> Result<Token> {
        let rid = self.tables.resolve(handle)?;
        Token::from_parts(handle.table, rid)
    }

    /// Append `row` as a member of the row `owner`.
    ///
    /// Members have to be added grouped by owner, in owner order. List columns of the owner
    /// table that are left at 0 are derived from this ownership on serialization.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `owner` is not a token of the owner table,
    /// [`Error::InvalidReference`] if the owner row does not exist yet, and
    /// [`Error::SortOrder`] if `owner` precedes the owner of the previously added member, and
    /// [`Error::InvalidCodedIndex`] if a coded index of `row` names a table outside its column.
    pub fn add_owned_row<T: OwnedRow>(&mut self, owner: Token, row: T) -> Result<Token> {
        row.validate()?;
        let (table, owner_rid) = owner.decode()?;
        if table != T::OWNER {
            return Err(malformed_error!(
                "{:?} rows are owned by {:?}, not {:?}",
                T::TABLE_ID,
                T::OWNER,
                table
            ));
        }

        let rows = to_u32(self.tables.len(T::OWNER))?;
        if owner_rid == 0 || owner_rid > rows {
            return Err(Error::InvalidReference {
                table,
                rid: owner_rid,
                rows,
            });
        }

        let list = T::list_mut(&mut self.tables);
        if list.last_owner().is_some_and(|last| owner_rid < last) {
            return Err(Error::SortOrder(T::TABLE_ID));
        }

        let rid = list.push(row, Some(owner_rid))?;
        Token::from_parts(T::TABLE_ID, rid)
    }

    /// Number of rows added to `table_id` so far.
    #[must_use]
    pub fn row_count(&self, table_id: TableId) -> usize {
        self.tables.len(table_id)
    }

    /// The rows added to the table of `T`, in their current order.
    #[must_use]
    pub fn rows<T: StoredRow>(&self) -> &[T] {
        T::list(&self.tables).rows()
    }

    /// All accumulated rows.
    #[must_use]
    pub fn tables(&self) -> &TableStore {
        &self.tables
    }

    /// Serialize the image and write it to `sink`.
    ///
    /// Nothing reaches `sink` unless the complete image was encoded successfully.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] or [`Error::InvalidCodedIndex`] for a row that
    /// references something that does not exist in the final image, [`Error::Malformed`] for
    /// an unrepresentable root or heap, and [`Error::Io`] if `sink` fails.
    pub fn serialize<W: Write>(mut self, sink: &mut W) -> Result<WriteSummary> {
        self.tables.derive_lists()?;
        let row_counts = self.tables.row_counts()?;

        let heap_sizes = HeapSizes::from_heap_lengths(
            heap_len(&self.strings)?,
            heap_len(&self.guids)?,
            heap_len(&self.blobs)?,
        );
        let info: TableInfoRef = Arc::new(TableInfo::from_row_counts(&row_counts, heap_sizes));
        debug!(heap_sizes = heap_sizes.bits(), "column widths");

        let tables = self.build_tables(&row_counts, &info)?;

        let mut streams: Vec<(&'static str, Vec<u8>)> = vec![("#~", tables)];
        let heaps: [&dyn HeapBuilder; 4] =
            [&self.strings, &self.userstrings, &self.guids, &self.blobs];
        for heap in heaps {
            if heap.is_accessed() {
                streams.push((heap.heap_name(), heap.build()?));
            } else {
                trace!(heap = heap.heap_name(), "omitting unused heap");
            }
        }

        let mut headers = Vec::with_capacity(streams.len());
        for (name, content) in &streams {
            headers.push(StreamHeader {
                offset: 0,
                size: to_u32(content.len())?,
                name: (*name).to_string(),
            });
        }

        let mut root = Root::new(
            self.config.root_major_version,
            self.config.root_minor_version,
            &self.config.version,
            headers,
        )?;

        let mut position = root.size();
        for header in &mut root.stream_headers {
            header.offset = to_u32(position)?;
            position += header.size as usize;
        }

        let mut data = vec![0u8; position];
        let mut offset = 0;
        root.write(&mut data, &mut offset)?;
        for (_, content) in &streams {
            write_bytes_at(&mut data, &mut offset, content)?;
        }

        sink.write_all(&data)?;
        sink.flush()?;

        debug!(
            bytes = data.len(),
            streams = streams.len(),
            "serialized metadata image"
        );

        Ok(WriteSummary {
            bytes_written: data.len(),
            row_counts,
        })
    }

    /// Serialize the image into a new buffer.
    ///
    /// # Errors
    /// See [`MetadataBuilder::serialize`].
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.serialize(&mut buffer)?;
        Ok(buffer)
    }

    fn build_tables(&self, row_counts: &[u32; TableId::COUNT], info: &TableInfoRef) -> Result<Vec<u8>> {
        let mut valid = 0u64;
        let mut size = TABLES_HEADER_SIZE;
        for table_id in TableId::iter() {
            let rows = row_counts[table_id as usize];
            if rows == 0 {
                continue;
            }

            valid |= table_id.mask();
            size += 4 + rows as usize * calculate_table_row_size(table_id, info) as usize;
        }

        let mut data = vec![0u8; align_to(size, 4)];
        let mut offset = 0;
        write_le_at(&mut data, &mut offset, 0u32)?;
        write_le_at(&mut data, &mut offset, self.config.tables_major_version)?;
        write_le_at(&mut data, &mut offset, self.config.tables_minor_version)?;
        write_le_at(&mut data, &mut offset, info.heap_sizes().bits())?;
        write_le_at(&mut data, &mut offset, 1u8)?;
        write_le_at(&mut data, &mut offset, valid)?;
        write_le_at(&mut data, &mut offset, SORTED_MASK)?;

        for table_id in TableId::iter().filter(|table_id| valid & table_id.mask() != 0) {
            write_le_at(&mut data, &mut offset, row_counts[table_id as usize])?;
        }

        for table_id in TableId::iter().filter(|table_id| valid & table_id.mask() != 0) {
            trace!(table = ?table_id, rows = row_counts[table_id as usize], "writing table");
            self.tables.write_table(table_id, &mut data, &mut offset, info)?;
        }

        debug!(valid, size = data.len(), "#~ stream");
        Ok(data)
    }
}

fn heap_len(heap: &dyn HeapBuilder) -> Result<usize> {
    let size = heap.calculate_size()?;
    usize::try_from(size).map_err(|_| malformed_error!("{} heap is too large", heap.heap_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            image::MetadataImage,
            tables::{
                CodedIndex, CodedIndexType, ConstantRaw, CustomAttributeRaw, FieldRaw,
                MethodDefRaw, ModuleRaw, NestedClassRaw, ParamRaw, TypeDefRaw, TypeRefRaw,
            },
        },
        Error,
    };

    fn type_def(builder: &mut MetadataBuilder, name: &str) -> Token {
        let type_name = builder.add_string(name).unwrap();
        builder
            .add_row(TypeDefRaw {
                type_name,
                ..Default::default()
            })
            .unwrap()
    }

    #[test]
    fn unused_heaps_are_omitted() {
        let mut builder = MetadataBuilder::new(WriterConfig::default());
        builder.add_row(ModuleRaw::default()).unwrap();

        let data = builder.to_bytes().unwrap();
        let image = MetadataImage::read(&data).unwrap();

        assert_eq!(image.root().stream_number, 1);
        assert!(image.root().stream("#~").is_some());
        assert_eq!(image.tables().unwrap().row_count(TableId::Module), 1);
    }

    #[test]
    fn tables_header() {
        let mut builder = MetadataBuilder::new(WriterConfig::clr2().with_tables_version(1, 1));
        builder.add_row(ModuleRaw::default()).unwrap();
        builder.add_blob(&[1]).unwrap();

        let data = builder.to_bytes().unwrap();
        let image = MetadataImage::read(&data).unwrap();
        assert_eq!(image.root().version, "v2.0.50727");

        let tables = image.tables().unwrap();
        assert_eq!(tables.major_version, 1);
        assert_eq!(tables.minor_version, 1);
        assert_eq!(tables.valid, TableId::Module.mask());
        assert_eq!(tables.sorted, SORTED_MASK);
        assert_eq!(image.root().stream_headers[1].name, "#Blob");
    }

    #[test]
    fn owned_rows_derive_lists() {
        let mut builder = MetadataBuilder::new(WriterConfig::default());
        let first = type_def(&mut builder, "First");
        let second = type_def(&mut builder, "Second");
        let third = type_def(&mut builder, "Third");

        builder.add_owned_row(first, FieldRaw::default()).unwrap();
        builder.add_owned_row(first, FieldRaw::default()).unwrap();
        builder.add_owned_row(third, FieldRaw::default()).unwrap();
        let method = builder.add_owned_row(second, MethodDefRaw::default()).unwrap();
        builder.add_owned_row(method, ParamRaw::default()).unwrap();

        assert!(matches!(
            builder.add_owned_row(second, FieldRaw::default()),
            Err(Error::SortOrder(TableId::Field))
        ));
        assert!(matches!(
            builder.add_owned_row(method, FieldRaw::default()),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(
            builder.add_owned_row(Token::new(0x0200_0009), FieldRaw::default()),
            Err(Error::InvalidReference { .. })
        ));

        let data = builder.to_bytes().unwrap();
        let image = MetadataImage::read(&data).unwrap();

        let types = image.table::<TypeDefRaw>().unwrap();
        let lists: Vec<(u32, u32)> = types
            .iter()
            .map(|row| (row.field_list, row.method_list))
            .collect();
        assert_eq!(lists, vec![(1, 1), (3, 1), (3, 2)]);
        assert_eq!(image.table::<MethodDefRaw>().unwrap().get(1).unwrap().param_list, 1);
    }

    #[test]
    fn sorted_rows() {
        let mut builder = MetadataBuilder::new(WriterConfig::default());
        let outer = type_def(&mut builder, "Outer");
        let inner = type_def(&mut builder, "Inner");
        let field = builder.add_owned_row(outer, FieldRaw::default()).unwrap();

        let late = builder
            .add_sorted_row(CustomAttributeRaw {
                parent: CodedIndex::new(TableId::TypeDef, inner.row()),
                ..Default::default()
            })
            .unwrap();
        let early = builder
            .add_sorted_row(CustomAttributeRaw {
                parent: CodedIndex::new(TableId::Field, field.row()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(builder.resolve(early).unwrap(), Token::new(0x0C00_0001));
        assert_eq!(builder.resolve(late).unwrap(), Token::new(0x0C00_0002));

        let nested = builder
            .add_row(NestedClassRaw {
                nested_class: inner.row(),
                enclosing_class: outer.row(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(nested, Token::new(0x2900_0001));

        assert!(matches!(
            builder.add_sorted_row(CustomAttributeRaw {
                parent: CodedIndex::new(TableId::Field, 1),
                ..Default::default()
            }),
            Err(Error::SortOrder(TableId::CustomAttribute))
        ));
        assert!(matches!(
            builder.add_sorted_row(ModuleRaw::default()),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn dangling_reference_writes_nothing() {
        let mut builder = MetadataBuilder::new(WriterConfig::default());
        builder
            .add_sorted_row(ConstantRaw {
                parent: CodedIndex::new(TableId::Field, 4),
                ..Default::default()
            })
            .unwrap();

        let mut sink = Vec::new();
        assert!(matches!(
            builder.serialize(&mut sink),
            Err(Error::InvalidReference {
                table: TableId::Field,
                rid: 4,
                rows: 0
            })
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn coded_index_checked_on_append() {
        let mut builder = MetadataBuilder::new(WriterConfig::default());

        assert!(matches!(
            builder.add_row(TypeRefRaw {
                resolution_scope: CodedIndex::new(TableId::Field, 1),
                ..Default::default()
            }),
            Err(Error::InvalidCodedIndex {
                kind: CodedIndexType::ResolutionScope,
                ..
            })
        ));
        assert!(matches!(
            builder.add_row(TypeDefRaw {
                extends: CodedIndex::new(TableId::MethodDef, 1),
                ..Default::default()
            }),
            Err(Error::InvalidCodedIndex {
                kind: CodedIndexType::TypeDefOrRef,
                ..
            })
        ));
        assert_eq!(builder.row_count(TableId::TypeRef), 0);
        assert_eq!(builder.row_count(TableId::TypeDef), 0);

        let class = type_def(&mut builder, "Attr");
        assert!(matches!(
            builder.add_sorted_row(CustomAttributeRaw {
                parent: CodedIndex::new(TableId::TypeDef, class.row()),
                constructor: CodedIndex::new(TableId::Field, 1),
                ..Default::default()
            }),
            Err(Error::InvalidCodedIndex {
                kind: CodedIndexType::CustomAttributeType,
                ..
            })
        ));
        assert_eq!(builder.row_count(TableId::CustomAttribute), 0);

        builder
            .add_row(TypeRefRaw {
                resolution_scope: CodedIndex::null(),
                ..Default::default()
            })
            .unwrap();
    }

    #[test]
    fn sink_failure() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let builder = MetadataBuilder::new(WriterConfig::default());
        assert!(matches!(builder.serialize(&mut Broken), Err(Error::Io(_))));
    }
}
