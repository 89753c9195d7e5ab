//! Row accumulation of the writer.
//!
//! Rows are collected per table in a [`RowList`] until serialization. Unsorted tables grow by
//! appending, so a row's index is final the moment it is added. Rows of the sorted tables are
//! placed at their ordered position on insertion and handed out as a [`RowHandle`]; the first
//! time a handle of a table is resolved the table is sealed, and from then on only in-order
//! appends are accepted.
//!
//! Members that belong to an owner row (fields and methods of a type, parameters of a method,
//! events and properties of their map) may record that owner. The list columns of the owners
//! are then derived from the recorded ownership when the image is finalized.

use strum::{EnumCount, IntoEnumIterator};

use crate::{
    metadata::{
        tables::{
            AssemblyRaw, AssemblyRefRaw, ClassLayoutRaw, ConstantRaw, CustomAttributeRaw,
            DeclSecurityRaw, EventMapRaw, EventRaw, ExportedTypeRaw, FieldLayoutRaw,
            FieldMarshalRaw, FieldRaw, FieldRvaRaw, FileRaw, GenericParamConstraintRaw,
            GenericParamRaw, ImplMapRaw, InterfaceImplRaw, ManifestResourceRaw, MemberRefRaw,
            MethodDefRaw, MethodImplRaw, MethodSemanticsRaw, MethodSpecRaw, ModuleRaw,
            ModuleRefRaw, NestedClassRaw, ParamRaw, PropertyMapRaw, PropertyRaw, RowWritable,
            StandAloneSigRaw, TableId, TableInfoRef, TypeDefRaw, TypeRefRaw, TypeSpecRaw,
        },
        token::TOKEN_ROW_MAX,
    },
    utils::to_u32,
    Error, Result,
};

/// Placeholder for a row of a sorted table whose final index is not fixed yet.
///
/// Obtained from [`crate::MetadataBuilder::add_sorted_row`] and turned into a token with
/// [`crate::MetadataBuilder::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowHandle {
    /// The table the row was added to
    pub table: TableId,
    seq: u64,
}

/// The accumulated rows of one table.
#[derive(Debug)]
pub struct RowList<T> {
    rows: Vec<T>,
    handles: Vec<u64>,
    owners: Vec<Option<u32>>,
    keys: Vec<u64>,
    sealed: bool,
    next_handle: u64,
}

impl<T> Default for RowList<T> {
    fn default() -> Self {
        RowList {
            rows: Vec::new(),
            handles: Vec::new(),
            owners: Vec::new(),
            keys: Vec::new(),
            sealed: false,
            next_handle: 0,
        }
    }
}

impl<T: RowWritable> RowList<T> {
    /// The rows in their current order.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no row was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true once row positions of this table have been handed out.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn check_capacity(&self) -> Result<()> {
        if self.rows.len() >= TOKEN_ROW_MAX as usize {
            return Err(Error::IntegerRange(self.rows.len() as i64 + 1));
        }

        Ok(())
    }

    fn next_handle(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    /// Append `row`, returning its one-based index.
    pub(crate) fn push(&mut self, row: T, owner: Option<u32>) -> Result<u32> {
        self.check_capacity()?;

        let handle = self.next_handle();
        self.rows.push(row);
        self.handles.push(handle);
        self.owners.push(owner);
        self.keys.push(0);

        to_u32(self.rows.len())
    }

    /// The owner recorded for the last owned row, if any.
    pub(crate) fn last_owner(&self) -> Option<u32> {
        self.owners.iter().rev().find_map(|owner| *owner)
    }

    /// Insert `row` at its ordered position.
    ///
    /// Rows with equal keys keep their insertion order.
    pub(crate) fn insert_sorted(&mut self, row: T) -> Result<RowHandle> {
        let Some(key) = row.sort_key()? else {
            return Err(malformed_error!("{:?} is not a sorted table", T::TABLE_ID));
        };
        self.check_capacity()?;

        let position = self.keys.partition_point(|existing| *existing <= key);
        if self.sealed && position != self.rows.len() {
            return Err(Error::SortOrder(T::TABLE_ID));
        }

        let handle = self.next_handle();
        self.rows.insert(position, row);
        self.handles.insert(position, handle);
        self.owners.insert(position, None);
        self.keys.insert(position, key);

        Ok(RowHandle {
            table: T::TABLE_ID,
            seq: handle,
        })
    }

    /// Fix the order of the table and return the one-based index of the row behind `seq`.
    pub(crate) fn resolve(&mut self, seq: u64) -> Result<u32> {
        let Some(position) = self.handles.iter().position(|handle| *handle == seq) else {
            return Err(malformed_error!(
                "Unknown row handle {} for table {:?}",
                seq,
                T::TABLE_ID
            ));
        };

        self.sealed = true;
        to_u32(position + 1)
    }

    /// First owned row of every owner `1..=owner_count`.
    ///
    /// Owners without rows of their own start where the next owner starts, or one past the
    /// last row.
    pub(crate) fn list_starts(&self, owner_count: usize) -> Result<Vec<u32>> {
        let mut first = vec![None; owner_count];
        for (index, owner) in self.owners.iter().enumerate().rev() {
            let slot = owner.and_then(|owner| owner.checked_sub(1));
            if let Some(slot) = slot.and_then(|owner| first.get_mut(owner as usize)) {
                *slot = Some(to_u32(index + 1)?);
            }
        }

        let mut next = to_u32(self.rows.len() + 1)?;
        let mut starts = vec![0; owner_count];
        for (start, first) in starts.iter_mut().zip(first).rev() {
            if let Some(rid) = first {
                next = rid;
            }
            *start = next;
        }

        Ok(starts)
    }

    fn write_rows(&self, data: &mut [u8], offset: &mut usize, info: &TableInfoRef) -> Result<()> {
        for (index, row) in self.rows.iter().enumerate() {
            row.row_write(data, offset, to_u32(index + 1)?, info)?;
        }

        Ok(())
    }
}

/// A row type the writer can accumulate.
pub trait StoredRow: RowWritable {
    /// The rows of this type held by `store`.
    fn list(store: &TableStore) -> &RowList<Self>;

    /// Mutable access to the rows of this type held by `store`.
    fn list_mut(store: &mut TableStore) -> &mut RowList<Self>;
}

/// A row type whose rows form contiguous runs owned by a row of another table.
pub trait OwnedRow: StoredRow {
    /// The table of the owning rows.
    const OWNER: TableId;
}

impl OwnedRow for FieldRaw {
    const OWNER: TableId = TableId::TypeDef;
}

impl OwnedRow for MethodDefRaw {
    const OWNER: TableId = TableId::TypeDef;
}

impl OwnedRow for ParamRaw {
    const OWNER: TableId = TableId::MethodDef;
}

impl OwnedRow for EventRaw {
    const OWNER: TableId = TableId::EventMap;
}

impl OwnedRow for PropertyRaw {
    const OWNER: TableId = TableId::PropertyMap;
}

macro_rules! table_store {
    (
        $($field:ident: $variant:ident => $raw:ty),* $(,)?;
        skipped: $($skip:ident)|*
    ) => {
        /// The accumulated rows of every supported table.
        #[derive(Debug, Default)]
        pub struct TableStore {
            $($field: RowList<$raw>,)*
        }

        impl TableStore {
            /// Number of rows accumulated for `table_id`.
            #[must_use]
            pub fn len(&self, table_id: TableId) -> usize {
                match table_id {
                    $(TableId::$variant => self.$field.len(),)*
                    $(TableId::$skip)|* => 0,
                }
            }

            pub(crate) fn resolve(&mut self, handle: RowHandle) -> Result<u32> {
                match handle.table {
                    $(TableId::$variant => self.$field.resolve(handle.seq),)*
                    $(TableId::$skip)|* => Err(malformed_error!(
                        "Rows of {:?} are never written",
                        handle.table
                    )),
                }
            }

            pub(crate) fn write_table(
                &self,
                table_id: TableId,
                data: &mut [u8],
                offset: &mut usize,
                info: &TableInfoRef,
            ) -> Result<()> {
                match table_id {
                    $(TableId::$variant => self.$field.write_rows(data, offset, info),)*
                    $(TableId::$skip)|* => Ok(()),
                }
            }
        }

        $(
            impl StoredRow for $raw {
                fn list(store: &TableStore) -> &RowList<Self> {
                    &store.$field
                }

                fn list_mut(store: &mut TableStore) -> &mut RowList<Self> {
                    &mut store.$field
                }
            }
        )*
    };
}

table_store! {
    module: Module => ModuleRaw,
    type_ref: TypeRef => TypeRefRaw,
    type_def: TypeDef => TypeDefRaw,
    field: Field => FieldRaw,
    method_def: MethodDef => MethodDefRaw,
    param: Param => ParamRaw,
    interface_impl: InterfaceImpl => InterfaceImplRaw,
    member_ref: MemberRef => MemberRefRaw,
    constant: Constant => ConstantRaw,
    custom_attribute: CustomAttribute => CustomAttributeRaw,
    field_marshal: FieldMarshal => FieldMarshalRaw,
    decl_security: DeclSecurity => DeclSecurityRaw,
    class_layout: ClassLayout => ClassLayoutRaw,
    field_layout: FieldLayout => FieldLayoutRaw,
    stand_alone_sig: StandAloneSig => StandAloneSigRaw,
    event_map: EventMap => EventMapRaw,
    event: Event => EventRaw,
    property_map: PropertyMap => PropertyMapRaw,
    property: Property => PropertyRaw,
    method_semantics: MethodSemantics => MethodSemanticsRaw,
    method_impl: MethodImpl => MethodImplRaw,
    module_ref: ModuleRef => ModuleRefRaw,
    type_spec: TypeSpec => TypeSpecRaw,
    impl_map: ImplMap => ImplMapRaw,
    field_rva: FieldRVA => FieldRvaRaw,
    assembly: Assembly => AssemblyRaw,
    assembly_ref: AssemblyRef => AssemblyRefRaw,
    file: File => FileRaw,
    exported_type: ExportedType => ExportedTypeRaw,
    manifest_resource: ManifestResource => ManifestResourceRaw,
    nested_class: NestedClass => NestedClassRaw,
    generic_param: GenericParam => GenericParamRaw,
    method_spec: MethodSpec => MethodSpecRaw,
    generic_param_constraint: GenericParamConstraint => GenericParamConstraintRaw;
    skipped: FieldPtr
        | MethodPtr
        | ParamPtr
        | EventPtr
        | PropertyPtr
        | EncLog
        | EncMap
        | AssemblyProcessor
        | AssemblyOS
        | AssemblyRefProcessor
        | AssemblyRefOS
}

impl TableStore {
    /// Final row count of every table, indexed by table tag.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a count does not fit in 32 bits.
    pub fn row_counts(&self) -> Result<[u32; TableId::COUNT]> {
        let mut counts = [0u32; TableId::COUNT];
        for table_id in TableId::iter() {
            counts[table_id as usize] = to_u32(self.len(table_id))?;
        }

        Ok(counts)
    }

    /// Fill list columns left at 0 from the recorded ownership.
    pub(crate) fn derive_lists(&mut self) -> Result<()> {
        let starts = self.field.list_starts(self.type_def.len())?;
        fill_list(&mut self.type_def, &starts, |row| &mut row.field_list);

        let starts = self.method_def.list_starts(self.type_def.len())?;
        fill_list(&mut self.type_def, &starts, |row| &mut row.method_list);

        let starts = self.param.list_starts(self.method_def.len())?;
        fill_list(&mut self.method_def, &starts, |row| &mut row.param_list);

        let starts = self.event.list_starts(self.event_map.len())?;
        fill_list(&mut self.event_map, &starts, |row| &mut row.event_list);

        let starts = self.property.list_starts(self.property_map.len())?;
        fill_list(&mut self.property_map, &starts, |row| &mut row.property_list);

        Ok(())
    }
}

fn fill_list<O>(owners: &mut RowList<O>, starts: &[u32], column: fn(&mut O) -> &mut u32) {
    for (row, start) in owners.rows.iter_mut().zip(starts) {
        let list = column(row);
        if *list == 0 {
            *list = *start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::tables::CodedIndex;

    fn attribute(parent: u32) -> CustomAttributeRaw {
        CustomAttributeRaw {
            parent: CodedIndex::new(TableId::TypeDef, parent),
            ..Default::default()
        }
    }

    #[test]
    fn sorted_insertion() {
        let mut list = RowList::<CustomAttributeRaw>::default();
        let third = list.insert_sorted(attribute(3)).unwrap();
        let first = list.insert_sorted(attribute(1)).unwrap();
        let second = list.insert_sorted(attribute(1)).unwrap();

        let parents: Vec<u32> = list.rows().iter().map(|row| row.parent.row).collect();
        assert_eq!(parents, vec![1, 1, 3]);

        assert_eq!(list.resolve(third.seq).unwrap(), 3);
        assert_eq!(list.resolve(first.seq).unwrap(), 1);
        assert_eq!(list.resolve(second.seq).unwrap(), 2);
        assert!(list.is_sealed());
    }

    #[test]
    fn sealed_rejects_out_of_order() {
        let mut list = RowList::<CustomAttributeRaw>::default();
        let handle = list.insert_sorted(attribute(2)).unwrap();
        list.resolve(handle.seq).unwrap();

        assert!(matches!(
            list.insert_sorted(attribute(1)),
            Err(Error::SortOrder(TableId::CustomAttribute))
        ));
        assert_eq!(list.len(), 1);

        assert!(list.insert_sorted(attribute(2)).is_ok());
        assert!(list.insert_sorted(attribute(5)).is_ok());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn unsorted_table_has_no_order() {
        let mut list = RowList::<TypeRefRaw>::default();
        assert!(matches!(
            list.insert_sorted(TypeRefRaw::default()),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(list.resolve(7), Err(Error::Malformed { .. })));
    }

    #[test]
    fn list_starts() {
        let mut fields = RowList::<FieldRaw>::default();
        assert_eq!(fields.list_starts(2).unwrap(), vec![1, 1]);

        fields.push(FieldRaw::default(), Some(1)).unwrap();
        fields.push(FieldRaw::default(), Some(1)).unwrap();
        fields.push(FieldRaw::default(), Some(3)).unwrap();
        assert_eq!(fields.last_owner(), Some(3));

        assert_eq!(fields.list_starts(4).unwrap(), vec![1, 3, 3, 4]);
    }

    #[test]
    fn derive_lists_keeps_explicit_columns() {
        let mut store = TableStore::default();
        store.type_def.push(TypeDefRaw::default(), None).unwrap();
        store
            .type_def
            .push(
                TypeDefRaw {
                    method_list: 7,
                    ..Default::default()
                },
                None,
            )
            .unwrap();
        store.field.push(FieldRaw::default(), Some(2)).unwrap();

        store.derive_lists().unwrap();

        let rows = store.type_def.rows();
        assert_eq!((rows[0].field_list, rows[0].method_list), (1, 1));
        assert_eq!((rows[1].field_list, rows[1].method_list), (1, 7));

        let counts = store.row_counts().unwrap();
        assert_eq!(counts[TableId::TypeDef as usize], 2);
        assert_eq!(counts[TableId::Field as usize], 1);
        assert_eq!(counts[TableId::FieldPtr as usize], 0);
    }
}
