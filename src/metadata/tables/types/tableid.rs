use strum::{EnumCount, EnumIter, FromRepr};

use crate::Error;

/// Identifiers of the metadata tables of the `#~` stream, by their ECMA-335 tag.
///
/// The tags are fixed by the file format and define both the bit position in the `valid` and
/// `sorted` masks of the tables header and the order in which tables are laid out. Iterating
/// with [`strum::IntoEnumIterator`] yields the tables in that order.
///
/// ## Skipped tables
///
/// The pointer tables (`FieldPtr`, `MethodPtr`, `ParamPtr`, `EventPtr`, `PropertyPtr`), the
/// edit-and-continue tables (`EncLog`, `EncMap`) and the processor/OS tables are never
/// interpreted. Their rows are consumed by width when reading, see [`TableId::is_skipped`].
///
/// ## Reference
/// * [ECMA-335 Partition II, Section 22](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Metadata Tables
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum TableId {
    /// `Module` (0x00) - the single row describing the current module
    Module = 0x00,
    /// `TypeRef` (0x01) - references to types defined in other modules or assemblies
    TypeRef = 0x01,
    /// `TypeDef` (0x02) - types defined in this module
    TypeDef = 0x02,
    /// `FieldPtr` (0x03) - indirection table of unoptimized images, skipped
    FieldPtr = 0x03,
    /// `Field` (0x04) - field definitions
    Field = 0x04,
    /// `MethodPtr` (0x05) - indirection table of unoptimized images, skipped
    MethodPtr = 0x05,
    /// `MethodDef` (0x06) - method definitions
    MethodDef = 0x06,
    /// `ParamPtr` (0x07) - indirection table of unoptimized images, skipped
    ParamPtr = 0x07,
    /// `Param` (0x08) - parameter definitions
    Param = 0x08,
    /// `InterfaceImpl` (0x09) - interfaces implemented by types, sorted by class
    InterfaceImpl = 0x09,
    /// `MemberRef` (0x0A) - references to fields and methods of other types
    MemberRef = 0x0A,
    /// `Constant` (0x0B) - compile-time constants, sorted by parent
    Constant = 0x0B,
    /// `CustomAttribute` (0x0C) - custom attribute applications, sorted by parent
    CustomAttribute = 0x0C,
    /// `FieldMarshal` (0x0D) - marshalling descriptors, sorted by parent
    FieldMarshal = 0x0D,
    /// `DeclSecurity` (0x0E) - declarative security, sorted by parent
    DeclSecurity = 0x0E,
    /// `ClassLayout` (0x0F) - explicit type layout
    ClassLayout = 0x0F,
    /// `FieldLayout` (0x10) - explicit field offsets, sorted by field
    FieldLayout = 0x10,
    /// `StandAloneSig` (0x11) - stand-alone signatures
    StandAloneSig = 0x11,
    /// `EventMap` (0x12) - owner type of each run of events
    EventMap = 0x12,
    /// `EventPtr` (0x13) - indirection table of unoptimized images, skipped
    EventPtr = 0x13,
    /// `Event` (0x14) - event definitions
    Event = 0x14,
    /// `PropertyMap` (0x15) - owner type of each run of properties
    PropertyMap = 0x15,
    /// `PropertyPtr` (0x16) - indirection table of unoptimized images, skipped
    PropertyPtr = 0x16,
    /// `Property` (0x17) - property definitions
    Property = 0x17,
    /// `MethodSemantics` (0x18) - event and property accessors, sorted by association
    MethodSemantics = 0x18,
    /// `MethodImpl` (0x19) - explicit method overrides
    MethodImpl = 0x19,
    /// `ModuleRef` (0x1A) - references to other modules
    ModuleRef = 0x1A,
    /// `TypeSpec` (0x1B) - type specifications
    TypeSpec = 0x1B,
    /// `ImplMap` (0x1C) - P/Invoke mappings, sorted by member forwarded
    ImplMap = 0x1C,
    /// `FieldRVA` (0x1D) - initial data of fields, sorted by field
    FieldRVA = 0x1D,
    /// `EncLog` (0x1E) - edit-and-continue log, skipped
    EncLog = 0x1E,
    /// `EncMap` (0x1F) - edit-and-continue map, skipped
    EncMap = 0x1F,
    /// `Assembly` (0x20) - the assembly manifest
    Assembly = 0x20,
    /// `AssemblyProcessor` (0x21) - unused, skipped
    AssemblyProcessor = 0x21,
    /// `AssemblyOS` (0x22) - unused, skipped
    AssemblyOS = 0x22,
    /// `AssemblyRef` (0x23) - referenced assemblies
    AssemblyRef = 0x23,
    /// `AssemblyRefProcessor` (0x24) - unused, skipped
    AssemblyRefProcessor = 0x24,
    /// `AssemblyRefOS` (0x25) - unused, skipped
    AssemblyRefOS = 0x25,
    /// `File` (0x26) - files of a multi-module assembly
    File = 0x26,
    /// `ExportedType` (0x27) - types exported from other modules of the assembly
    ExportedType = 0x27,
    /// `ManifestResource` (0x28) - manifest resources
    ManifestResource = 0x28,
    /// `NestedClass` (0x29) - nesting relations, sorted by nested class
    NestedClass = 0x29,
    /// `GenericParam` (0x2A) - generic parameters, sorted by owner
    GenericParam = 0x2A,
    /// `MethodSpec` (0x2B) - generic method instantiations
    MethodSpec = 0x2B,
    /// `GenericParamConstraint` (0x2C) - generic parameter constraints, sorted by owner
    GenericParamConstraint = 0x2C,
}

impl TableId {
    /// Returns true for tables whose rows are consumed by width and never interpreted.
    #[must_use]
    pub fn is_skipped(self) -> bool {
        matches!(
            self,
            TableId::FieldPtr
                | TableId::MethodPtr
                | TableId::ParamPtr
                | TableId::EventPtr
                | TableId::PropertyPtr
                | TableId::EncLog
                | TableId::EncMap
                | TableId::AssemblyProcessor
                | TableId::AssemblyOS
                | TableId::AssemblyRefProcessor
                | TableId::AssemblyRefOS
        )
    }

    /// Returns true for tables the writer keeps ordered by their owner column.
    #[must_use]
    pub fn is_sorted(self) -> bool {
        matches!(
            self,
            TableId::InterfaceImpl
                | TableId::Constant
                | TableId::CustomAttribute
                | TableId::FieldMarshal
                | TableId::DeclSecurity
                | TableId::FieldLayout
                | TableId::FieldRVA
                | TableId::ImplMap
                | TableId::MethodSemantics
                | TableId::NestedClass
                | TableId::GenericParam
                | TableId::GenericParamConstraint
        )
    }

    /// Bit of this table in the `valid` and `sorted` masks.
    #[must_use]
    pub fn mask(self) -> u64 {
        1u64 << (self as u8)
    }
}

impl TryFrom<u8> for TableId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TableId::from_repr(value).ok_or(Error::UnknownTable(value))
    }
}
