//! # cilmeta Prelude
//!
//! Convenient re-exports of the most commonly used types and traits. Import this module to get
//! the reader, the writer and every row type in one line.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all cilmeta operations
pub use crate::Error;

/// The result type used throughout cilmeta
pub use crate::Result;

/// Low-level cursor over metadata bytes
pub use crate::Parser;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Reader entry point
pub use crate::MetadataImage;

/// Writer entry point and its configuration
pub use crate::{MetadataBuilder, WriteSummary, WriterConfig};

/// Handles of rows in sorted tables
pub use crate::writer::RowHandle;

// ================================================================================================
// Metadata System - Core Types
// ================================================================================================

/// Metadata token type for referencing table entries
pub use crate::metadata::token::Token;

/// Metadata root and its signature
pub use crate::metadata::root::{Root, CIL_HEADER_MAGIC};

/// Heap views of a parsed image
pub use crate::metadata::streams::{Blob, Guid, Strings, TablesHeader, UserStrings};

// ================================================================================================
// Metadata Tables
// ================================================================================================

/// Table infrastructure
pub use crate::metadata::tables::{
    CodedIndex, CodedIndexType, HeapSizes, MetadataTable, RowReadable, RowWritable, TableAccess,
    TableId, TableInfo, TableInfoRef,
};

/// Row types of every supported table
pub use crate::metadata::tables::{
    AssemblyRaw, AssemblyRefRaw, ClassLayoutRaw, ConstantRaw, CustomAttributeRaw,
    DeclSecurityRaw, EventMapRaw, EventRaw, ExportedTypeRaw, FieldLayoutRaw, FieldMarshalRaw,
    FieldRaw, FieldRvaRaw, FileRaw, GenericParamConstraintRaw, GenericParamRaw, ImplMapRaw,
    InterfaceImplRaw, ManifestResourceRaw, MemberRefRaw, MethodDefRaw, MethodImplRaw,
    MethodSemanticsRaw, MethodSpecRaw, ModuleRaw, ModuleRefRaw, NestedClassRaw, ParamRaw,
    PropertyMapRaw, PropertyRaw, StandAloneSigRaw, TypeDefRaw, TypeRefRaw, TypeSpecRaw,
};

// ================================================================================================
// Encoding Utilities
// ================================================================================================

/// Compressed integer codec
pub use crate::utils::{
    read_compressed_int, read_compressed_uint, write_compressed_int, write_compressed_uint,
};
