//! ECMA-335 metadata: root, streams, tables and tokens.
//!
//! This module contains the read side of the codec and the shared vocabulary of the writer.
//!
//! # Key Components
//!
//! - [`image`] - [`image::MetadataImage`], the reader entry point
//! - [`root`] - the `BSJB` metadata root and its stream directory
//! - [`streams`] - the `#~` stream and the four heaps
//! - [`tables`] - table identifiers, coded indices, column widths and one row type per table
//! - [`token`] - metadata tokens and the compact `TypeDefOrRef` signature encoding
//!
//! # Examples
//!
//! ```rust,ignore
//! use cilmeta::{metadata::tables::ModuleRaw, MetadataImage};
//!
//! let image = MetadataImage::read(&metadata_bytes)?;
//! let module = image.table::<ModuleRaw>().and_then(|table| table.get(1));
//! # Ok::<(), cilmeta::Error>(())
//! ```

/// Reading a complete metadata image
pub mod image;
/// Implementation of the root metadata structure
pub mod root;
/// Implementation of all metadata streams (tables, heaps, etc.)
pub mod streams;
/// Implementation of the .NET metadata tables
pub mod tables;
/// Commonly used metadata token type
pub mod token;
