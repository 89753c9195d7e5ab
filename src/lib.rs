// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![allow(clippy::too_many_arguments)]

//! # cilmeta
//!
//! Reader and writer for the tabular metadata of .NET assemblies, as defined by
//! ECMA-335 Partition II.
//!
//! The crate covers the self-describing core of the metadata format: the compressed
//! integer encoding, the four heaps (`#Strings`, `#US`, `#GUID`, `#Blob`), metadata tokens,
//! the 13 coded index kinds, and the `#~` tables stream with its 45 table tags. The byte width
//! of most columns depends on the final size of other tables and heaps, so reading computes
//! widths from the stream header before touching any row, and writing accumulates every row
//! first and only then lays out the bytes.
//!
//! The PE container, IL method bodies and the logical type system are not part of this crate.
//! Callers hand in a byte slice positioned at the metadata root (`BSJB`) and receive the
//! serialized metadata back as bytes.
//!
//! ## Quick Start
//!
//! ### Reading
//!
//! ```rust,no_run
//! use cilmeta::prelude::*;
//!
//! let data: Vec<u8> = std::fs::read("metadata.bin")?;
//! let image = MetadataImage::read(&data)?;
//!
//! if let Some(typedefs) = image.table::<TypeDefRaw>() {
//!     for typedef in typedefs.iter() {
//!         println!(
//!             "{}.{}",
//!             image.strings().get(typedef.type_namespace)?,
//!             image.strings().get(typedef.type_name)?
//!         );
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Writing
//!
//! ```rust
//! use cilmeta::prelude::*;
//!
//! let mut builder = MetadataBuilder::new(WriterConfig::default());
//! let name = builder.add_string("A.dll")?;
//! let mvid = builder.add_guid(uguid::guid!("01234567-89ab-cdef-0123-456789abcdef"))?;
//! builder.add_row(ModuleRaw {
//!     name,
//!     mvid,
//!     ..Default::default()
//! })?;
//!
//! let mut output = Vec::new();
//! let summary = builder.serialize(&mut output)?;
//! assert_eq!(summary.bytes_written, output.len());
//!
//! let image = MetadataImage::read(&output)?;
//! assert_eq!(image.tables().map(|t| t.row_count(TableId::Module)), Some(1));
//! # Ok::<(), cilmeta::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`utils`] - Compressed integer codec and small numeric helpers
//! - [`file`] - Bounds-checked little-endian primitives and the cursor [`Parser`]
//! - [`metadata`] - Tokens, the metadata root, heaps, tables and the [`MetadataImage`] reader
//! - [`writer`] - Heap builders and the two-phase [`MetadataBuilder`]
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! A metadata image is all-or-nothing: any structural problem while reading aborts the whole
//! read, and the writer buffers and validates the complete image before a single byte reaches
//! the output sink.
//!
//! ## References
//!
//! - [ECMA-335 Standard](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Partition II, sections 22 and 24

#[macro_use]
pub(crate) mod error;

pub mod file;
pub mod metadata;
pub mod prelude;
pub mod utils;
pub mod writer;

/// `cilmeta` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `cilmeta` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

pub use file::parser::Parser;
pub use metadata::image::MetadataImage;
pub use writer::{MetadataBuilder, WriteSummary, WriterConfig};
