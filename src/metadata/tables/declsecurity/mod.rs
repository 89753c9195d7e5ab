//! DeclSecurity table (ID 0x0E): declarative security permission sets, sorted by `parent`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
