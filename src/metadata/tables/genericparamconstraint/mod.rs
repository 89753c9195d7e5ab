//! GenericParamConstraint table (ID 0x2C). Sorted by `owner`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
