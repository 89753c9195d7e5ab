//! StandAloneSig table (ID 0x11): signatures not attached to a member, such as the local
//! variable signatures of method bodies and the call site signatures of `calli`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
