use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `Event` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `EventAttributes` bitmask
    pub flags: u32,
    /// Event name, `#Strings` index
    pub name: u32,
    /// Delegate type of the event
    pub event_type: CodedIndex,
}
