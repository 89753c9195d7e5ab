use crate::metadata::token::Token;

/// A row of the `EventMap` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventMapRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Type owning the events
    pub parent: u32,
    /// First row of the run of events owned by `parent`
    pub event_list: u32,
}
