use thiserror::Error;

/// Raised when bytes at a given offset do not form a record of the expected shape.
///
/// Only corrupted or truncated files produce these. A decode failure affects the
/// single lookup that triggered it; the rest of the file stays readable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("offset {offset} lies outside the {len}-byte buffer")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("record at offset {offset} has no name terminator")]
    UnterminatedName { offset: usize },

    #[error("record at offset {offset} is truncated in its {field} field")]
    Truncated { offset: usize, field: &'static str },

    #[error("index of {count} entries does not fit in a {len}-byte buffer")]
    IndexOutOfBounds { count: usize, len: usize },
}
