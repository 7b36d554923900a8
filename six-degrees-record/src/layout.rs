//! Padding and alignment arithmetic shared by the decoder and the fixture writer.
//!
//! ## Record Layout
//!
//! All positions are relative to the first byte of the record's name:
//!
//! - **`0 → L`**: name bytes, followed by a `\0` terminator.
//! - **Movies only**: one byte holding `year - 1900`, right after the terminator.
//! - **Padding** (`0` or `1` byte) so the count field starts at an even position.
//! - **Count**: little-endian `u16` number of linked records.
//! - **Padding** (`0` or `2` bytes) so the offset array starts at a multiple of 4.
//! - **Offsets**: `count` little-endian `u32` offsets into the *other* file.
//!
//! For a movie title of length `L` this puts the count `L + 2` bytes after the
//! name when `L` is even and `L + 3` when it is odd.

use crate::constants::*;
use crate::decode_error::DecodeError;

/// Which of the two files a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Actor,
    Movie,
}

impl RecordKind {
    /// Bytes occupied by the name, its terminator and (for movies) the year byte.
    #[inline]
    pub const fn header_len(self, name_len: usize) -> usize {
        match self {
            RecordKind::Actor => name_len + 1,
            RecordKind::Movie => name_len + 2,
        }
    }

    /// Position of the `u16` count field.
    #[inline]
    pub const fn count_field_offset(self, name_len: usize) -> usize {
        round_up(self.header_len(name_len), 2)
    }

    /// Position of the first linked offset.
    #[inline]
    pub const fn offsets_field_offset(self, name_len: usize) -> usize {
        round_up(self.count_field_offset(name_len) + COUNT_SIZE, OFFSET_SIZE)
    }

    /// Total size of a record with the given name length and link count.
    #[inline]
    pub const fn record_size(self, name_len: usize, num_contents: usize) -> usize {
        self.offsets_field_offset(name_len) + num_contents * OFFSET_SIZE
    }

    /// Name of the file holding records of this kind.
    pub const fn file_name(self) -> &'static str {
        match self {
            RecordKind::Actor => ACTOR_FILE_NAME,
            RecordKind::Movie => MOVIE_FILE_NAME,
        }
    }

    /// The kind of record that this kind's linked offsets point at.
    pub const fn linked_kind(self) -> RecordKind {
        match self {
            RecordKind::Actor => RecordKind::Movie,
            RecordKind::Movie => RecordKind::Actor,
        }
    }
}

#[inline]
const fn round_up(value: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (value + align - 1) & !(align - 1)
}

#[inline]
pub fn read_u16_le(buf: &[u8], at: usize) -> Option<u16> {
    let bytes = buf.get(at..at.checked_add(2)?)?;
    Some(u16::from_le_bytes(bytes.try_into().ok()?))
}

#[inline]
pub fn read_u32_le(buf: &[u8], at: usize) -> Option<u32> {
    let bytes = buf.get(at..at.checked_add(4)?)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

/// Reads the leading record count of a data file.
pub fn record_count(buf: &[u8]) -> Result<usize, DecodeError> {
    read_u32_le(buf, RECORD_COUNT_RANGE.start)
        .map(|n| n as usize)
        .ok_or(DecodeError::Truncated {
            offset: 0,
            field: "record count",
        })
}

/// Byte range of the sorted offset index that follows the record count.
pub fn index_range(buf: &[u8]) -> Result<std::ops::Range<usize>, DecodeError> {
    let count = record_count(buf)?;
    let end = count
        .checked_mul(OFFSET_SIZE)
        .and_then(|n| n.checked_add(HEADER_SIZE))
        .filter(|&end| end <= buf.len())
        .ok_or(DecodeError::IndexOutOfBounds {
            count,
            len: buf.len(),
        })?;

    Ok(HEADER_SIZE..end)
}
