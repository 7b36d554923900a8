use std::ops::Range;

/// File holding actor records, indexed by actor name.
pub const ACTOR_FILE_NAME: &str = "actordata";

/// File holding movie records, indexed by `(title, year)`.
pub const MOVIE_FILE_NAME: &str = "moviedata";

// Leading little-endian `u32` record count
pub const HEADER_SIZE: usize = 4;
pub const RECORD_COUNT_RANGE: Range<usize> = 0..HEADER_SIZE;

/// Width of one index entry and of one linked offset inside a record.
pub const OFFSET_SIZE: usize = 4;

/// Width of the `numContents` field that precedes the linked offsets.
pub const COUNT_SIZE: usize = 2;

/// Movie records store `year - YEAR_BASE` in a single unsigned byte.
pub const YEAR_BASE: u16 = 1900;
pub const MAX_YEAR: u16 = YEAR_BASE + u8::MAX as u16;
