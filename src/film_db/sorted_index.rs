use crate::{DatabaseError, Result};
use six_degrees_record::{RecordKind, constants::OFFSET_SIZE, layout::index_range};
use std::cmp::Ordering;

/// The sorted offset table at the front of a data file.
///
/// Entry `i` is the offset of the `i`-th smallest record key. Searching never
/// allocates: callers supply a comparator that inspects the record in place.
#[derive(Debug, Clone, Copy)]
pub struct SortedIndex<'a> {
    buf: &'a [u8],
    entries: &'a [u8],
    kind: RecordKind,
}

impl<'a> SortedIndex<'a> {
    /// Validates the header of `buf` and borrows its index table.
    ///
    /// # Errors
    /// `Malformed` if the record count is unreadable or the table would extend
    /// past the end of the buffer.
    pub fn new(buf: &'a [u8], kind: RecordKind) -> Result<Self> {
        let range = index_range(buf).map_err(DatabaseError::malformed(kind))?;
        Ok(Self {
            buf,
            entries: &buf[range],
            kind,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len() / OFFSET_SIZE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The whole file, for decoding the records the index points at.
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// Offset stored at `position`.
    ///
    /// # Panics
    /// If `position >= self.len()`.
    #[inline]
    pub fn offset_at(&self, position: usize) -> u32 {
        let at = position * OFFSET_SIZE;
        let c = &self.entries[at..at + OFFSET_SIZE];
        u32::from_le_bytes([c[0], c[1], c[2], c[3]])
    }

    /// All offsets, in key order.
    pub fn iter(self) -> impl ExactSizeIterator<Item = u32> + 'a {
        self.entries
            .chunks_exact(OFFSET_SIZE)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
    }

    /// Binary search driven by `cmp`, which returns the ordering of the record at
    /// the given offset relative to the target.
    ///
    /// Returns the matching `(position, offset)`, `None` when no record matches,
    /// or the first error the comparator raised.
    pub fn search_by<F>(&self, mut cmp: F) -> Result<Option<(usize, u32)>>
    where
        F: FnMut(u32) -> Result<Ordering>,
    {
        let mut low = 0;
        let mut high = self.len();

        while low < high {
            let mid = low + (high - low) / 2;
            let offset = self.offset_at(mid);
            match cmp(offset)? {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Ok(Some((mid, offset))),
            }
        }

        Ok(None)
    }

    /// Binary search that decodes a key with `extract` and orders it against
    /// `target` with `compare`.
    pub fn search_by_key<K, T, E, C>(
        &self,
        target: &K,
        mut extract: E,
        mut compare: C,
    ) -> Result<Option<(usize, u32)>>
    where
        K: ?Sized,
        E: FnMut(&'a [u8], usize) -> Result<T>,
        C: FnMut(&T, &K) -> Ordering,
    {
        let buf = self.buf;
        self.search_by(|offset| {
            let key = extract(buf, offset as usize)?;
            Ok(compare(&key, target))
        })
    }
}
