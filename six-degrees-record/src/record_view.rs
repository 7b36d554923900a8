use crate::constants::*;
use crate::decode_error::DecodeError;
use crate::film::Film;
use crate::layout::RecordKind;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::slice::ChunksExact;

/// Zero-copy view of one record inside a mapped data file.
///
/// Decoding only validates that every field lies inside `buf`; nothing is
/// copied. Binary search uses views directly so a lookup never allocates.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    kind: RecordKind,
    offset: usize,
    name: &'a [u8],
    year: Option<u16>,
    linked: &'a [u8],
}

impl<'a> RecordView<'a> {
    /// Decodes the record whose name starts at `offset`.
    ///
    /// # Errors
    /// - `OffsetOutOfBounds` if `offset` is past the end of `buf`.
    /// - `UnterminatedName` if no `\0` follows the name.
    /// - `Truncated` if the year, count or offset array runs past the buffer.
    pub fn decode(buf: &'a [u8], offset: usize, kind: RecordKind) -> Result<Self, DecodeError> {
        let name = Self::decode_name(buf, offset)?;
        let rest = &buf[offset..];
        let name_len = name.len();

        let year = match kind {
            RecordKind::Actor => None,
            RecordKind::Movie => {
                let delta = *rest.get(name_len + 1).ok_or(DecodeError::Truncated {
                    offset,
                    field: "year",
                })?;
                Some(YEAR_BASE + delta as u16)
            }
        };

        let count_at = kind.count_field_offset(name_len);
        let count = crate::layout::read_u16_le(rest, count_at).ok_or(DecodeError::Truncated {
            offset,
            field: "count",
        })? as usize;

        let offsets_at = kind.offsets_field_offset(name_len);
        let linked = rest
            .get(offsets_at..offsets_at + count * OFFSET_SIZE)
            .ok_or(DecodeError::Truncated {
                offset,
                field: "linked offsets",
            })?;

        Ok(Self {
            kind,
            offset,
            name,
            year,
            linked,
        })
    }

    /// Returns only the name bytes of the record at `offset`, without the terminator.
    ///
    /// Actor lookups compare names alone, so this skips the rest of the decode.
    pub fn decode_name(buf: &'a [u8], offset: usize) -> Result<&'a [u8], DecodeError> {
        let rest = buf.get(offset..).ok_or(DecodeError::OffsetOutOfBounds {
            offset,
            len: buf.len(),
        })?;
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::UnterminatedName { offset })?;
        Ok(&rest[..nul])
    }

    #[inline]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Offset of the record's first name byte within its file.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn name_bytes(&self) -> &'a [u8] {
        self.name
    }

    /// The name as text. Invalid UTF-8 is replaced, so compare with
    /// [`Self::name_bytes`] when on-disk order matters.
    #[inline]
    pub fn name(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.name)
    }

    /// Release year; `None` for actor records.
    #[inline]
    pub fn year(&self) -> Option<u16> {
        self.year
    }

    #[inline]
    pub fn num_contents(&self) -> usize {
        self.linked.len() / OFFSET_SIZE
    }

    pub fn linked_offsets(&self) -> LinkedOffsets<'a> {
        LinkedOffsets {
            chunks: self.linked.chunks_exact(OFFSET_SIZE),
        }
    }

    /// Ordering of this record's name relative to `key`.
    #[inline]
    pub fn cmp_name(&self, key: &[u8]) -> Ordering {
        self.name.cmp(key)
    }

    /// Ordering of this record's `(title, year)` relative to `film`.
    ///
    /// Actor records carry no year and compare as year `0`.
    #[inline]
    pub fn cmp_film(&self, film: &Film) -> Ordering {
        film.cmp_raw(self.name, self.year.unwrap_or(0))
    }

    /// Projects a movie record onto the public `Film` value.
    pub fn to_film(&self) -> Option<Film> {
        self.year.map(|year| Film::new(self.name().into_owned(), year))
    }
}

/// Iterator over the little-endian `u32` offsets stored in a record.
#[derive(Debug, Clone)]
pub struct LinkedOffsets<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for LinkedOffsets<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        self.chunks
            .next()
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for LinkedOffsets<'_> {}
impl FusedIterator for LinkedOffsets<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_bytes(name: &str, links: &[u32]) -> Vec<u8> {
        let kind = RecordKind::Actor;
        let mut buf = vec![0u8; kind.record_size(name.len(), links.len())];
        buf[..name.len()].copy_from_slice(name.as_bytes());
        let count_at = kind.count_field_offset(name.len());
        buf[count_at..count_at + 2].copy_from_slice(&(links.len() as u16).to_le_bytes());
        let mut at = kind.offsets_field_offset(name.len());
        for link in links {
            buf[at..at + 4].copy_from_slice(&link.to_le_bytes());
            at += 4;
        }
        buf
    }

    #[test]
    fn decodes_actor_with_odd_length_name() {
        let buf = actor_bytes("Bob", &[12, 40]);
        let view = RecordView::decode(&buf, 0, RecordKind::Actor).unwrap();

        assert_eq!(view.name(), "Bob");
        assert_eq!(view.year(), None);
        assert_eq!(view.num_contents(), 2);
        assert_eq!(view.linked_offsets().collect::<Vec<_>>(), vec![12, 40]);
    }

    #[test]
    fn decodes_movie_year_byte() {
        // "Heat\0" + year byte 95, count at 6, offsets at 8
        let mut buf = b"Heat\0".to_vec();
        buf.push(95);
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&77u32.to_le_bytes());

        let view = RecordView::decode(&buf, 0, RecordKind::Movie).unwrap();
        assert_eq!(view.kind(), RecordKind::Movie);
        assert_eq!(view.to_film(), Some(Film::new("Heat", 1995)));
        assert_eq!(view.linked_offsets().collect::<Vec<_>>(), vec![77]);
    }

    #[test]
    fn decodes_at_nonzero_offset() {
        let mut buf = vec![0xAAu8; 8];
        buf.extend(actor_bytes("Carl", &[4]));
        let view = RecordView::decode(&buf, 8, RecordKind::Actor).unwrap();
        assert_eq!(view.name(), "Carl");
        assert_eq!(view.offset(), 8);
        assert_eq!(view.linked_offsets().next(), Some(4));
    }

    #[test]
    fn reports_truncated_offsets() {
        let mut buf = actor_bytes("Bob", &[1, 2, 3]);
        buf.truncate(buf.len() - 1);
        assert_eq!(
            RecordView::decode(&buf, 0, RecordKind::Actor).unwrap_err(),
            DecodeError::Truncated {
                offset: 0,
                field: "linked offsets"
            }
        );
    }

    #[test]
    fn reports_unterminated_name_and_bad_offset() {
        let buf = b"NoTerminator".to_vec();
        assert_eq!(
            RecordView::decode(&buf, 2, RecordKind::Actor).unwrap_err(),
            DecodeError::UnterminatedName { offset: 2 }
        );
        assert_eq!(
            RecordView::decode(&buf, 99, RecordKind::Actor).unwrap_err(),
            DecodeError::OffsetOutOfBounds { offset: 99, len: 12 }
        );
    }

    #[test]
    fn compares_names_bytewise() {
        let buf = actor_bytes("Bob", &[]);
        let view = RecordView::decode(&buf, 0, RecordKind::Actor).unwrap();
        assert_eq!(view.cmp_name(b"Bob"), Ordering::Equal);
        assert_eq!(view.cmp_name(b"Bobby"), Ordering::Less);
        assert_eq!(view.cmp_name(b"Al"), Ordering::Greater);
    }
}
