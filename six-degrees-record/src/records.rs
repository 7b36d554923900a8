use crate::decode_error::DecodeError;
use crate::film::Film;
use crate::layout::RecordKind;
use crate::record_view::RecordView;

/// A decoded actor record. Owns its data; holds no reference to the mapped file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRecord {
    pub name: String,
    /// Offsets into the movie file, one per film credit.
    pub film_offsets: Vec<u32>,
}

/// A decoded movie record. Owns its data; holds no reference to the mapped file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub year: u16,
    /// Offsets into the actor file, one per cast member.
    pub actor_offsets: Vec<u32>,
}

/// Either kind of decoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Actor(ActorRecord),
    Movie(MovieRecord),
}

impl ActorRecord {
    pub fn decode(buf: &[u8], offset: usize) -> Result<Self, DecodeError> {
        RecordView::decode(buf, offset, RecordKind::Actor).map(Self::from)
    }

    #[inline]
    pub fn num_contents(&self) -> usize {
        self.film_offsets.len()
    }

    #[inline]
    pub fn into_name(self) -> String {
        self.name
    }
}

impl MovieRecord {
    pub fn decode(buf: &[u8], offset: usize) -> Result<Self, DecodeError> {
        let view = RecordView::decode(buf, offset, RecordKind::Movie)?;
        Ok(Self {
            title: view.name().into_owned(),
            year: view.year().unwrap_or_default(),
            actor_offsets: view.linked_offsets().collect(),
        })
    }

    #[inline]
    pub fn num_contents(&self) -> usize {
        self.actor_offsets.len()
    }

    pub fn to_film(&self) -> Film {
        Film::new(self.title.clone(), self.year)
    }
}

impl From<RecordView<'_>> for ActorRecord {
    fn from(view: RecordView<'_>) -> Self {
        Self {
            name: view.name().into_owned(),
            film_offsets: view.linked_offsets().collect(),
        }
    }
}

impl From<MovieRecord> for Film {
    fn from(record: MovieRecord) -> Self {
        Film::new(record.title, record.year)
    }
}

/// Decodes the record of the given kind whose name begins at `offset`.
pub fn decode_record(buf: &[u8], offset: usize, kind: RecordKind) -> Result<Record, DecodeError> {
    match kind {
        RecordKind::Actor => ActorRecord::decode(buf, offset).map(Record::Actor),
        RecordKind::Movie => MovieRecord::decode(buf, offset).map(Record::Movie),
    }
}
