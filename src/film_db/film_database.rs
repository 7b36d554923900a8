use crate::film_db::traits::CreditsReader;
use crate::film_db::{MappedFile, SortedIndex};
use crate::{DatabaseError, Result};
use six_degrees_record::{ActorRecord, Film, MovieRecord, RecordKind, RecordView};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Read-only filmography database backed by two memory-mapped files.
///
/// - `actordata`: actor records, indexed by name.
/// - `moviedata`: movie records, indexed by `(title, year)`.
///
/// Every actor record links to the movie records of its credits and every movie
/// record links back to its cast. Both files are mapped once in [`Self::open`]
/// and unmapped together when the database is dropped or [`Self::close`]d.
///
/// The database is immutable, so it is `Send + Sync` and any number of threads
/// may run lookups against one instance without locking.
#[derive(Debug)]
pub struct FilmDatabase {
    actor_file: MappedFile,
    movie_file: MappedFile,
    data_dir: PathBuf,
}

impl FilmDatabase {
    /// Maps `actordata` and `moviedata` from `data_dir`.
    ///
    /// # Returns:
    /// - `Ok(FilmDatabase)`: Both files were opened and mapped.
    /// - `Err(DatabaseError::Open)`: A file is missing, not a regular file, or unreadable.
    /// - `Err(DatabaseError::EmptyFile)`: A file has zero length.
    ///
    /// A file that maps but whose header is inconsistent still opens; check
    /// [`Self::is_healthy`] before issuing queries.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let actor_file = MappedFile::open(&data_dir.join(RecordKind::Actor.file_name()))?;
        // If this fails, `actor_file` is unmapped on the way out.
        let movie_file = MappedFile::open(&data_dir.join(RecordKind::Movie.file_name()))?;

        let db = Self {
            actor_file,
            movie_file,
            data_dir: data_dir.to_path_buf(),
        };

        if db.is_healthy() {
            info!(
                "Opened film database in {} ({} actors, {} films).",
                data_dir.display(),
                db.actor_index()?.len(),
                db.movie_index()?.len()
            );
        } else {
            warn!(
                "Film database in {} has an inconsistent index header.",
                data_dir.display()
            );
        }

        Ok(db)
    }

    /// `true` when both files carry a readable record count and an index table
    /// that lies within the mapped bytes.
    pub fn is_healthy(&self) -> bool {
        self.actor_index().is_ok() && self.movie_index().is_ok()
    }

    /// Unmaps both files and closes their handles.
    pub fn close(self) {
        debug!("Closing film database in {}.", self.data_dir.display());
        drop(self);
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Sizes in bytes of `(actordata, moviedata)`.
    pub fn file_sizes(&self) -> (usize, usize) {
        (self.actor_file.len(), self.movie_file.len())
    }

    pub fn size_in_bytes(&self) -> u64 {
        (self.actor_file.len() + self.movie_file.len()) as u64
    }

    /// Full path of the mapped `actordata` file.
    pub fn actor_path(&self) -> &Path {
        self.actor_file.path()
    }

    pub fn movie_path(&self) -> &Path {
        self.movie_file.path()
    }

    pub fn actor_index(&self) -> Result<SortedIndex<'_>> {
        SortedIndex::new(self.actor_file.as_slice(), RecordKind::Actor)
    }

    pub fn movie_index(&self) -> Result<SortedIndex<'_>> {
        SortedIndex::new(self.movie_file.as_slice(), RecordKind::Movie)
    }

    pub fn actor_count(&self) -> Result<usize> {
        Ok(self.actor_index()?.len())
    }

    pub fn movie_count(&self) -> Result<usize> {
        Ok(self.movie_index()?.len())
    }

    /// Checks whether an actor with exactly this name is present.
    pub fn contains_actor(&self, name: &str) -> Result<bool> {
        Ok(self.actor_offset(name)?.is_some())
    }

    /// Offset of the named actor's record in `actordata`, if present.
    pub fn actor_offset(&self, name: &str) -> Result<Option<u32>> {
        self.find_actor(name.as_bytes())
    }

    /// Offset of the film's record in `moviedata`, if present.
    pub fn movie_offset(&self, film: &Film) -> Result<Option<u32>> {
        if film.year_byte().is_none() {
            return Ok(None);
        }
        self.find_movie(film.title.as_bytes(), film.year)
    }

    pub(crate) fn find_actor(&self, name: &[u8]) -> Result<Option<u32>> {
        let index = self.actor_index()?;
        let found = index.search_by_key(
            name,
            |buf, offset| {
                RecordView::decode_name(buf, offset)
                    .map_err(DatabaseError::malformed(RecordKind::Actor))
            },
            |candidate, key| Ord::cmp(*candidate, key),
        )?;
        Ok(found.map(|(_, offset)| offset))
    }

    pub(crate) fn find_movie(&self, title: &[u8], year: u16) -> Result<Option<u32>> {
        let index = self.movie_index()?;
        let found = index.search_by(|offset| {
            let view = self.movie_view_at(offset)?;
            Ok(view
                .name_bytes()
                .cmp(title)
                .then_with(|| view.year().cmp(&Some(year))))
        })?;
        Ok(found.map(|(_, offset)| offset))
    }

    pub(crate) fn actor_view_at(&self, offset: u32) -> Result<RecordView<'_>> {
        RecordView::decode(self.actor_file.as_slice(), offset as usize, RecordKind::Actor)
            .map_err(DatabaseError::malformed(RecordKind::Actor))
    }

    pub(crate) fn movie_view_at(&self, offset: u32) -> Result<RecordView<'_>> {
        RecordView::decode(self.movie_file.as_slice(), offset as usize, RecordKind::Movie)
            .map_err(DatabaseError::malformed(RecordKind::Movie))
    }

    /// Decodes the actor record starting at `offset` in `actordata`.
    pub fn decode_actor_at(&self, offset: u32) -> Result<ActorRecord> {
        self.actor_view_at(offset).map(ActorRecord::from)
    }

    /// Decodes the movie record starting at `offset` in `moviedata`.
    pub fn decode_movie_at(&self, offset: u32) -> Result<MovieRecord> {
        MovieRecord::decode(self.movie_file.as_slice(), offset as usize)
            .map_err(DatabaseError::malformed(RecordKind::Movie))
    }

    /// Every actor name, in index (sorted) order.
    pub fn actor_names(&self) -> Result<impl Iterator<Item = Result<String>> + '_> {
        let index = self.actor_index()?;
        Ok(index
            .iter()
            .map(|offset| Ok(self.actor_view_at(offset)?.name().into_owned())))
    }

    /// Every film, in index (sorted) order.
    pub fn films(&self) -> Result<impl Iterator<Item = Result<Film>> + '_> {
        let index = self.movie_index()?;
        Ok(index
            .iter()
            .map(|offset| self.movie_view_at(offset).map(film_from_view)))
    }
}

impl CreditsReader for FilmDatabase {
    fn films_of_actor(&self, actor: &str) -> Result<Option<Vec<Film>>> {
        let Some(offset) = self.find_actor(actor.as_bytes())? else {
            debug!(actor, "Actor not found.");
            return Ok(None);
        };

        let record = self.actor_view_at(offset)?;
        debug_assert_eq!(record.cmp_name(actor.as_bytes()), Ordering::Equal);

        let films = record
            .linked_offsets()
            .map(|movie_offset| self.movie_view_at(movie_offset).map(film_from_view))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| warn!(actor, %err, "Credits could not be decoded."))?;

        Ok(Some(films))
    }

    fn actors_of_film(&self, film: &Film) -> Result<Option<Vec<String>>> {
        let Some(offset) = self.movie_offset(film)? else {
            debug!(%film, "Film not found.");
            return Ok(None);
        };

        let record = self.movie_view_at(offset)?;
        debug_assert_eq!(record.cmp_film(film), Ordering::Equal);

        let actors = record
            .linked_offsets()
            .map(|actor_offset| {
                self.actor_view_at(actor_offset)
                    .map(|view| view.name().into_owned())
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| warn!(%film, %err, "Cast could not be decoded."))?;

        Ok(Some(actors))
    }
}

/// Movie views always carry a year; `Film` is the owned projection of one.
fn film_from_view(view: RecordView<'_>) -> Film {
    Film::new(view.name().into_owned(), view.year().unwrap_or_default())
}
