use six_degrees_record::{
    Film, RecordKind,
    constants::{ACTOR_FILE_NAME, HEADER_SIZE, MOVIE_FILE_NAME, OFFSET_SIZE},
};
use std::collections::HashMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;
use tempfile::TempDir;

/// Encoded contents of both data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDatabase {
    pub actor_data: Vec<u8>,
    pub movie_data: Vec<u8>,
}

/// Accumulates actors, films and credits, then lays them out in the on-disk format.
#[derive(Debug, Default, Clone)]
pub struct FixtureBuilder {
    actors: Vec<String>,
    actor_ids: HashMap<String, usize>,
    films: Vec<Film>,
    film_ids: HashMap<Film, usize>,
    // actor id -> film ids, in credit order
    credits: Vec<Vec<usize>>,
    // film id -> actor ids, in billing order
    casts: Vec<Vec<usize>>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an actor, possibly with no credits. Repeated names are ignored.
    pub fn actor(&mut self, name: &str) -> &mut Self {
        self.actor_id(name);
        self
    }

    /// Registers a film and credits every listed actor with it.
    ///
    /// Adding the same `(title, year)` twice merges the casts.
    pub fn film(&mut self, title: &str, year: u16, cast: &[&str]) -> &mut Self {
        let film = Film::new(title, year);
        let film_id = match self.film_ids.get(&film) {
            Some(&id) => id,
            None => {
                self.films.push(film.clone());
                self.casts.push(Vec::new());
                self.film_ids.insert(film, self.films.len() - 1);
                self.films.len() - 1
            }
        };

        for name in cast {
            let actor_id = self.actor_id(name);
            if !self.casts[film_id].contains(&actor_id) {
                self.casts[film_id].push(actor_id);
                self.credits[actor_id].push(film_id);
            }
        }
        self
    }

    pub fn actor_names(&self) -> &[String] {
        &self.actors
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Films credited to `name`, in credit order.
    pub fn credits_of(&self, name: &str) -> Option<Vec<Film>> {
        let id = *self.actor_ids.get(name)?;
        Some(
            self.credits[id]
                .iter()
                .map(|&f| self.films[f].clone())
                .collect(),
        )
    }

    /// Actors credited in `film`, in billing order.
    pub fn cast_of(&self, film: &Film) -> Option<Vec<String>> {
        let id = *self.film_ids.get(film)?;
        Some(
            self.casts[id]
                .iter()
                .map(|&a| self.actors[a].clone())
                .collect(),
        )
    }

    fn actor_id(&mut self, name: &str) -> usize {
        if let Some(&id) = self.actor_ids.get(name) {
            return id;
        }
        self.actors.push(name.to_string());
        self.credits.push(Vec::new());
        self.actor_ids.insert(name.to_string(), self.actors.len() - 1);
        self.actors.len() - 1
    }

    /// Lays out both files in memory.
    ///
    /// # Errors
    /// `InvalidInput` if a name contains `\0`, a year is outside `1900..=2155`,
    /// a record links more than `u16::MAX` others, or an offset overflows `u32`.
    pub fn encode(&self) -> io::Result<EncodedDatabase> {
        let actor_sizes = self
            .actors
            .iter()
            .zip(&self.credits)
            .map(|(name, links)| RecordKind::Actor.record_size(name.len(), links.len()))
            .collect::<Vec<_>>();
        let movie_sizes = self
            .films
            .iter()
            .zip(&self.casts)
            .map(|(film, links)| RecordKind::Movie.record_size(film.title.len(), links.len()))
            .collect::<Vec<_>>();

        let actor_offsets = body_offsets(&actor_sizes)?;
        let movie_offsets = body_offsets(&movie_sizes)?;

        let mut actor_order = (0..self.actors.len()).collect::<Vec<_>>();
        actor_order.sort_by(|&a, &b| self.actors[a].as_bytes().cmp(self.actors[b].as_bytes()));
        let mut movie_order = (0..self.films.len()).collect::<Vec<_>>();
        movie_order.sort_by(|&a, &b| self.films[a].cmp(&self.films[b]));

        let mut actor_data = index_bytes(&actor_order, &actor_offsets);
        for (id, name) in self.actors.iter().enumerate() {
            let links = self.credits[id]
                .iter()
                .map(|&f| movie_offsets[f])
                .collect::<Vec<_>>();
            actor_data.extend(encode_record(RecordKind::Actor, name, None, &links)?);
        }

        let mut movie_data = index_bytes(&movie_order, &movie_offsets);
        for (id, film) in self.films.iter().enumerate() {
            let links = self.casts[id]
                .iter()
                .map(|&a| actor_offsets[a])
                .collect::<Vec<_>>();
            movie_data.extend(encode_record(
                RecordKind::Movie,
                &film.title,
                Some(film),
                &links,
            )?);
        }

        Ok(EncodedDatabase {
            actor_data,
            movie_data,
        })
    }

    /// Writes `actordata` and `moviedata` into `dir`.
    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        let encoded = self.encode()?;
        fs::write(dir.join(ACTOR_FILE_NAME), encoded.actor_data)?;
        fs::write(dir.join(MOVIE_FILE_NAME), encoded.movie_data)?;
        Ok(())
    }

    /// Writes both files into a fresh temporary directory, removed on drop.
    pub fn write_temp(&self) -> io::Result<TempDir> {
        let dir = tempfile::tempdir()?;
        self.write_to(dir.path())?;
        Ok(dir)
    }
}

/// Encodes one record. `film` supplies the year byte for movie records.
pub fn encode_record(
    kind: RecordKind,
    name: &str,
    film: Option<&Film>,
    links: &[u32],
) -> io::Result<Vec<u8>> {
    if name.as_bytes().contains(&0) {
        return Err(invalid(format!("name {name:?} contains a NUL byte")));
    }
    let count = u16::try_from(links.len())
        .map_err(|_| invalid(format!("{name:?} links {} records", links.len())))?;

    let mut buf = vec![0u8; kind.record_size(name.len(), links.len())];
    buf[..name.len()].copy_from_slice(name.as_bytes());

    if kind == RecordKind::Movie {
        let film = film.ok_or_else(|| invalid(format!("movie {name:?} needs a year")))?;
        buf[name.len() + 1] = film
            .year_byte()
            .ok_or_else(|| invalid(format!("year {} is not representable", film.year)))?;
    }

    let count_at = kind.count_field_offset(name.len());
    buf[count_at..count_at + 2].copy_from_slice(&count.to_le_bytes());

    let offsets_at = kind.offsets_field_offset(name.len());
    for (i, link) in links.iter().enumerate() {
        let at = offsets_at + i * OFFSET_SIZE;
        buf[at..at + OFFSET_SIZE].copy_from_slice(&link.to_le_bytes());
    }

    Ok(buf)
}

fn body_offsets(sizes: &[usize]) -> io::Result<Vec<u32>> {
    let mut cursor = HEADER_SIZE + sizes.len() * OFFSET_SIZE;
    let mut offsets = Vec::with_capacity(sizes.len());
    for size in sizes {
        offsets.push(u32::try_from(cursor).map_err(|_| invalid("file exceeds 4 GiB".into()))?);
        cursor += size;
    }
    Ok(offsets)
}

fn index_bytes(order: &[usize], offsets: &[u32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + order.len() * OFFSET_SIZE);
    buf.extend_from_slice(&(order.len() as u32).to_le_bytes());
    for &id in order {
        buf.extend_from_slice(&offsets[id].to_le_bytes());
    }
    buf
}

fn invalid(message: String) -> io::Error {
    io::Error::new(ErrorKind::InvalidInput, message)
}
