use crate::Result;
use crate::film_db::traits::CreditsReader;
use crate::utils::Xxh3BuildHasher;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use six_degrees_record::Film;
use std::sync::atomic::{AtomicU64, Ordering};

/// Memoizing wrapper around any [`CreditsReader`].
///
/// Each distinct key reaches the wrapped reader at most once, even when several
/// threads miss on it at the same time: the miss is computed while holding the
/// entry's shard lock, and racing callers wait and then read the stored result.
///
/// Only successful lookups are stored. A `NotFound` (`Ok(None)`) or an error is
/// passed through and asked again next time, so an absent key is never
/// remembered as an empty result.
pub struct CachedFilmDatabase<R> {
    inner: R,
    credits: DashMap<String, Vec<Film>, Xxh3BuildHasher>,
    casts: DashMap<Film, Vec<String>, Xxh3BuildHasher>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<R: CreditsReader> CachedFilmDatabase<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            credits: DashMap::with_hasher(Xxh3BuildHasher),
            casts: DashMap::with_hasher(Xxh3BuildHasher),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups delegated to the wrapped reader.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of cached `(actor entries, film entries)`.
    pub fn cached_entries(&self) -> (usize, usize) {
        (self.credits.len(), self.casts.len())
    }

    pub fn clear(&self) {
        self.credits.clear();
        self.casts.clear();
    }

    fn record_hit<T: Clone>(&self, value: &T) -> T {
        self.hits.fetch_add(1, Ordering::Relaxed);
        value.clone()
    }
}

impl<R: CreditsReader> CreditsReader for CachedFilmDatabase<R> {
    fn films_of_actor(&self, actor: &str) -> Result<Option<Vec<Film>>> {
        if let Some(films) = self.credits.get(actor) {
            return Ok(Some(self.record_hit(films.value())));
        }

        match self.credits.entry(actor.to_owned()) {
            Entry::Occupied(entry) => Ok(Some(self.record_hit(entry.get()))),
            Entry::Vacant(slot) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let found = self.inner.films_of_actor(actor)?;
                if let Some(films) = &found {
                    slot.insert(films.clone());
                }
                Ok(found)
            }
        }
    }

    fn actors_of_film(&self, film: &Film) -> Result<Option<Vec<String>>> {
        if let Some(actors) = self.casts.get(film) {
            return Ok(Some(self.record_hit(actors.value())));
        }

        match self.casts.entry(film.clone()) {
            Entry::Occupied(entry) => Ok(Some(self.record_hit(entry.get()))),
            Entry::Vacant(slot) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let found = self.inner.actors_of_film(film)?;
                if let Some(actors) = &found {
                    slot.insert(actors.clone());
                }
                Ok(found)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Counts every call that reaches it.
    #[derive(Default)]
    struct CountingReader {
        credits: HashMap<String, Vec<Film>>,
        calls: Mutex<HashMap<String, usize>>,
    }

    impl CountingReader {
        fn calls_for(&self, key: &str) -> usize {
            self.calls.lock().unwrap().get(key).copied().unwrap_or(0)
        }
    }

    impl CreditsReader for CountingReader {
        fn films_of_actor(&self, actor: &str) -> Result<Option<Vec<Film>>> {
            *self.calls.lock().unwrap().entry(actor.to_owned()).or_default() += 1;
            Ok(self.credits.get(actor).cloned())
        }

        fn actors_of_film(&self, film: &Film) -> Result<Option<Vec<String>>> {
            *self.calls.lock().unwrap().entry(film.to_string()).or_default() += 1;
            Ok(None)
        }
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let mut reader = CountingReader::default();
        reader
            .credits
            .insert("Alice".into(), vec![Film::new("Film1", 2000)]);
        let cached = CachedFilmDatabase::new(reader);

        let first = cached.films_of_actor("Alice").unwrap();
        let second = cached.films_of_actor("Alice").unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.inner().calls_for("Alice"), 1);
        assert_eq!((cached.hits(), cached.misses()), (1, 1));
    }

    #[test]
    fn not_found_is_never_cached() {
        let cached = CachedFilmDatabase::new(CountingReader::default());

        assert_eq!(cached.films_of_actor("Ghost").unwrap(), None);
        assert_eq!(cached.films_of_actor("Ghost").unwrap(), None);
        assert_eq!(cached.actors_of_film(&Film::new("Void", 1999)).unwrap(), None);

        assert_eq!(cached.inner().calls_for("Ghost"), 2);
        assert_eq!(cached.cached_entries(), (0, 0));
    }

    #[test]
    fn clear_forces_fresh_lookups() {
        let mut reader = CountingReader::default();
        reader.credits.insert("Bob".into(), vec![]);
        let cached = CachedFilmDatabase::new(reader);

        cached.films_of_actor("Bob").unwrap();
        cached.clear();
        cached.films_of_actor("Bob").unwrap();

        assert_eq!(cached.into_inner().calls_for("Bob"), 2);
    }
}
