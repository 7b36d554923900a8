//! # Six Degrees
//!
//! Read-only access to a memory-mapped filmography database and a breadth-first
//! search for the shortest chain of shared films between two performers.
//!
//! The database is a pair of files, `actordata` and `moviedata`, each holding a
//! little-endian record count, a table of record offsets sorted by key, and the
//! records themselves. Lookups binary-search the offset table against the
//! mapped bytes without copying them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use six_degrees::{FilmDatabase, search::shortest_connection, traits::CreditsReader};
//!
//! let db = FilmDatabase::open("data/little-endian").unwrap();
//!
//! if let Some(films) = db.films_of_actor("Kevin Bacon").unwrap() {
//!     println!("{} films", films.len());
//! }
//!
//! if let Some(path) = shortest_connection(&db, "Kevin Bacon", "Meryl Streep", 6).unwrap() {
//!     println!("{path}");
//! }
//! ```
//!
//! Wrap the database in [`CachedFilmDatabase`] when the same names are looked up
//! repeatedly; it is safe to share across threads.

pub mod cli;

mod error;
pub use error::{DatabaseError, Result};

pub mod film_db;
pub use film_db::*;

pub mod search;

pub mod utils;

pub use six_degrees_record::{
    ActorRecord, DecodeError, Film, MovieRecord, Record, RecordKind, RecordView,
};
