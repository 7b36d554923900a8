//! Whole-database consistency check.
//!
//! Walks both indexes and reports every record that breaks one of the format's
//! invariants. Violations are collected rather than returned as errors so that
//! one report covers the entire data set.

use crate::film_db::{FilmDatabase, SortedIndex};
use crate::{DatabaseError, Result};
use six_degrees_record::{Film, RecordKind, RecordView};
use std::cmp::Ordering;
use std::fmt;
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A single broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Index entry `position` does not sort strictly after its predecessor.
    OutOfOrder { kind: RecordKind, position: usize },

    /// Searching for the key decoded at `offset` did not land on `offset`.
    LookupMismatch {
        kind: RecordKind,
        offset: u32,
        found: Option<u32>,
    },

    /// The bytes at `offset` (reached from the index or from a link) do not decode.
    Unreadable {
        kind: RecordKind,
        offset: u32,
        reason: String,
    },

    /// `actor` lists `film` but the film's cast does not list the actor.
    MissingCastEntry { actor: String, film: Film },

    /// `film` lists `actor` but the actor's credits do not list the film.
    MissingCredit { actor: String, film: Film },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { kind, position } => {
                write!(f, "{kind:?} index entry {position} is out of order")
            }
            Self::LookupMismatch {
                kind,
                offset,
                found,
            } => write!(
                f,
                "{kind:?} record at {offset} is not found by its own key (got {found:?})"
            ),
            Self::Unreadable {
                kind,
                offset,
                reason,
            } => write!(f, "{kind:?} record at {offset}: {reason}"),
            Self::MissingCastEntry { actor, film } => {
                write!(f, "{actor} lists {film}, which does not list them")
            }
            Self::MissingCredit { actor, film } => {
                write!(f, "{film} lists {actor}, who does not list it")
            }
        }
    }
}

/// Outcome of [`verify`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    pub actors_checked: usize,
    pub films_checked: usize,
    pub links_checked: usize,
    pub violations: Vec<Violation>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks ordering, lookup round-trips, link validity and actor/film symmetry.
///
/// # Errors
/// Only if an index header itself is unreadable; see [`FilmDatabase::is_healthy`].
pub fn verify(db: &FilmDatabase) -> Result<IntegrityReport> {
    let actor_index = db.actor_index()?;
    let movie_index = db.movie_index()?;

    let actor_results = run_pass(actor_index.len(), |position| {
        check_actor(db, &actor_index, position)
    });
    let movie_results = run_pass(movie_index.len(), |position| {
        check_movie(db, &movie_index, position)
    });

    let mut report = IntegrityReport {
        actors_checked: actor_index.len(),
        films_checked: movie_index.len(),
        ..Default::default()
    };
    for (links, violations) in actor_results.into_iter().chain(movie_results) {
        report.links_checked += links;
        report.violations.extend(violations);
    }

    if report.is_clean() {
        info!(
            "Integrity check passed: {} actors, {} films, {} links.",
            report.actors_checked, report.films_checked, report.links_checked
        );
    } else {
        warn!(
            "Integrity check found {} violation(s).",
            report.violations.len()
        );
    }

    Ok(report)
}

/// Links examined and violations found for one index entry.
type PassResult = (usize, Vec<Violation>);

#[cfg(feature = "parallel")]
fn run_pass<F>(count: usize, check: F) -> Vec<PassResult>
where
    F: Fn(usize) -> PassResult + Sync + Send,
{
    (0..count).into_par_iter().map(check).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_pass<F>(count: usize, check: F) -> Vec<PassResult>
where
    F: Fn(usize) -> PassResult,
{
    (0..count).map(check).collect()
}

fn check_actor(db: &FilmDatabase, index: &SortedIndex<'_>, position: usize) -> PassResult {
    let kind = index.kind();
    let offset = index.offset_at(position);
    let view = match db.actor_view_at(offset) {
        Ok(view) => view,
        Err(err) => return (0, vec![unreadable(kind, offset, err)]),
    };
    let mut violations = Vec::new();

    if position > 0 {
        let in_order = db
            .actor_view_at(index.offset_at(position - 1))
            .map(|previous| previous.cmp_name(view.name_bytes()) == Ordering::Less);
        if matches!(in_order, Ok(false)) {
            violations.push(Violation::OutOfOrder { kind, position });
        }
    }

    match db.find_actor(view.name_bytes()) {
        Ok(found) if found != Some(offset) => violations.push(Violation::LookupMismatch {
            kind,
            offset,
            found,
        }),
        Ok(_) => {}
        Err(err) => violations.push(unreadable(kind, offset, err)),
    }

    let mut links = 0;
    for movie_offset in view.linked_offsets() {
        links += 1;
        match db.movie_view_at(movie_offset) {
            Ok(movie) if !movie.linked_offsets().any(|a| a == offset) => {
                violations.push(Violation::MissingCastEntry {
                    actor: view.name().into_owned(),
                    film: film_of(&movie),
                });
            }
            Ok(_) => {}
            Err(err) => violations.push(unreadable(view.kind().linked_kind(), movie_offset, err)),
        }
    }

    (links, violations)
}

fn check_movie(db: &FilmDatabase, index: &SortedIndex<'_>, position: usize) -> PassResult {
    let kind = index.kind();
    let offset = index.offset_at(position);
    let view = match db.movie_view_at(offset) {
        Ok(view) => view,
        Err(err) => return (0, vec![unreadable(kind, offset, err)]),
    };
    let film = film_of(&view);
    let mut violations = Vec::new();

    if position > 0 {
        let in_order = db
            .movie_view_at(index.offset_at(position - 1))
            .map(|previous| previous.cmp_film(&film) == Ordering::Less);
        if matches!(in_order, Ok(false)) {
            violations.push(Violation::OutOfOrder { kind, position });
        }
    }

    match db.find_movie(view.name_bytes(), film.year) {
        Ok(found) if found != Some(offset) => violations.push(Violation::LookupMismatch {
            kind,
            offset,
            found,
        }),
        Ok(_) => {}
        Err(err) => violations.push(unreadable(kind, offset, err)),
    }

    let mut links = 0;
    for actor_offset in view.linked_offsets() {
        links += 1;
        match db.actor_view_at(actor_offset) {
            Ok(actor) if !actor.linked_offsets().any(|m| m == offset) => {
                violations.push(Violation::MissingCredit {
                    actor: actor.name().into_owned(),
                    film: film.clone(),
                });
            }
            Ok(_) => {}
            Err(err) => violations.push(unreadable(view.kind().linked_kind(), actor_offset, err)),
        }
    }

    (links, violations)
}

fn film_of(view: &RecordView<'_>) -> Film {
    Film::new(view.name().into_owned(), view.year().unwrap_or_default())
}

fn unreadable(kind: RecordKind, offset: u32, err: DatabaseError) -> Violation {
    Violation::Unreadable {
        kind,
        offset,
        reason: match err {
            DatabaseError::Malformed { source, .. } => source.to_string(),
            other => other.to_string(),
        },
    }
}
