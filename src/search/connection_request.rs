use crate::DatabaseError;
use crate::film_db::traits::CreditsReader;
use crate::search::{ConnectionPath, shortest_connection};
use thiserror::Error;

/// Why a pair of names was not searched.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("both names are \"{0}\"; pick two different people")]
    SameActor(String),

    #[error("\"{0}\" is not in the movie database")]
    UnknownActor(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// A validated pair of distinct actors, both known to the database.
///
/// The search itself assumes these checks already happened; this is the layer
/// that performs them.
#[derive(Debug)]
pub struct ConnectionRequest<'a, R: ?Sized> {
    reader: &'a R,
    start: String,
    goal: String,
}

impl<'a, R> ConnectionRequest<'a, R>
where
    R: CreditsReader + ?Sized,
{
    /// Validates `start` and `goal` against `reader`.
    ///
    /// # Errors
    /// - `SameActor` if the names are identical (checked before any lookup).
    /// - `UnknownActor` for the first name with no record.
    /// - `Database` if a lookup hit a malformed record.
    pub fn new(reader: &'a R, start: &str, goal: &str) -> Result<Self, RequestError> {
        if start == goal {
            return Err(RequestError::SameActor(start.to_owned()));
        }

        for name in [start, goal] {
            if reader.films_of_actor(name)?.is_none() {
                return Err(RequestError::UnknownActor(name.to_owned()));
            }
        }

        Ok(Self {
            reader,
            start: start.to_owned(),
            goal: goal.to_owned(),
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Runs [`shortest_connection`] for this pair.
    pub fn run(&self, max_hops: usize) -> crate::Result<Option<ConnectionPath>> {
        shortest_connection(self.reader, &self.start, &self.goal, max_hops)
    }
}
