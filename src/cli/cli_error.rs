use crate::DatabaseError;
use crate::search::RequestError;
use std::io;
use thiserror::Error;

/// Everything that ends a command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(
        "Failed to properly initialize the imdb database.\nPlease check to make sure the source files exist and that you have permission to read them."
    )]
    Initialization(#[source] Option<DatabaseError>),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("We couldn't find {0} in the movie database.")]
    NotFound(String),

    #[error("No path between those two people could be found.")]
    NoPath,

    #[error("Integrity check found {0} violation(s).")]
    Integrity(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}
