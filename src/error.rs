use six_degrees_record::{DecodeError, RecordKind};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the film database.
///
/// Absence is never an error: a missing actor or film is `Ok(None)` and an
/// unconnected pair is `Ok(None)` from the search.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A data file is missing, unreadable, or could not be mapped.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data file exists but holds no bytes.
    #[error("{} is empty", path.display())]
    EmptyFile { path: PathBuf },

    /// Bytes reached by a lookup do not form a valid record.
    #[error("malformed {kind:?} data: {source}")]
    Malformed {
        kind: RecordKind,
        #[source]
        source: DecodeError,
    },
}

impl DatabaseError {
    /// `true` for failures raised while opening, as opposed to while reading.
    pub fn is_open_error(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::EmptyFile { .. })
    }

    pub(crate) fn malformed(kind: RecordKind) -> impl FnOnce(DecodeError) -> Self {
        move |source| Self::Malformed { kind, source }
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
