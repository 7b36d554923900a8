use crate::utils::verify_file_existence;
use crate::{DatabaseError, Result};
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::{Path, PathBuf};

/// A read-only memory map together with the file handle that backs it.
///
/// Both are released together when this value is dropped.
#[derive(Debug)]
pub(crate) struct MappedFile {
    mmap: Mmap,
    _file: File,
    path: PathBuf,
}

impl MappedFile {
    /// Opens `path` read-only and maps its full length.
    ///
    /// Zero-length files are rejected up front: there is nothing to map and no
    /// record count to read.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let open_error = |source| DatabaseError::Open {
            path: path.to_path_buf(),
            source,
        };

        verify_file_existence(path).map_err(open_error)?;
        let file = File::open(path).map_err(open_error)?;
        let len = file.metadata().map_err(open_error)?.len();

        if len == 0 {
            return Err(DatabaseError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        // Safety: the mapping is read-only and the data files are never
        // modified while a database is open.
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(open_error)?;

        Ok(Self {
            mmap,
            _file: file,
            path: path.to_path_buf(),
        })
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.mmap
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.mmap.len()
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}
