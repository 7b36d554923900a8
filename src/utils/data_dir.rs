use six_degrees_record::constants::{ACTOR_FILE_NAME, MOVIE_FILE_NAME};
use std::path::{Path, PathBuf};

/// Where the data files are looked for when no directory is given.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Data sets are commonly shipped with per-endianness subdirectories. Records
/// are decoded as little-endian on every host, so only this one is consulted.
const LITTLE_ENDIAN_SUBDIR: &str = "little-endian";

/// Resolves the directory holding `actordata` and `moviedata`.
///
/// Returns `dir` itself if it holds both files, else `dir/little-endian` if that
/// does, else `dir` unchanged so that opening reports the missing file.
pub fn locate_data_dir(dir: &Path) -> PathBuf {
    let nested = dir.join(LITTLE_ENDIAN_SUBDIR);
    if !has_data_files(dir) && has_data_files(&nested) {
        return nested;
    }
    dir.to_path_buf()
}

fn has_data_files(dir: &Path) -> bool {
    dir.join(ACTOR_FILE_NAME).is_file() && dir.join(MOVIE_FILE_NAME).is_file()
}
