use std::path::Path;

/// Checks that a data file exists and is a regular file before it is mapped.
///
/// # Returns:
/// - `Ok(())` if `path` names a regular file.
/// - `Err(NotFound)` if nothing exists at `path`.
/// - `Err(InvalidInput)` if `path` is a directory or other non-file.
pub fn verify_file_existence(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Data file '{}' does not exist.", path.display()),
        ));
    }

    if !path.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("'{}' is not a regular file.", path.display()),
        ));
    }

    Ok(())
}
