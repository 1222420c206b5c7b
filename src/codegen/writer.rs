//! Persists the generated module.
//!
//! The module is written to a temporary file next to the target and renamed
//! over it, so readers never observe a half-written file and a failed run
//! leaves the previous output in place.

use crate::error::PersistenceError;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode of the written module on unix.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Overwrites `path` with `contents`.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<(), PersistenceError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir).map_err(|source| PersistenceError::TempFile {
        dir: dir.to_path_buf(),
        source,
    })?;

    let write_err = |source: io::Error| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };
    temp_file.write_all(contents).map_err(write_err)?;
    temp_file.flush().map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file
            .as_file()
            .set_permissions(fs::Permissions::from_mode(OUTPUT_MODE))
            .map_err(write_err)?;
    }

    temp_file
        .persist(path)
        .map_err(|err| write_err(err.error))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote generated module");
    Ok(())
}

/// Hex SHA-256 of `contents`.
pub fn content_digest(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    format!("{:x}", hasher.finalize())
}

/// Hex SHA-256 of the file at `path`, or `None` if it does not exist.
pub fn file_digest(path: &Path) -> io::Result<Option<String>> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(content_digest(&contents))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
