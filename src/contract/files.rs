/// File access helpers: existence check, whole-file read, create/truncate write.
///
/// Every handle is a local value, so it is closed on every return path,
/// including the error ones.
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use super::errors::ContractError;

/// Whether a file or folder exists at `path`.
#[must_use]
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Read the whole file at `path` as UTF-8 text.
///
/// # Errors
///
/// Returns `ContractError::Read` if the file cannot be opened, read, or is not UTF-8.
pub fn read_all(path: &Path) -> Result<String, ContractError> {
    let read_err = |source| ContractError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_err)?;
    let mut content = String::new();
    file.read_to_string(&mut content).map_err(read_err)?;

    debug!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content)
}

/// Write `data` to `path`, creating the file if absent and truncating it otherwise.
///
/// # Errors
///
/// Returns `ContractError::Write` on any create or write failure.
pub fn write_all(path: &Path, data: &str) -> Result<(), ContractError> {
    let write_err = |source| ContractError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(data.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}
