//! Reading the input and replacing the output
//!
//! Output is staged in a temporary file next to the destination and renamed
//! over it, so a failed write never leaves a truncated file behind.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read the whole input file
///
/// # Errors
/// `InputNotFound` when `path` does not exist, `NotAFile` when it is a
/// directory or other non-regular file, `Read` for any other I/O failure.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    if !meta.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(bytes)
}

/// Atomically replace `path` with `bytes`
///
/// An existing destination is resolved through symlinks first, so the file a
/// link points to is replaced and the link itself survives. Its permissions
/// are copied to the new file.
///
/// # Errors
/// `Write` when the existing destination is read-only, or for any failure
/// creating, filling, or renaming the staged file.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let existing = fs::metadata(path).ok();
    if let Some(meta) = &existing {
        if meta.permissions().readonly() {
            return Err(write_err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "destination is read-only",
            )));
        }
    }

    let target = match existing {
        Some(_) => fs::canonicalize(path).map_err(write_err)?,
        None => path.to_path_buf(),
    };
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut staged = tempfile::Builder::new()
        .prefix(".uninorm-")
        .tempfile_in(dir)
        .map_err(write_err)?;

    staged.write_all(bytes).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;

    if let Some(meta) = existing {
        fs::set_permissions(staged.path(), meta.permissions()).map_err(write_err)?;
    }

    staged.persist(&target).map_err(|e| write_err(e.error))?;
    debug!(path = %target.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
