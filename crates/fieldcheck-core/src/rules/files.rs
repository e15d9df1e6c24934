//! File rules and the filesystem seam.
//!
//! `file_type` only parses the path string. `file_size` asks a `FileSystem`,
//! so tests and embedders can substitute an in-memory view.

use std::fs;
use std::io;
use std::path::Path;

use crate::options::Options;
use crate::types::{Input, Outcome};
use crate::CheckError;

/// Read-only filesystem access needed by `file_size`.
pub trait FileSystem {
    /// Size in bytes of whatever exists at `path`, `None` when nothing does.
    ///
    /// Any other failure (permissions, I/O) is an error, not a missing file.
    fn size_of(&self, path: &Path) -> io::Result<Option<u64>>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn size_of(&self, path: &Path) -> io::Result<Option<u64>> {
        (**self).size_of(path)
    }
}

/// The real filesystem, through `std::fs::metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn size_of(&self, path: &Path) -> io::Result<Option<u64>> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata.len())),
            // Interior NUL bytes and the like can never name an existing file
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::InvalidInput) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

pub fn file_type(input: &Input, options: &Options, outcome: &mut Outcome) {
    let Some(path) = input.as_text() else {
        return;
    };
    let extension = extension_of(&path);
    let allowed = options.allowed_types.as_deref().unwrap_or_default();

    if allowed.iter().any(|allowed| allowed == extension) {
        outcome.valid = true;
        outcome.file_extension = Some(extension.to_string());
    }
}

/// Text after the last `.` of the final path component; empty when there is none.
///
/// Case is kept, so `photo.JPG` has extension `JPG`. A leading dot counts:
/// `.env` has extension `env`.
pub fn extension_of(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
    name.rsplit_once('.').map_or("", |(_, extension)| extension)
}

pub fn file_size<F: FileSystem + ?Sized>(
    filesystem: &F,
    input: &Input,
    options: &Options,
    outcome: &mut Outcome,
) -> Result<(), CheckError> {
    let Some(path) = input.as_text() else {
        return Ok(());
    };
    let path = Path::new(&*path);

    let size = filesystem
        .size_of(path)
        .map_err(|source| CheckError::Filesystem {
            path: path.to_path_buf(),
            source,
        })?;

    let max_size = options.max_size.unwrap_or(u64::MAX);
    if let Some(size) = size {
        if size <= max_size {
            outcome.valid = true;
            outcome.file_size = Some(size);
        }
    }

    Ok(())
}
