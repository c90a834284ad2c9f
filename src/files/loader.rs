//! File Loader Module
//!
//! Reads whole files from disk into owned buffers.

use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;

use crate::error::{Result, ServeError};

// == Loaded File ==
/// Full contents of a file read from disk.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    /// Filesystem path the bytes came from
    pub path: PathBuf,
    /// File contents
    pub data: Bytes,
}

impl LoadedFile {
    /// Byte length of the file.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Reads the file at `path`.
///
/// A missing file, or a path that names a directory, is reported as
/// [`ServeError::NotFound`]; every other I/O failure as [`ServeError::Io`].
pub async fn load(path: impl AsRef<Path>) -> Result<LoadedFile> {
    let path = path.as_ref();

    let data = match fs::read(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ServeError::NotFound(path.display().to_string()));
        }
        Err(source) => {
            // Reading a directory fails with EISDIR rather than NotFound
            if is_dir(path).await {
                return Err(ServeError::NotFound(path.display().to_string()));
            }
            return Err(ServeError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    Ok(LoadedFile {
        path: path.to_path_buf(),
        data: Bytes::from(data),
    })
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_dir())
}
