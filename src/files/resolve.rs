//! Path Resolution Module
//!
//! Turns a request path into the filesystem paths to try under a document root.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, ServeError};

/// File tried when a request names a directory
pub const INDEX_FILE: &str = "index.html";

/// Joins `request_path` onto `root`.
///
/// Leading slashes and `.` segments are dropped. Any `..` segment is rejected
/// with [`ServeError::Forbidden`], so the result always stays under `root`.
pub fn resolve(root: &Path, request_path: &str) -> Result<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let mut resolved = root.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ServeError::Forbidden(request_path.to_string()));
            }
        }
    }

    Ok(resolved)
}

/// Returns the paths to load for `request_path`, in order.
///
/// The first candidate is the path itself, the second its directory index
/// (`<path>/index.html`). Directory names may contain dots (`v1.2`), so the
/// index is always offered.
pub fn candidates(root: &Path, request_path: &str) -> Result<[PathBuf; 2]> {
    let direct = resolve(root, request_path)?;
    let index = direct.join(INDEX_FILE);
    Ok([direct, index])
}
