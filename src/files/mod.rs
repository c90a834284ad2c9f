//! Files Module
//!
//! Disk-side collaborators of the request handler: loading files, mapping
//! request paths onto document roots and picking Content-Types.

pub mod loader;
pub mod mime;
pub mod resolve;

pub use loader::{load, LoadedFile};
pub use mime::{resolve_type, DEFAULT_CONTENT_TYPE};
pub use resolve::{candidates, INDEX_FILE};
