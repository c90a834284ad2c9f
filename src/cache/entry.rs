//! Cache Entry Module
//!
//! Defines the immutable record stored for each cached request path.

use bytes::Bytes;

// == Cached File ==
/// A file loaded from disk and stored under the request path that produced it.
///
/// Entries are never mutated after insertion. A changed file on disk is only
/// picked up once its entry is evicted or removed and the path is loaded again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFile {
    /// Request path used as the cache key (e.g. `/index.html`)
    pub key: String,
    /// MIME type sent as `Content-Type`
    pub content_type: String,
    /// File bytes as they were at insertion time
    pub content: Bytes,
    /// Byte length of `content`
    pub content_length: usize,
}

impl CachedFile {
    // == Constructor ==
    /// Creates a new entry, taking ownership of `content`.
    ///
    /// `content_length` is authoritative: the buffer is cut down to it if it
    /// is longer, so `content_length == content.len()` always holds afterwards.
    /// Debug builds assert that the two agree.
    pub fn new(
        key: impl Into<String>,
        content_type: impl Into<String>,
        content: Bytes,
        content_length: usize,
    ) -> Self {
        debug_assert_eq!(
            content_length,
            content.len(),
            "content_length does not match the content buffer"
        );

        let content = trim_to_length(content, content_length);
        let content_length = content.len();

        Self {
            key: key.into(),
            content_type: content_type.into(),
            content,
            content_length,
        }
    }
}

/// Cuts `content` down to `content_length` bytes when it is longer.
///
/// A shorter buffer is returned unchanged; callers take its real length.
pub(crate) fn trim_to_length(content: Bytes, content_length: usize) -> Bytes {
    if content_length < content.len() {
        content.slice(..content_length)
    } else {
        content
    }
}
