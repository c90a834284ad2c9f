//! MIME Resolver Module
//!
//! Maps a file's extension to the Content-Type sent with it.

use std::path::Path;

/// Content type used when the extension is missing or unknown
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Returns the Content-Type for `path`, based on its extension.
///
/// Extension matching is case-insensitive. Unknown extensions get
/// [`DEFAULT_CONTENT_TYPE`].
pub fn resolve_type(path: impl AsRef<Path>) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    content_type_for(extension.as_deref())
}

/// Returns the Content-Type for a bare extension (without the dot).
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio and video
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",

        // Archives and documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",

        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(resolve_type("index.html"), "text/html");
        assert_eq!(resolve_type("./serverroot/style.css"), "text/css");
        assert_eq!(resolve_type("app.js"), "application/javascript");
        assert_eq!(resolve_type("data.json"), "application/json");
        assert_eq!(resolve_type("cat.jpg"), "image/jpeg");
        assert_eq!(resolve_type("notes.txt"), "text/plain");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resolve_type("PHOTO.JPG"), "image/jpeg");
        assert_eq!(resolve_type("Index.Html"), "text/html");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(resolve_type("archive.xyz"), DEFAULT_CONTENT_TYPE);
        assert_eq!(resolve_type("Makefile"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(None), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_directory_index_resolves_to_html() {
        assert_eq!(resolve_type("./serverroot/docs/index.html"), "text/html");
    }
}
