//! API Handlers
//!
//! HTTP request handlers: the dice roll, the server clock, and file serving
//! backed by the response cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
};
use chrono::Local;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::api::response::{file_response, not_found_response, text_response};
use crate::cache::{self, CacheStore, CachedFile, SharedCache};
use crate::config::Config;
use crate::error::{Result, ServeError};
use crate::files;

/// Application state shared across all handlers.
///
/// Contains the cache store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Response cache shared by every connection
    pub cache: SharedCache,
    /// Document root for user-requested files
    pub server_root: Arc<PathBuf>,
    /// Error page served for every 404
    pub not_found_page: Arc<CachedFile>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        cache: CacheStore,
        server_root: impl Into<PathBuf>,
        not_found_page: CachedFile,
    ) -> Self {
        Self {
            cache: cache::shared(cache),
            server_root: Arc::new(server_root.into()),
            not_found_page: Arc::new(not_found_page),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Loads the 404 page from the server files root up front; the server
    /// cannot run without it, so a failure here should stop startup.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let page = load_not_found_page(&config.not_found_page()).await?;
        let cache = CacheStore::new(config.cache_capacity);
        Ok(Self::new(cache, config.server_root.clone(), page))
    }
}

/// Loads the server's 404 page.
pub async fn load_not_found_page(path: &Path) -> Result<CachedFile> {
    let file = files::load(path).await?;
    let content_type = files::resolve_type(&file.path);
    let len = file.len();
    Ok(CachedFile::new("404.html", content_type, file.data, len))
}

/// Handler for /d20
///
/// Rolls a twenty-sided die and returns the result as text.
pub async fn d20_handler(State(state): State<AppState>, method: Method) -> Response {
    if method != Method::GET {
        return not_found_handler(State(state)).await;
    }

    let roll = roll_d20();
    debug!("d20 rolled {}", roll);
    text_response(format!("{}\n", roll))
}

/// Handler for /date
///
/// Returns the server's local time as text.
pub async fn date_handler(State(state): State<AppState>, method: Method) -> Response {
    if method != Method::GET {
        return not_found_handler(State(state)).await;
    }

    text_response(format!("{}\n", Local::now().format("%a %b %e %H:%M:%S %Y")))
}

/// Handler for every other path
///
/// Serves the file for the request path from the cache, loading and caching
/// it on a miss. Non-GET requests and unknown paths get the 404 page.
pub async fn file_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        debug!("Unsupported method {} for {}", method, uri.path());
        return not_found_response(&state.not_found_page);
    }

    match fetch_file(&state, uri.path()).await {
        Ok(file) => file_response(&file),
        Err(e) if e.is_expected() => {
            debug!("{}", e);
            not_found_response(&state.not_found_page)
        }
        Err(e) => {
            warn!("{}", e);
            not_found_response(&state.not_found_page)
        }
    }
}

/// Fallback for unsupported methods on fixed routes.
pub async fn not_found_handler(State(state): State<AppState>) -> Response {
    not_found_response(&state.not_found_page)
}

/// Returns the file for `request_path`, from the cache when possible.
///
/// On a miss the path is resolved under the document root (with the
/// directory-index fallback), loaded, typed by its resolved filename and
/// inserted into the cache under the request path.
pub async fn fetch_file(state: &AppState, request_path: &str) -> Result<Arc<CachedFile>> {
    // Read lock only; released before any disk access
    if let Some(entry) = state.cache.read().await.get(request_path) {
        return Ok(entry);
    }

    let file = load_first(&state.server_root, request_path).await?;
    let content_type = files::resolve_type(&file.path);
    let len = file.len();

    let entry = {
        let mut cache = state.cache.write().await;
        cache.put(request_path, content_type, file.data, len)
    };

    info!(
        "Loaded {} from {} ({} bytes, {})",
        request_path,
        file.path.display(),
        len,
        content_type
    );

    Ok(entry)
}

/// Tries the direct path, then its directory index.
///
/// Only a missing file moves on to the next candidate; any other I/O
/// failure is returned as-is.
async fn load_first(root: &Path, request_path: &str) -> Result<files::LoadedFile> {
    for path in files::candidates(root, request_path)? {
        match files::load(&path).await {
            Ok(file) => return Ok(file),
            Err(ServeError::NotFound(_)) => continue,
            Err(e) => return Err(e),
        }
    }

    // Report missing files by request path rather than disk path
    Err(ServeError::NotFound(request_path.to_string()))
}

fn roll_d20() -> u8 {
    rand::thread_rng().gen_range(1..=20)
}
