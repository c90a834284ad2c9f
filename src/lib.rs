//! File Cache Server - A small static file server with a response cache
//!
//! Serves files from a document root, keeping recently loaded files in a
//! bounded in-memory cache with insertion-order eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod files;

pub use api::AppState;
pub use config::Config;
