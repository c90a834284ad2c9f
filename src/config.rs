//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::cache::{DEFAULT_CAPACITY, MIN_CAPACITY};

const DEFAULT_PORT: u16 = 3490;
const DEFAULT_SERVER_ROOT: &str = "./serverroot";
const DEFAULT_SERVER_FILES: &str = "./serverfiles";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of entries the response cache can hold
    pub cache_capacity: usize,
    /// Directory user-requested files are served from
    pub server_root: PathBuf,
    /// Directory holding the server's own assets (the 404 page)
    pub server_files: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3490)
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 10)
    /// - `SERVER_ROOT` - Document root (default: ./serverroot)
    /// - `SERVER_FILES` - Server asset root (default: ./serverfiles)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Missing values fall back to the defaults. Unparsable values also fall
    /// back, with a warning. A capacity of zero or below is clamped to
    /// [`MIN_CAPACITY`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            server_port: parse_or("SERVER_PORT", lookup("SERVER_PORT"), defaults.server_port),
            cache_capacity: parse_capacity(lookup("CACHE_CAPACITY"), defaults.cache_capacity),
            server_root: lookup("SERVER_ROOT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.server_root),
            server_files: lookup("SERVER_FILES")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.server_files),
        }
    }

    /// Location of the page served for every 404.
    pub fn not_found_page(&self) -> PathBuf {
        self.server_files.join("404.html")
    }
}

fn parse_or<T: FromStr + std::fmt::Display>(name: &str, value: Option<String>, default: T) -> T {
    let Some(raw) = value else {
        return default;
    };

    match raw.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("Invalid {} value {:?}, using default {}", name, raw, default);
            default
        }
    }
}

/// Parses `CACHE_CAPACITY` as a signed count; anything below
/// [`MIN_CAPACITY`] is clamped.
fn parse_capacity(value: Option<String>, default: usize) -> usize {
    let requested: i64 = parse_or("CACHE_CAPACITY", value, default as i64);

    if requested < MIN_CAPACITY as i64 {
        warn!(
            "CACHE_CAPACITY {} is below the minimum, clamping to {}",
            requested, MIN_CAPACITY
        );
        return MIN_CAPACITY;
    }

    usize::try_from(requested).unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            cache_capacity: DEFAULT_CAPACITY,
            server_root: PathBuf::from(DEFAULT_SERVER_ROOT),
            server_files: PathBuf::from(DEFAULT_SERVER_FILES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3490);
        assert_eq!(config.cache_capacity, 10);
        assert_eq!(config.server_root, PathBuf::from("./serverroot"));
        assert_eq!(config.server_files, PathBuf::from("./serverfiles"));
    }

    #[test]
    fn test_config_from_empty_lookup() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "8080"),
            ("CACHE_CAPACITY", "64"),
            ("SERVER_ROOT", "/srv/www"),
            ("SERVER_FILES", "/srv/assets"),
        ]));

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cache_capacity, 64);
        assert_eq!(config.server_root, PathBuf::from("/srv/www"));
        assert_eq!(config.not_found_page(), PathBuf::from("/srv/assets/404.html"));
    }

    #[test]
    fn test_config_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("CACHE_CAPACITY", "lots"),
            ("SERVER_ROOT", ""),
        ]));

        assert_eq!(config.server_port, 3490);
        assert_eq!(config.cache_capacity, 10);
        assert_eq!(config.server_root, PathBuf::from("./serverroot"));
    }

    #[test]
    fn test_config_non_positive_capacity_is_clamped() {
        for raw in ["-5", "0", " -1 "] {
            let config = Config::from_lookup(lookup_from(&[("CACHE_CAPACITY", raw)]));
            assert_eq!(config.cache_capacity, MIN_CAPACITY, "CACHE_CAPACITY={:?}", raw);
        }

        let config = Config::from_lookup(lookup_from(&[("CACHE_CAPACITY", "1")]));
        assert_eq!(config.cache_capacity, 1);
    }
}
