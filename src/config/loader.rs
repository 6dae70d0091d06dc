use std::fs;
use std::path::{Path, PathBuf};

use super::core::FilterConfig;
use crate::core::{Error, Result};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".catalog-filter.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from TOML string
pub fn parse_config(contents: &str) -> std::result::Result<FilterConfig, toml::de::Error> {
    toml::from_str::<FilterConfig>(contents)
}

/// Load configuration from an explicit path.
///
/// Unlike discovery, a missing or invalid file is an error here: the
/// caller asked for this file specifically.
pub fn load_config_from(path: &Path) -> Result<FilterConfig> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents).map_err(|source| Error::Configuration {
        path: path.to_path_buf(),
        source,
    })
}

/// Try loading config from a specific path, logging and skipping failures.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<FilterConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover configuration starting from `start` and walking up.
pub fn discover_config(start: PathBuf) -> FilterConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            FilterConfig::default()
        })
}

/// Discover configuration from the current directory.
pub fn load_config() -> FilterConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            FilterConfig::default()
        }
    }
}
