//! Configuration for catalog-filter.
//!
//! Configuration precedence: CLI args > env vars > config file > defaults.
//! The engine never reads configuration itself; callers resolve a
//! [`FilterConfig`] once and pass it by reference.

mod core;
mod loader;

pub use self::core::{FilterConfig, FiltersConfig, NormalizationConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
