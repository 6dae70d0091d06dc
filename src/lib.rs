// Export modules for library usage
pub mod active;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod normalize;
pub mod search;
pub mod sort;
pub mod url_state;

// Re-export commonly used types
pub use crate::core::{
    load_items, parse_items, Error, FilterDimension, Item, Maturity, Result, ResultExt,
};

pub use crate::active::{
    catalog_from_selection, clear_all, merge_activity, set_active, toggle_active, ActiveSelection,
    ActivitySource,
};

pub use crate::catalog::{build_catalog, FilterCatalog, FilterGroup, FilterOption};

pub use crate::config::FilterConfig;

pub use crate::engine::{
    prepare_view, reduce, CatalogAction, CatalogLoad, CatalogState, PreparedView, UrlSync,
};

pub use crate::normalize::{normalize_maturity, strip_provider_suffix, synonyms_for};

pub use crate::search::{
    compute_counts, filter_by_groups, filter_items, matches_keyword, CountPolicy, FilterCounts,
};

pub use crate::sort::{sort_items, sort_option_keys, SortType};

pub use crate::url_state::{
    decode, encode, DecodedState, MemoryUrlPort, QueryParams, UrlPort, ViewType,
};
