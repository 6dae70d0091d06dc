//! URL state codec.
//!
//! Keyword, active filters, view and sort are mirrored into the query
//! string so a filtered view can be shared or bookmarked:
//!
//! ```text
//! ?keyword=db&view=list&sort=descending&provider=%5B%22Red+Hat%22%5D
//! ```
//!
//! Each configured dimension with active options gets one key holding a
//! JSON array of the active values. Encoding mutates an existing
//! [`QueryParams`] so unrelated parameters survive. Decoding never fails:
//! malformed values are logged and skipped.
//!
//! The navigation target itself sits behind the [`UrlPort`] trait.

use crate::active::{ActiveSelection, ActivitySource};
use crate::catalog::FilterCatalog;
use crate::core::{Error, FilterDimension, Result};
use crate::sort::SortType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Query key holding the search keyword.
pub const KEYWORD_KEY: &str = "keyword";
/// Query key holding the view type.
pub const VIEW_KEY: &str = "view";
/// Query key holding the sort type.
pub const SORT_KEY: &str = "sort";

/// How the visible items are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// Tile grid (default)
    #[default]
    Card,
    /// One row per item
    List,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Card => "card",
            ViewType::List => "list",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "card" => Ok(ViewType::Card),
            "list" => Ok(ViewType::List),
            _ => Err(Error::invalid_value("view type", s)),
        }
    }
}

/// Ordered query string parameters.
///
/// Keys keep their position when updated; new keys are appended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value of a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a key, replacing its first occurrence and dropping any others.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Remove every occurrence of a key.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize back to a query string (without a leading `?`).
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Navigation target the URL state is read from and written to.
pub trait UrlPort {
    /// Current query string.
    fn read(&self) -> String;

    /// Replace the current query string without navigating.
    fn write(&mut self, query: &str) -> Result<()>;
}

/// In-memory navigation target.
#[derive(Debug, Clone, Default)]
pub struct MemoryUrlPort {
    query: String,
    writes: usize,
}

impl MemoryUrlPort {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            writes: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl UrlPort for MemoryUrlPort {
    fn read(&self) -> String {
        self.query.clone()
    }

    fn write(&mut self, query: &str) -> Result<()> {
        self.query = query.to_string();
        self.writes += 1;
        Ok(())
    }
}

/// State recovered from a query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedState {
    pub keyword: String,
    pub filters: ActiveSelection,
    pub view: Option<ViewType>,
    pub sort: Option<SortType>,
}

/// Writes keyword, active filters, view and sort into `params`.
///
/// Only keys owned by the codec are touched: empty keyword, absent
/// view/sort and dimensions without active options are removed, the rest
/// are set. Active values are written in catalog insertion order.
pub fn encode(
    params: &mut QueryParams,
    keyword: &str,
    filters: &FilterCatalog,
    view: Option<ViewType>,
    sort: Option<SortType>,
) {
    set_or_remove(params, KEYWORD_KEY, Some(keyword).filter(|k| !k.is_empty()));
    set_or_remove(params, VIEW_KEY, view.map(|v| v.as_str()));
    set_or_remove(params, SORT_KEY, sort.map(|s| s.as_str()));

    for dimension in filters.dimensions() {
        let active = filters.active_values(dimension);
        if active.is_empty() {
            params.remove(dimension.as_str());
            continue;
        }
        match serde_json::to_string(&active) {
            Ok(json) => params.set(dimension.as_str(), json),
            Err(e) => tracing::warn!("Failed to encode {} filters: {}", dimension, e),
        }
    }
}

fn set_or_remove(params: &mut QueryParams, key: &str, value: Option<&str>) {
    match value {
        Some(value) => params.set(key, value),
        None => params.remove(key),
    }
}

/// Reads keyword, active filters, view and sort from `params`.
///
/// Only `dimensions` are looked up. A dimension whose value is not a JSON
/// array of strings is logged and left empty; an unrecognised view or
/// sort is logged and left unset. Decoding itself never fails.
pub fn decode(params: &QueryParams, dimensions: &[FilterDimension]) -> DecodedState {
    let mut filters = ActiveSelection::new();
    for &dimension in dimensions {
        let Some(raw) = params.get(dimension.as_str()) else {
            continue;
        };
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(values) => filters.set(dimension, values),
            Err(e) => tracing::warn!("Ignoring malformed {} filter {:?}: {}", dimension, raw, e),
        }
    }

    DecodedState {
        keyword: params.get(KEYWORD_KEY).unwrap_or_default().to_string(),
        filters,
        view: parse_optional(params, VIEW_KEY),
        sort: parse_optional(params, SORT_KEY),
    }
}

fn parse_optional<T: FromStr<Err = Error>>(params: &QueryParams, key: &str) -> Option<T> {
    let raw = params.get(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {} parameter: {}", key, e);
            None
        }
    }
}
