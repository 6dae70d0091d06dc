//! Keyword search, group filtering and per-option counts.
//!
//! Visible items are the items that match the keyword AND, for every
//! dimension with at least one active option, match one of that
//! dimension's active options (value or synonym). Dimensions without
//! active options impose no constraint.

use crate::catalog::{FilterCatalog, FilterGroup};
use crate::core::{Error, FilterDimension, Item};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which item list option counts are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Every option is counted against the full item list, ignoring the
    /// keyword and all active filters.
    #[default]
    Potential,
    /// Each option is counted against the items passing the keyword and
    /// the active filters of every other dimension.
    Current,
}

impl CountPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountPolicy::Potential => "potential",
            CountPolicy::Current => "current",
        }
    }
}

impl fmt::Display for CountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "potential" => Ok(CountPolicy::Potential),
            "current" => Ok(CountPolicy::Current),
            _ => Err(Error::invalid_value("count policy", s)),
        }
    }
}

/// Number of items matching each option, per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterCounts {
    counts: BTreeMap<FilterDimension, BTreeMap<String, usize>>,
}

impl FilterCounts {
    /// Count for an option; unknown options count zero.
    pub fn get(&self, dimension: FilterDimension, value: &str) -> usize {
        self.counts
            .get(&dimension)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0)
    }

    /// All counts of one dimension, keyed by option value.
    pub fn dimension(&self, dimension: FilterDimension) -> Option<&BTreeMap<String, usize>> {
        self.counts.get(&dimension)
    }

    fn insert(&mut self, dimension: FilterDimension, value: &str, count: usize) {
        self.counts
            .entry(dimension)
            .or_default()
            .insert(value.to_string(), count);
    }
}

/// Check if an item matches a keyword.
///
/// An empty keyword matches everything. Otherwise the lower-cased keyword
/// must be a substring of the lower-cased name, display name or
/// categories; missing fields count as empty.
pub fn matches_keyword(item: &Item, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }
    let needle = keyword.to_lowercase();
    [
        item.name.as_str(),
        item.display_name.as_str(),
        item.categories.as_deref().unwrap_or(""),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Check if an item satisfies one group's active options.
///
/// Groups with no active option accept every item.
fn matches_group(item: &Item, group: &FilterGroup) -> bool {
    if !group.has_active() {
        return true;
    }
    let raw = item.dimension_value(group.dimension);
    group.active_options().any(|option| option.matches(raw))
}

/// Check if an item satisfies every constrained group of the catalog.
pub fn matches_groups(item: &Item, state: &FilterCatalog) -> bool {
    state.groups().all(|group| matches_group(item, group))
}

/// Keeps the items that pass every dimension with an active option.
///
/// Order is preserved. With no active options the input comes back
/// unchanged.
pub fn filter_by_groups<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    state: &FilterCatalog,
) -> Vec<&'a Item> {
    items
        .into_iter()
        .filter(|item| matches_groups(item, state))
        .collect()
}

/// Keeps the items matching the keyword.
pub fn filter_by_keyword<'a>(items: &'a [Item], keyword: &str) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| matches_keyword(item, keyword))
        .collect()
}

/// Visible items: keyword matches intersected with the group filters.
pub fn filter_items<'a>(
    items: &'a [Item],
    keyword: &str,
    state: &FilterCatalog,
) -> Vec<&'a Item> {
    filter_by_groups(filter_by_keyword(items, keyword), state)
}

/// Counts, for every option of every dimension, the items it matches.
///
/// The active flag of the counted option itself never matters. See
/// [`CountPolicy`] for which items are counted.
pub fn compute_counts(
    items: &[Item],
    keyword: &str,
    state: &FilterCatalog,
    policy: CountPolicy,
) -> FilterCounts {
    match policy {
        CountPolicy::Potential => count_against(state, |_| items.iter().collect()),
        CountPolicy::Current => {
            let keyword_matches = filter_by_keyword(items, keyword);
            count_against(state, |dimension| {
                keyword_matches
                    .iter()
                    .copied()
                    .filter(|item| {
                        state
                            .groups()
                            .filter(|group| group.dimension != dimension)
                            .all(|group| matches_group(item, group))
                    })
                    .collect()
            })
        }
    }
}

fn count_against<'a>(
    state: &FilterCatalog,
    population: impl Fn(FilterDimension) -> Vec<&'a Item>,
) -> FilterCounts {
    let mut counts = FilterCounts::default();
    for group in state.groups() {
        let items = population(group.dimension);
        for option in group.options() {
            let count = items
                .iter()
                .filter(|item| option.matches(item.dimension_value(group.dimension)))
                .count();
            counts.insert(group.dimension, &option.value, count);
        }
    }
    counts
}
