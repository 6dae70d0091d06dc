//! Active filter state transitions.
//!
//! Activity is an overlay on a [`FilterCatalog`]: which options the user
//! has switched on. Every function here takes the current state by
//! reference and returns the next state; inputs are never mutated.
//!
//! Selections that arrive from outside a catalog (a decoded URL, a
//! snapshot taken before a catalog refresh) are represented by
//! [`ActiveSelection`], which carries only dimension + value identity.

use crate::catalog::{FilterCatalog, FilterGroup, FilterOption};
use crate::config::FilterConfig;
use crate::core::FilterDimension;
use serde::Serialize;
use std::collections::BTreeMap;

/// Anything that can answer "which values are active in this dimension".
pub trait ActivitySource {
    /// Active values of a dimension, in the source's own order.
    fn active_values(&self, dimension: FilterDimension) -> Vec<&str>;

    /// Check if a specific value is active.
    fn is_active(&self, dimension: FilterDimension, value: &str) -> bool {
        self.active_values(dimension).contains(&value)
    }
}

impl ActivitySource for FilterCatalog {
    fn active_values(&self, dimension: FilterDimension) -> Vec<&str> {
        self.group(dimension)
            .map(|group| {
                group
                    .active_options()
                    .map(|option| option.value.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_active(&self, dimension: FilterDimension, value: &str) -> bool {
        FilterCatalog::is_active(self, dimension, value)
    }
}

/// Active option values per dimension, detached from any catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ActiveSelection {
    values: BTreeMap<FilterDimension, Vec<String>>,
}

impl ActiveSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the active options of a catalog, in insertion order.
    pub fn from_catalog(catalog: &FilterCatalog) -> Self {
        let mut selection = Self::new();
        for dimension in catalog.dimensions() {
            let values = catalog.active_values(dimension);
            selection.set(dimension, values.into_iter().map(String::from).collect());
        }
        selection
    }

    /// Replace a dimension's active values. Empty lists remove the dimension
    /// and duplicate values are dropped, keeping the first occurrence.
    pub fn set(&mut self, dimension: FilterDimension, values: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        if unique.is_empty() {
            self.values.remove(&dimension);
        } else {
            self.values.insert(dimension, unique);
        }
    }

    pub fn with(mut self, dimension: FilterDimension, values: &[&str]) -> Self {
        self.set(dimension, values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Active values of a dimension (empty if none).
    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        self.values
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Dimensions with at least one active value.
    pub fn dimensions(&self) -> impl Iterator<Item = FilterDimension> + '_ {
        self.values.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ActivitySource for ActiveSelection {
    fn active_values(&self, dimension: FilterDimension) -> Vec<&str> {
        self.values(dimension).iter().map(String::as_str).collect()
    }
}

/// Re-applies previous activity to a freshly built catalog.
///
/// Each option in `new_catalog` becomes active exactly when `previous`
/// marks the same dimension/value active. Previously active values with
/// no option in `new_catalog` are dropped.
pub fn merge_activity(
    new_catalog: &FilterCatalog,
    previous: &impl ActivitySource,
) -> FilterCatalog {
    let merged = new_catalog.map_activity(|dimension, option| {
        previous.is_active(dimension, &option.value)
    });

    for dimension in FilterDimension::all() {
        let stale: Vec<&str> = previous
            .active_values(*dimension)
            .into_iter()
            .filter(|value| merged.option(*dimension, value).is_none())
            .collect();
        if !stale.is_empty() {
            tracing::debug!(
                "Dropping {} stale {} filter(s): {:?}",
                stale.len(),
                dimension,
                stale
            );
        }
    }

    merged
}

/// Sets one option's activity.
///
/// Unknown dimensions or values leave the state unchanged.
pub fn set_active(
    state: &FilterCatalog,
    dimension: FilterDimension,
    value: &str,
    active: bool,
) -> FilterCatalog {
    state
        .group_index(dimension)
        .and_then(|index| {
            state
                .group(dimension)
                .and_then(|group| group.with_active(value, active))
                .map(|group| state.replace_group(index, group))
        })
        .unwrap_or_else(|| state.clone())
}

/// Flips one option's activity. Unknown options are a no-op.
pub fn toggle_active(
    state: &FilterCatalog,
    dimension: FilterDimension,
    value: &str,
) -> FilterCatalog {
    match state.option(dimension, value) {
        Some(option) => set_active(state, dimension, value, !option.active),
        None => state.clone(),
    }
}

/// Deactivates every option in every dimension.
pub fn clear_all(state: &FilterCatalog) -> FilterCatalog {
    state.map_activity(|_, _| false)
}

/// Placeholder catalog holding only the selected options, all active.
///
/// Used before the first catalog load so a decoded selection survives
/// until [`merge_activity`] runs against the real catalog. Options carry
/// no synonyms; only configured dimensions are kept.
pub fn catalog_from_selection(
    selection: &ActiveSelection,
    config: &FilterConfig,
) -> FilterCatalog {
    let groups = config.dimensions().iter().map(|&dimension| {
        let mut group = FilterGroup::new(dimension, config.label_for(dimension));
        for value in selection.values(dimension) {
            let label = if value.is_empty() {
                config.missing_label()
            } else {
                value.as_str()
            };
            let mut option = FilterOption::new(value.as_str(), label);
            option.active = true;
            group.insert(option);
        }
        group
    });
    FilterCatalog::from_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::config::FilterConfig;
    use crate::core::{Item, Maturity};

    fn catalog() -> FilterCatalog {
        let items = [
            Item::new("a", "Alpha").with_provider("Red Hat"),
            Item::new("b", "Beta")
                .with_provider("Acme Inc")
                .with_maturity(Maturity::AutoPilot),
        ];
        build_catalog(&items, &FilterConfig::default())
    }

    #[test]
    fn test_set_active_marks_option() {
        let state = catalog();
        let next = set_active(&state, FilterDimension::Provider, "Red Hat", true);
        assert!(next.is_active(FilterDimension::Provider, "Red Hat"));
        assert!(!next.is_active(FilterDimension::Provider, "Acme"));
    }

    #[test]
    fn test_set_active_does_not_mutate_input() {
        let state = catalog();
        let _ = set_active(&state, FilterDimension::Provider, "Red Hat", true);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_set_active_unknown_option_is_noop() {
        let state = set_active(&catalog(), FilterDimension::Provider, "Red Hat", true);
        let next = set_active(&state, FilterDimension::Provider, "Nobody", true);
        assert_eq!(next, state);
    }

    #[test]
    fn test_set_active_unconfigured_dimension_is_noop() {
        let mut config = FilterConfig::default();
        config.filters.dimensions = vec![FilterDimension::Provider];
        let state = build_catalog(&[Item::new("a", "Alpha")], &config);
        let next = set_active(&state, FilterDimension::Maturity, "Basic Install", true);
        assert_eq!(next, state);
    }

    #[test]
    fn test_toggle_flips_activity() {
        let state = catalog();
        let on = toggle_active(&state, FilterDimension::Maturity, "Auto Pilot");
        assert!(on.is_active(FilterDimension::Maturity, "Auto Pilot"));
        let off = toggle_active(&on, FilterDimension::Maturity, "Auto Pilot");
        assert!(!off.has_active_filters());
    }

    #[test]
    fn test_clear_all_deactivates_everything() {
        let state = set_active(&catalog(), FilterDimension::Provider, "Acme", true);
        let state = set_active(&state, FilterDimension::Maturity, "Basic Install", true);
        let cleared = clear_all(&state);
        assert!(!cleared.has_active_filters());
        assert_eq!(cleared.option_count(), state.option_count());
    }

    #[test]
    fn test_merge_keeps_matching_and_drops_stale() {
        let previous = ActiveSelection::new()
            .with(FilterDimension::Provider, &["Acme", "Gone Corp"])
            .with(FilterDimension::Maturity, &["Auto Pilot"]);
        let merged = merge_activity(&catalog(), &previous);

        assert!(merged.is_active(FilterDimension::Provider, "Acme"));
        assert!(merged.is_active(FilterDimension::Maturity, "Auto Pilot"));
        assert!(!merged.is_active(FilterDimension::Provider, "Red Hat"));
        assert!(merged
            .option(FilterDimension::Provider, "Gone Corp")
            .is_none());
    }

    #[test]
    fn test_merge_from_previous_catalog_preserves_activity() {
        let before = set_active(&catalog(), FilterDimension::Provider, "Red Hat", true);
        let refreshed = build_catalog(
            &[
                Item::new("a", "Alpha").with_provider("Red Hat"),
                Item::new("z", "Zulu").with_provider("Zeta"),
            ],
            &FilterConfig::default(),
        );
        let merged = merge_activity(&refreshed, &before);
        assert!(merged.is_active(FilterDimension::Provider, "Red Hat"));
        assert!(!merged.is_active(FilterDimension::Provider, "Zeta"));
        assert!(merged.option(FilterDimension::Provider, "Acme").is_none());
    }

    #[test]
    fn test_selection_snapshot_in_insertion_order() {
        let state = set_active(&catalog(), FilterDimension::Provider, "Acme", true);
        let state = set_active(&state, FilterDimension::Provider, "Red Hat", true);
        let selection = ActiveSelection::from_catalog(&state);
        assert_eq!(
            selection.values(FilterDimension::Provider),
            &["Red Hat".to_string(), "Acme".to_string()]
        );
        assert!(selection.values(FilterDimension::Maturity).is_empty());
    }

    #[test]
    fn test_selection_set_deduplicates_and_drops_empty() {
        let mut selection = ActiveSelection::new();
        selection.set(
            FilterDimension::Provider,
            vec!["Acme".into(), "Acme".into(), "Zeta".into()],
        );
        assert_eq!(selection.values(FilterDimension::Provider).len(), 2);

        selection.set(FilterDimension::Provider, vec![]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_catalog_survives_first_load() {
        let selection = ActiveSelection::new()
            .with(FilterDimension::Provider, &["Acme", ""])
            .with(FilterDimension::Maturity, &["Auto Pilot"]);
        let placeholder = catalog_from_selection(&selection, &FilterConfig::default());
        assert_eq!(ActiveSelection::from_catalog(&placeholder), selection);
        let missing = placeholder.option(FilterDimension::Provider, "").unwrap();
        assert_eq!(missing.label, "N/A");

        let loaded = merge_activity(&catalog(), &placeholder);
        assert!(loaded.is_active(FilterDimension::Provider, "Acme"));
        assert!(loaded.is_active(FilterDimension::Maturity, "Auto Pilot"));
        // No item lacks a provider, so the missing bucket is stale.
        assert!(loaded.option(FilterDimension::Provider, "").is_none());
    }
}
