//! Filter catalog derived from catalog items.
//!
//! For every configured [`FilterDimension`] the builder scans the items
//! once and registers each distinct normalised value as a
//! [`FilterOption`]. The result is a [`FilterCatalog`] with every option
//! inactive; activity is layered on top by [`crate::active`].
//!
//! The catalog is a persistent structure (`im::Vector`), so the state
//! transitions in [`crate::active`] return new catalogs that share
//! structure with the old one instead of deep copies.

use crate::config::FilterConfig;
use crate::core::{FilterDimension, Item};
use crate::normalize::{strip_provider_suffix, synonyms_for};
use serde::Serialize;
use std::collections::HashSet;

/// One selectable value within a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Matching key; identity of the option within its dimension
    pub value: String,
    /// Display label (the value, or the missing-value label)
    pub label: String,
    /// Alternate raw spellings that also match this option
    pub synonyms: Vec<String>,
    /// Whether the option is currently selected
    pub active: bool,
}

impl FilterOption {
    /// Create an inactive option without synonyms.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            synonyms: Vec::new(),
            active: false,
        }
    }

    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Check if a raw item value matches this option's value or a synonym.
    pub fn matches(&self, raw: &str) -> bool {
        self.value == raw || self.synonyms.iter().any(|synonym| synonym == raw)
    }
}

/// All options of one dimension, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterGroup {
    pub dimension: FilterDimension,
    pub label: String,
    options: im::Vector<FilterOption>,
}

impl FilterGroup {
    /// Create an empty group.
    pub fn new(dimension: FilterDimension, label: impl Into<String>) -> Self {
        Self {
            dimension,
            label: label.into(),
            options: im::Vector::new(),
        }
    }

    /// Register an option unless one with the same value exists.
    ///
    /// Returns `true` if the option was added. The first registration of a
    /// value wins.
    pub fn insert(&mut self, option: FilterOption) -> bool {
        if self.position(&option.value).is_some() {
            return false;
        }
        self.options.push_back(option);
        true
    }

    /// Options in insertion order.
    pub fn options(&self) -> impl Iterator<Item = &FilterOption> {
        self.options.iter()
    }

    /// Active options in insertion order.
    pub fn active_options(&self) -> impl Iterator<Item = &FilterOption> {
        self.options.iter().filter(|option| option.active)
    }

    pub fn has_active(&self) -> bool {
        self.options.iter().any(|option| option.active)
    }

    pub fn get(&self, value: &str) -> Option<&FilterOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    /// Copy of this group with one option's activity set, if it exists.
    pub(crate) fn with_active(&self, value: &str, active: bool) -> Option<Self> {
        let index = self.position(value)?;
        let mut group = self.clone();
        let mut option = group.options[index].clone();
        option.active = active;
        group.options.set(index, option);
        Some(group)
    }

    /// Copy of this group with activity recomputed for every option.
    pub(crate) fn map_activity(&self, activity: impl Fn(&FilterOption) -> bool) -> Self {
        let options = self
            .options
            .iter()
            .map(|option| FilterOption {
                active: activity(option),
                ..option.clone()
            })
            .collect();
        Self {
            dimension: self.dimension,
            label: self.label.clone(),
            options,
        }
    }
}

/// Filter groups for every configured dimension, in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterCatalog {
    groups: im::Vector<FilterGroup>,
}

impl FilterCatalog {
    /// Create a catalog from prepared groups.
    ///
    /// Groups repeating an earlier group's dimension are ignored.
    pub fn from_groups(groups: impl IntoIterator<Item = FilterGroup>) -> Self {
        let mut catalog = Self::default();
        for group in groups {
            if catalog.group(group.dimension).is_none() {
                catalog.groups.push_back(group);
            }
        }
        catalog
    }

    pub fn groups(&self) -> impl Iterator<Item = &FilterGroup> {
        self.groups.iter()
    }

    pub fn dimensions(&self) -> impl Iterator<Item = FilterDimension> + '_ {
        self.groups.iter().map(|group| group.dimension)
    }

    pub fn group(&self, dimension: FilterDimension) -> Option<&FilterGroup> {
        self.groups
            .iter()
            .find(|group| group.dimension == dimension)
    }

    pub fn option(&self, dimension: FilterDimension, value: &str) -> Option<&FilterOption> {
        self.group(dimension).and_then(|group| group.get(value))
    }

    /// Check if the option at this dimension/value exists and is active.
    pub fn is_active(&self, dimension: FilterDimension, value: &str) -> bool {
        self.option(dimension, value)
            .is_some_and(|option| option.active)
    }

    /// Check if any dimension has an active option.
    pub fn has_active_filters(&self) -> bool {
        self.groups.iter().any(FilterGroup::has_active)
    }

    /// Total number of options across all dimensions.
    pub fn option_count(&self) -> usize {
        self.groups.iter().map(FilterGroup::len).sum()
    }

    pub(crate) fn replace_group(&self, index: usize, group: FilterGroup) -> Self {
        let mut groups = self.groups.clone();
        groups.set(index, group);
        Self { groups }
    }

    pub(crate) fn group_index(&self, dimension: FilterDimension) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.dimension == dimension)
    }

    pub(crate) fn map_activity(
        &self,
        activity: impl Fn(FilterDimension, &FilterOption) -> bool,
    ) -> Self {
        Self {
            groups: self
                .groups
                .iter()
                .map(|group| group.map_activity(|option| activity(group.dimension, option)))
                .collect(),
        }
    }
}

/// Builds the base filter catalog (all options inactive) from items.
///
/// One pass over the items per configured dimension.
pub fn build_catalog(items: &[Item], config: &FilterConfig) -> FilterCatalog {
    let catalog = FilterCatalog::from_groups(
        config
            .dimensions()
            .iter()
            .map(|&dimension| build_group(items, dimension, config)),
    );
    tracing::debug!(
        "Built filter catalog: {} options across {} dimensions from {} items",
        catalog.option_count(),
        config.dimensions().len(),
        items.len()
    );
    catalog
}

/// Builds the option group for a single dimension.
///
/// Each item is normalised once; only the first item carrying a value
/// builds its option.
pub fn build_group(
    items: &[Item],
    dimension: FilterDimension,
    config: &FilterConfig,
) -> FilterGroup {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut group = FilterGroup::new(dimension, config.label_for(dimension));
    group.options = items
        .iter()
        .map(|item| normalized_value(item, dimension, config))
        .filter(|value| seen.insert(*value))
        .map(|value| option_for(value, dimension, config))
        .collect();
    group
}

/// The value an item contributes to a dimension.
fn normalized_value<'a>(
    item: &'a Item,
    dimension: FilterDimension,
    config: &FilterConfig,
) -> &'a str {
    let raw = item.dimension_value(dimension);
    match dimension {
        FilterDimension::Provider => strip_provider_suffix(raw, config.provider_suffixes()),
        FilterDimension::Maturity => raw,
    }
}

/// Builds the option for a normalised value.
///
/// Provider options always carry the suffixed spellings, including the
/// missing bucket, whose synonyms are the bare suffixes.
fn option_for(value: &str, dimension: FilterDimension, config: &FilterConfig) -> FilterOption {
    let option = FilterOption::new(value, label_for_value(value, config));
    match dimension {
        FilterDimension::Provider => {
            option.with_synonyms(synonyms_for(value, config.provider_suffixes()))
        }
        FilterDimension::Maturity => option,
    }
}

fn label_for_value<'a>(value: &'a str, config: &'a FilterConfig) -> &'a str {
    if value.is_empty() {
        config.missing_label()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Maturity;

    fn items() -> Vec<Item> {
        vec![
            Item::new("a", "Alpha").with_provider("Red Hat"),
            Item::new("b", "Beta")
                .with_provider("Acme Inc")
                .with_maturity(Maturity::AutoPilot),
            Item::new("c", "Gamma")
                .with_provider("Acme, LLC")
                .with_maturity(Maturity::FullLifecycle),
            Item::new("d", "Delta"),
        ]
    }

    #[test]
    fn test_build_catalog_groups_in_configured_order() {
        let catalog = build_catalog(&items(), &FilterConfig::default());
        let dimensions: Vec<FilterDimension> = catalog.dimensions().collect();
        assert_eq!(
            dimensions,
            vec![FilterDimension::Provider, FilterDimension::Maturity]
        );
        assert!(!catalog.has_active_filters());
    }

    #[test]
    fn test_provider_values_are_normalized_and_deduplicated() {
        let catalog = build_catalog(&items(), &FilterConfig::default());
        let group = catalog.group(FilterDimension::Provider).unwrap();
        let values: Vec<&str> = group.options().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Red Hat", "Acme", ""]);
        assert_eq!(group.label, "Provider");
    }

    #[test]
    fn test_provider_options_carry_synonyms() {
        let catalog = build_catalog(&items(), &FilterConfig::default());
        let acme = catalog.option(FilterDimension::Provider, "Acme").unwrap();
        assert!(acme.matches("Acme Inc"));
        assert!(acme.matches("Acme, LLC"));
        assert!(acme.matches("Acme"));
        assert!(!acme.matches("Acme Corp"));
    }

    #[test]
    fn test_missing_value_registered_under_missing_label() {
        let catalog = build_catalog(&items(), &FilterConfig::default());
        let missing = catalog.option(FilterDimension::Provider, "").unwrap();
        assert_eq!(missing.label, "N/A");
        assert!(missing.matches(""));
        assert!(missing.matches(" LLC"));
    }

    #[test]
    fn test_suffix_only_provider_joins_missing_bucket() {
        let items = [
            Item::new("a", "Alpha").with_provider(" LLC"),
            Item::new("b", "Beta"),
            Item::new("c", "Gamma").with_provider(", Inc."),
        ];
        let catalog = build_catalog(&items, &FilterConfig::default());
        let group = catalog.group(FilterDimension::Provider).unwrap();

        assert_eq!(group.len(), 1);
        let missing = group.get("").unwrap();
        assert!(items
            .iter()
            .all(|item| missing.matches(item.dimension_value(FilterDimension::Provider))));
    }

    #[test]
    fn test_maturity_values_pass_through_without_synonyms() {
        let catalog = build_catalog(&items(), &FilterConfig::default());
        let group = catalog.group(FilterDimension::Maturity).unwrap();
        let values: Vec<&str> = group.options().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["Basic Install", "Auto Pilot", "Full Lifecycle"]
        );
        assert!(group.options().all(|o| o.synonyms.is_empty()));
    }

    #[test]
    fn test_only_configured_dimensions_are_built() {
        let mut config = FilterConfig::default();
        config.filters.dimensions = vec![FilterDimension::Maturity];
        let catalog = build_catalog(&items(), &config);
        assert!(catalog.group(FilterDimension::Provider).is_none());
        assert!(catalog.group(FilterDimension::Maturity).is_some());
    }

    #[test]
    fn test_empty_item_list_builds_empty_groups() {
        let catalog = build_catalog(&[], &FilterConfig::default());
        assert_eq!(catalog.option_count(), 0);
        assert!(catalog.groups().all(FilterGroup::is_empty));
    }

    #[test]
    fn test_insert_first_registration_wins() {
        let mut group = FilterGroup::new(FilterDimension::Provider, "Provider");
        assert!(group.insert(FilterOption::new("Acme", "first")));
        assert!(!group.insert(FilterOption::new("Acme", "second")));
        assert_eq!(group.get("Acme").unwrap().label, "first");
    }
}
