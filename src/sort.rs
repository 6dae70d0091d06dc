//! Sort functionality for items and filter options.

use crate::catalog::{FilterGroup, FilterOption};
use crate::core::{Error, FilterDimension, Item, Maturity};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Item sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Display name A-Z (default)
    #[default]
    Ascending,
    /// Display name Z-A
    Descending,
}

impl SortType {
    /// Query string spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::Ascending => "ascending",
            SortType::Descending => "descending",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SortType::Ascending => "A-Z",
            SortType::Descending => "Z-A",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortType::Ascending),
            "descending" => Ok(SortType::Descending),
            _ => Err(Error::invalid_value("sort type", s)),
        }
    }
}

/// Sorts items by display name, case-insensitively.
///
/// Pure function - returns new sorted Vec. The ascending sort is stable;
/// descending is the ascending result reversed, so equal names come out
/// in reverse input order.
pub fn sort_items(mut items: Vec<&Item>, sort: SortType) -> Vec<&Item> {
    items.sort_by_cached_key(|item| item.display_name.to_lowercase());
    if sort == SortType::Descending {
        items.reverse();
    }
    items
}

/// Rank of a maturity value; unknown values rank after every tier.
fn maturity_rank(value: &str) -> usize {
    Maturity::all()
        .iter()
        .find(|tier| tier.as_str() == value)
        .map(Maturity::rank)
        .unwrap_or(Maturity::all().len())
}

/// Sort key of a provider value: "Red Hat" in any casing sorts first.
fn provider_key(value: &str) -> &str {
    if value.eq_ignore_ascii_case("red hat") {
        ""
    } else {
        value
    }
}

/// Compares two option values of a dimension.
pub fn compare_option_values(dimension: FilterDimension, a: &str, b: &str) -> Ordering {
    match dimension {
        FilterDimension::Provider => provider_key(a).cmp(provider_key(b)),
        FilterDimension::Maturity => maturity_rank(a).cmp(&maturity_rank(b)),
    }
}

/// Orders option values for presentation.
///
/// The sort is stable, so values that compare equal (unranked maturity
/// values) keep their encounter order.
pub fn sort_option_keys<'a>(
    values: impl IntoIterator<Item = &'a str>,
    dimension: FilterDimension,
) -> Vec<&'a str> {
    let mut values: Vec<&str> = values.into_iter().collect();
    values.sort_by(|a, b| compare_option_values(dimension, a, b));
    values
}

/// A group's options in presentation order.
pub fn sort_group_options(group: &FilterGroup) -> Vec<&FilterOption> {
    let mut options: Vec<&FilterOption> = group.options().collect();
    options.sort_by(|a, b| compare_option_values(group.dimension, &a.value, &b.value));
    options
}
