//! Filter dimensions known at build time.

use super::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named axis along which catalog items can be filtered.
///
/// The raw name (`as_str`) doubles as the query string key and as the
/// fallback label when no label override is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDimension {
    /// Organisation publishing the item (free text, suffix-normalised)
    Provider,
    /// Capability tier of the item
    Maturity,
}

impl FilterDimension {
    /// Raw dimension name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterDimension::Provider => "provider",
            FilterDimension::Maturity => "maturity",
        }
    }

    /// Get all dimensions
    pub fn all() -> &'static [FilterDimension] {
        &[FilterDimension::Provider, FilterDimension::Maturity]
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterDimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterDimension::all()
            .iter()
            .copied()
            .find(|dimension| dimension.as_str() == s)
            .ok_or_else(|| Error::invalid_value("filter dimension", s))
    }
}
