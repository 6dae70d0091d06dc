//! Catalog item records.

use super::dimension::FilterDimension;
use super::errors::{self, ResultExt};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Capability tier of a catalog item, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Maturity {
    #[default]
    #[serde(rename = "Basic Install")]
    BasicInstall,
    #[serde(rename = "Seamless Upgrades")]
    SeamlessUpgrades,
    #[serde(rename = "Full Lifecycle")]
    FullLifecycle,
    #[serde(rename = "Deep Insights")]
    DeepInsights,
    #[serde(rename = "Auto Pilot")]
    AutoPilot,
}

impl Maturity {
    /// Canonical tier string, as it appears in catalogs and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Maturity::BasicInstall => "Basic Install",
            Maturity::SeamlessUpgrades => "Seamless Upgrades",
            Maturity::FullLifecycle => "Full Lifecycle",
            Maturity::DeepInsights => "Deep Insights",
            Maturity::AutoPilot => "Auto Pilot",
        }
    }

    /// Position in the tier ladder (0 = lowest).
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// Get all tiers, lowest first
    pub fn all() -> &'static [Maturity] {
        &[
            Maturity::BasicInstall,
            Maturity::SeamlessUpgrades,
            Maturity::FullLifecycle,
            Maturity::DeepInsights,
            Maturity::AutoPilot,
        ]
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry.
///
/// Items arrive from the catalog source already normalised into this
/// shape and are only ever borrowed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub name: String,

    /// Human readable name used for sorting and display
    #[serde(default)]
    pub display_name: String,

    /// Publishing organisation, as written by the publisher
    #[serde(default)]
    pub provider: Option<String>,

    /// Capability tier; unknown or missing values become the lowest tier
    #[serde(default, deserialize_with = "deserialize_maturity")]
    pub maturity: Maturity,

    /// Free text categories, searched by keyword
    #[serde(default)]
    pub categories: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// Create an item with only the identifying fields set.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            provider: None,
            maturity: Maturity::default(),
            categories: None,
            description: None,
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_maturity(mut self, maturity: Maturity) -> Self {
        self.maturity = maturity;
        self
    }

    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = Some(categories.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Raw value of this item for a filter dimension.
    ///
    /// Missing attributes read as the empty string.
    pub fn dimension_value(&self, dimension: FilterDimension) -> &str {
        match dimension {
            FilterDimension::Provider => self.provider.as_deref().unwrap_or(""),
            FilterDimension::Maturity => self.maturity.as_str(),
        }
    }
}

/// Parse a catalog document: a JSON array of item records.
pub fn parse_items(json: &str) -> errors::Result<Vec<Item>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a catalog file.
///
/// Failures carry the path in their message.
pub fn load_items(path: &Path) -> errors::Result<Vec<Item>> {
    let contents = fs::read_to_string(path)
        .map_err(errors::Error::from)
        .context(format!("Failed to read catalog {}", path.display()))?;
    let items = parse_items(&contents)
        .context(format!("Failed to parse catalog {}", path.display()))?;
    tracing::debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

fn deserialize_maturity<'de, D>(deserializer: D) -> Result<Maturity, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(crate::normalize::normalize_maturity(raw.as_deref()))
}
