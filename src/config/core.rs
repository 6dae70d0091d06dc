use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::FilterDimension;
use crate::normalize::PROVIDER_SUFFIXES;
use crate::search::CountPolicy;

/// Root configuration structure for catalog-filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    /// Filter dimension configuration
    #[serde(default)]
    pub filters: FiltersConfig,

    /// Text normalisation configuration
    #[serde(default)]
    pub normalization: NormalizationConfig,
}

/// Which dimensions are offered and how they are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Configured dimensions, in presentation order
    #[serde(default = "default_dimensions")]
    pub dimensions: Vec<FilterDimension>,

    /// How per-option counts are computed
    #[serde(default)]
    pub count_policy: CountPolicy,

    /// Label overrides keyed by raw dimension name
    #[serde(default = "default_labels")]
    pub labels: BTreeMap<String, String>,
}

/// Normalisation of raw filter values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Corporate suffixes stripped from provider names, in priority order
    #[serde(default = "default_provider_suffixes")]
    pub provider_suffixes: Vec<String>,

    /// Label shown for items lacking a dimension value
    #[serde(default = "default_missing_label")]
    pub missing_label: String,
}

fn default_dimensions() -> Vec<FilterDimension> {
    FilterDimension::all().to_vec()
}

fn default_labels() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("provider".to_string(), "Provider".to_string()),
        ("maturity".to_string(), "Capability Level".to_string()),
    ])
}

fn default_provider_suffixes() -> Vec<String> {
    PROVIDER_SUFFIXES.iter().map(|s| s.to_string()).collect()
}

fn default_missing_label() -> String {
    "N/A".to_string()
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            dimensions: default_dimensions(),
            count_policy: CountPolicy::default(),
            labels: default_labels(),
        }
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            provider_suffixes: default_provider_suffixes(),
            missing_label: default_missing_label(),
        }
    }
}

impl FilterConfig {
    /// Configured dimensions, in presentation order.
    pub fn dimensions(&self) -> &[FilterDimension] {
        &self.filters.dimensions
    }

    /// Display label for a dimension, falling back to its raw name.
    pub fn label_for(&self, dimension: FilterDimension) -> &str {
        self.filters
            .labels
            .get(dimension.as_str())
            .map(String::as_str)
            .unwrap_or(dimension.as_str())
    }

    pub fn count_policy(&self) -> CountPolicy {
        self.filters.count_policy
    }

    pub fn provider_suffixes(&self) -> &[String] {
        &self.normalization.provider_suffixes
    }

    pub fn missing_label(&self) -> &str {
        &self.normalization.missing_label
    }

    /// Override count policy (for CLI args).
    pub fn with_count_policy(mut self, count_policy: Option<CountPolicy>) -> Self {
        if let Some(policy) = count_policy {
            self.filters.count_policy = policy;
        }
        self
    }

    /// Apply environment variable overrides.
    ///
    /// # Environment Variables
    ///
    /// - `CATALOG_FILTER_COUNT_POLICY`: `potential` or `current`
    pub fn with_environment_overrides(self) -> Self {
        let policy = std::env::var("CATALOG_FILTER_COUNT_POLICY")
            .ok()
            .and_then(|value| match value.parse::<CountPolicy>() {
                Ok(policy) => Some(policy),
                Err(e) => {
                    tracing::warn!("Ignoring CATALOG_FILTER_COUNT_POLICY: {}", e);
                    None
                }
            });
        self.with_count_policy(policy)
    }
}
