//! Text normalisation for filter values.
//!
//! Provider names are published with inconsistent corporate suffixes
//! ("Acme, Inc.", "Acme Inc", "Acme LLC"). Filtering groups them under the
//! bare name and keeps the suffixed spellings as synonyms so every raw
//! form still matches. Maturity strings are mapped onto the fixed tier
//! ladder.
//!
//! All functions here are pure. The suffix list is a parameter so callers
//! can supply a configured list instead of [`PROVIDER_SUFFIXES`].

use crate::core::Maturity;

/// Corporate suffixes stripped from provider names, in priority order.
pub const PROVIDER_SUFFIXES: [&str; 6] = [", Inc.", ", Inc", " Inc.", " Inc", ", LLC", " LLC"];

/// Strip the first matching corporate suffix from a provider name.
///
/// Suffixes are tried in list order; the first one the value ends with
/// wins. Values without a known suffix, including the empty string, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use catalog_filter::normalize::{strip_provider_suffix, PROVIDER_SUFFIXES};
///
/// assert_eq!(strip_provider_suffix("Acme, Inc.", &PROVIDER_SUFFIXES), "Acme");
/// assert_eq!(strip_provider_suffix("Acme", &PROVIDER_SUFFIXES), "Acme");
/// ```
pub fn strip_provider_suffix<'a, S: AsRef<str>>(value: &'a str, suffixes: &[S]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| value.strip_suffix(suffix.as_ref()))
        .unwrap_or(value)
}

/// Every suffixed spelling of a normalised provider name.
pub fn synonyms_for<S: AsRef<str>>(base: &str, suffixes: &[S]) -> Vec<String> {
    suffixes
        .iter()
        .map(|suffix| format!("{}{}", base, suffix.as_ref()))
        .collect()
}

/// Map a raw maturity string onto the tier ladder.
///
/// Only exact tier names are recognised; anything else (including a
/// missing value) becomes the lowest tier.
pub fn normalize_maturity(raw: Option<&str>) -> Maturity {
    raw.and_then(|raw| {
        Maturity::all()
            .iter()
            .copied()
            .find(|tier| tier.as_str() == raw)
    })
    .unwrap_or_default()
}
