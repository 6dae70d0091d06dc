// Shared fixtures for catalog-filter integration tests
#![allow(dead_code)]

use catalog_filter::{build_catalog, FilterCatalog, FilterConfig, Item};
use indoc::indoc;

/// A small catalog in the shape the catalog source delivers.
///
/// Covers suffixed provider spellings, a missing provider, an unknown
/// maturity and a missing maturity.
pub const CATALOG_JSON: &str = indoc! {r#"
    [
      {
        "name": "etcd",
        "displayName": "etcd Operator",
        "provider": "Red Hat",
        "maturity": "Auto Pilot",
        "categories": "Database",
        "description": "Distributed key value store"
      },
      {
        "name": "acme-db",
        "displayName": "Acme DB",
        "provider": "Acme, Inc.",
        "maturity": "Full Lifecycle",
        "categories": "Database, Storage"
      },
      {
        "name": "acme-mq",
        "displayName": "acme MQ",
        "provider": "Acme LLC",
        "maturity": "Seamless Upgrades",
        "categories": "Streaming & Messaging"
      },
      {
        "name": "zeta-cache",
        "displayName": "Zeta Cache",
        "provider": "Zeta",
        "maturity": "Bogus",
        "categories": "Database"
      },
      {
        "name": "orphan",
        "displayName": "Orphan Tool"
      }
    ]
"#};

pub fn items() -> Vec<Item> {
    serde_json::from_str(CATALOG_JSON).expect("fixture catalog parses")
}

pub fn base_catalog(items: &[Item]) -> FilterCatalog {
    build_catalog(items, &FilterConfig::default())
}

pub fn names(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}
