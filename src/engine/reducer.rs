//! Explicit state transitions for the catalog page.
//!
//! The caller owns a [`CatalogState`] and replaces it with the result of
//! [`reduce`] after every user action or catalog refresh.

use crate::active::{
    catalog_from_selection, clear_all, merge_activity, set_active, toggle_active,
};
use crate::catalog::{build_catalog, FilterCatalog};
use crate::config::FilterConfig;
use crate::core::{FilterDimension, Item};
use crate::sort::SortType;
use crate::url_state::{DecodedState, ViewType};
use serde::Serialize;

/// Everything the user has selected, plus the catalog it applies to.
///
/// `view` and `sort` stay `None` until chosen so that untouched defaults
/// are left out of the URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CatalogState {
    pub keyword: String,
    pub catalog: FilterCatalog,
    pub view: Option<ViewType>,
    pub sort: Option<SortType>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State recovered from a URL, before any catalog has loaded.
    ///
    /// Decoded filters are held in a placeholder catalog until the first
    /// [`CatalogAction::CatalogRefreshed`] merges them into the real one.
    pub fn from_decoded(decoded: &DecodedState, config: &FilterConfig) -> Self {
        Self {
            keyword: decoded.keyword.clone(),
            catalog: catalog_from_selection(&decoded.filters, config),
            view: decoded.view,
            sort: decoded.sort,
        }
    }

    /// Effective view type.
    pub fn view_type(&self) -> ViewType {
        self.view.unwrap_or_default()
    }

    /// Effective sort type.
    pub fn sort_type(&self) -> SortType {
        self.sort.unwrap_or_default()
    }
}

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    SetKeyword(String),
    ClearKeyword,
    SetFilter {
        dimension: FilterDimension,
        value: String,
        active: bool,
    },
    ToggleFilter {
        dimension: FilterDimension,
        value: String,
    },
    ClearFilters,
    SetView(ViewType),
    SetSort(SortType),
    /// A new item list arrived from the catalog source
    CatalogRefreshed(Vec<Item>),
}

impl CatalogAction {
    /// Whether the resulting state should be written back to the URL.
    ///
    /// Catalog refreshes are not user selections and never trigger a
    /// write on their own.
    pub fn affects_url(&self) -> bool {
        !matches!(self, CatalogAction::CatalogRefreshed(_))
    }
}

/// Applies one action to the state, returning the next state.
///
/// Never fails: filter actions naming unknown options leave the catalog
/// unchanged.
pub fn reduce(state: &CatalogState, action: &CatalogAction, config: &FilterConfig) -> CatalogState {
    match action {
        CatalogAction::SetKeyword(keyword) => CatalogState {
            keyword: keyword.clone(),
            ..state.clone()
        },
        CatalogAction::ClearKeyword => CatalogState {
            keyword: String::new(),
            ..state.clone()
        },
        CatalogAction::SetFilter {
            dimension,
            value,
            active,
        } => with_catalog(
            state,
            set_active(&state.catalog, *dimension, value, *active),
        ),
        CatalogAction::ToggleFilter { dimension, value } => {
            with_catalog(state, toggle_active(&state.catalog, *dimension, value))
        }
        CatalogAction::ClearFilters => with_catalog(state, clear_all(&state.catalog)),
        CatalogAction::SetView(view) => CatalogState {
            view: Some(*view),
            ..state.clone()
        },
        CatalogAction::SetSort(sort) => CatalogState {
            sort: Some(*sort),
            ..state.clone()
        },
        CatalogAction::CatalogRefreshed(items) => {
            let fresh = build_catalog(items, config);
            with_catalog(state, merge_activity(&fresh, &state.catalog))
        }
    }
}

fn with_catalog(state: &CatalogState, catalog: FilterCatalog) -> CatalogState {
    CatalogState {
        catalog,
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::active::ActiveSelection;

    fn items() -> Vec<Item> {
        vec![
            Item::new("a", "Alpha").with_provider("Red Hat"),
            Item::new("b", "Beta").with_provider("Acme Inc"),
        ]
    }

    fn loaded() -> CatalogState {
        reduce(
            &CatalogState::new(),
            &CatalogAction::CatalogRefreshed(items()),
            &FilterConfig::default(),
        )
    }

    fn apply(state: &CatalogState, action: CatalogAction) -> CatalogState {
        reduce(state, &action, &FilterConfig::default())
    }

    #[test]
    fn test_keyword_actions() {
        let state = apply(&loaded(), CatalogAction::SetKeyword("db".into()));
        assert_eq!(state.keyword, "db");
        let state = apply(&state, CatalogAction::ClearKeyword);
        assert_eq!(state.keyword, "");
    }

    #[test]
    fn test_filter_actions() {
        let state = apply(
            &loaded(),
            CatalogAction::SetFilter {
                dimension: FilterDimension::Provider,
                value: "Red Hat".into(),
                active: true,
            },
        );
        assert!(state
            .catalog
            .is_active(FilterDimension::Provider, "Red Hat"));

        let state = apply(
            &state,
            CatalogAction::ToggleFilter {
                dimension: FilterDimension::Provider,
                value: "Acme".into(),
            },
        );
        assert!(state.catalog.is_active(FilterDimension::Provider, "Acme"));

        let state = apply(&state, CatalogAction::ClearFilters);
        assert!(!state.catalog.has_active_filters());
    }

    #[test]
    fn test_clear_filters_keeps_keyword() {
        let state = apply(&loaded(), CatalogAction::SetKeyword("alp".into()));
        let state = apply(&state, CatalogAction::ClearFilters);
        assert_eq!(state.keyword, "alp");
    }

    #[test]
    fn test_view_and_sort_actions() {
        let state = loaded();
        assert_eq!(state.view_type(), ViewType::Card);
        assert_eq!(state.sort_type(), SortType::Ascending);

        let state = apply(&state, CatalogAction::SetView(ViewType::List));
        let state = apply(&state, CatalogAction::SetSort(SortType::Descending));
        assert_eq!(state.view, Some(ViewType::List));
        assert_eq!(state.sort, Some(SortType::Descending));
    }

    #[test]
    fn test_refresh_preserves_selection_made_while_loading() {
        let decoded = DecodedState {
            keyword: "a".into(),
            filters: ActiveSelection::new().with(FilterDimension::Provider, &["Acme"]),
            view: Some(ViewType::List),
            sort: None,
        };
        let state = CatalogState::from_decoded(&decoded, &FilterConfig::default());
        let state = apply(&state, CatalogAction::SetKeyword("b".into()));
        let state = apply(&state, CatalogAction::CatalogRefreshed(items()));

        assert_eq!(state.keyword, "b");
        assert_eq!(state.view, Some(ViewType::List));
        assert!(state.catalog.is_active(FilterDimension::Provider, "Acme"));
        let acme = state.catalog.option(FilterDimension::Provider, "Acme");
        assert!(acme.is_some_and(|option| option.matches("Acme Inc")));
    }

    #[test]
    fn test_refresh_drops_stale_filters() {
        let state = apply(
            &loaded(),
            CatalogAction::SetFilter {
                dimension: FilterDimension::Provider,
                value: "Acme".into(),
                active: true,
            },
        );
        let refreshed = vec![Item::new("a", "Alpha").with_provider("Red Hat")];
        let state = apply(&state, CatalogAction::CatalogRefreshed(refreshed));
        assert!(!state.catalog.has_active_filters());
        assert!(state
            .catalog
            .option(FilterDimension::Provider, "Acme")
            .is_none());
    }

    #[test]
    fn test_affects_url() {
        assert!(CatalogAction::ClearKeyword.affects_url());
        assert!(CatalogAction::SetSort(SortType::Descending).affects_url());
        assert!(!CatalogAction::CatalogRefreshed(vec![]).affects_url());
    }
}
