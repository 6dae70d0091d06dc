//! Pure transformation pipeline for view preparation.
//!
//! ```text
//! CatalogLoad + CatalogState
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  prepare_view()  │ ← FilterConfig (param, not global)
//! └──────────────────┘
//!        │
//!        ├─→ filter_items()     ← keyword ∩ active groups
//!        ├─→ sort_items()       ← display name, A-Z or Z-A
//!        ├─→ compute_counts()   ← per-option counts (count policy)
//!        ├─→ build_groups()     ← ordered option lists
//!        ├─→ active_filters()   ← chips
//!        └─→ summary
//!        │
//!        ▼
//! PreparedView
//! ```
//!
//! No stage reads the environment, touches the URL or logs.

use super::reducer::CatalogState;
use super::view::{
    ActiveFilterView, CatalogLoad, OptionGroupView, OptionView, PreparedView, ViewSummary,
};
use crate::catalog::FilterCatalog;
use crate::config::FilterConfig;
use crate::search::{compute_counts, filter_items, FilterCounts};
use crate::sort::{sort_group_options, sort_items};

/// Prepares everything the presentation layer shows for the current state.
///
/// Pending and failed loads produce a view with no items and zero counts;
/// the status tells the caller which empty state to render.
pub fn prepare_view(
    load: &CatalogLoad,
    state: &CatalogState,
    config: &FilterConfig,
) -> PreparedView {
    let items = load.items();

    // Stage 1: Filter
    let visible = filter_items(items, &state.keyword, &state.catalog);

    // Stage 2: Sort
    let sorted = sort_items(visible, state.sort_type());

    // Stage 3: Count
    let counts = compute_counts(items, &state.keyword, &state.catalog, config.count_policy());

    // Stage 4: Option lists and chips
    let groups = build_groups(&state.catalog, &counts);
    let active_filters = active_filters(&state.catalog);

    let summary = ViewSummary {
        total_items: items.len(),
        visible_items: sorted.len(),
        active_filter_count: active_filters.len(),
    };

    PreparedView {
        status: load.status(),
        items: sorted.into_iter().cloned().collect(),
        groups,
        active_filters,
        summary,
        keyword: state.keyword.clone(),
        view: state.view_type(),
        sort: state.sort_type(),
    }
}

/// Option lists per dimension, in presentation order, with counts.
pub fn build_groups(catalog: &FilterCatalog, counts: &FilterCounts) -> Vec<OptionGroupView> {
    catalog
        .groups()
        .map(|group| OptionGroupView {
            dimension: group.dimension,
            label: group.label.clone(),
            options: sort_group_options(group)
                .into_iter()
                .map(|option| OptionView {
                    value: option.value.clone(),
                    label: option.label.clone(),
                    count: counts.get(group.dimension, &option.value),
                    active: option.active,
                })
                .collect(),
        })
        .collect()
}

/// Active options across all dimensions, in presentation order.
pub fn active_filters(catalog: &FilterCatalog) -> Vec<ActiveFilterView> {
    catalog
        .groups()
        .flat_map(|group| {
            sort_group_options(group)
                .into_iter()
                .filter(|option| option.active)
                .map(move |option| ActiveFilterView {
                    dimension: group.dimension,
                    value: option.value.clone(),
                    label: option.label.clone(),
                })
        })
        .collect()
}
