//! Catalog page engine: state transitions, view preparation and URL sync.
//!
//! A typical caller holds one [`CatalogState`], feeds user input and
//! catalog refreshes through [`UrlSync::dispatch`] (or [`reduce`] when no
//! URL is involved) and renders the [`PreparedView`] returned by
//! [`prepare_view`].

pub mod reducer;
pub mod url_sync;
pub mod view;
pub mod view_pipeline;

pub use reducer::{reduce, CatalogAction, CatalogState};
pub use url_sync::UrlSync;
pub use view::{
    ActiveFilterView, CatalogLoad, LoadStatus, OptionGroupView, OptionView, PreparedView,
    ViewSummary,
};
pub use view_pipeline::{active_filters, build_groups, prepare_view};
