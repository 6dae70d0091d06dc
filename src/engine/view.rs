//! Presentation-ready output of the view pipeline.

use crate::core::{FilterDimension, Item};
use crate::sort::SortType;
use crate::url_state::ViewType;
use serde::Serialize;

/// Settled or unsettled result of the external catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogLoad {
    /// Fetch still in flight
    #[default]
    Pending,
    /// Fetch failed with a message for display
    Failed(String),
    /// Fetch finished
    Loaded(Vec<Item>),
}

impl CatalogLoad {
    /// Loaded items; empty while pending or after a failure.
    pub fn items(&self) -> &[Item] {
        match self {
            CatalogLoad::Loaded(items) => items,
            CatalogLoad::Pending | CatalogLoad::Failed(_) => &[],
        }
    }

    pub fn status(&self) -> LoadStatus {
        match self {
            CatalogLoad::Pending => LoadStatus::Pending,
            CatalogLoad::Failed(message) => LoadStatus::Failed {
                message: message.clone(),
            },
            CatalogLoad::Loaded(_) => LoadStatus::Loaded,
        }
    }
}

/// Load status carried into the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadStatus {
    Pending,
    Failed { message: String },
    Loaded,
}

/// One selectable option, ready for a filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// The options of one dimension in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroupView {
    pub dimension: FilterDimension,
    pub label: String,
    pub options: Vec<OptionView>,
}

/// An active option, for "active filter" chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilterView {
    pub dimension: FilterDimension,
    pub value: String,
    pub label: String,
}

/// Aggregate numbers for headers and empty states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewSummary {
    pub total_items: usize,
    pub visible_items: usize,
    pub active_filter_count: usize,
}

/// Fully computed page state. Never partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedView {
    pub status: LoadStatus,
    pub items: Vec<Item>,
    pub groups: Vec<OptionGroupView>,
    pub active_filters: Vec<ActiveFilterView>,
    pub summary: ViewSummary,
    pub keyword: String,
    pub view: ViewType,
    pub sort: SortType,
}

impl PreparedView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn group(&self, dimension: FilterDimension) -> Option<&OptionGroupView> {
        self.groups
            .iter()
            .find(|group| group.dimension == dimension)
    }
}
