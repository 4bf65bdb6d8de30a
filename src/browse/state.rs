use serde::{Deserialize, Serialize};

use crate::map_view::MapSelection;
use crate::models::{AppMode, SortOption, TravelMode, ViewMode};
use crate::ranking::{Category, FilterQuery};

/// The independent UI values the list view is derived from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseState {
    pub app_mode: AppMode,
    pub travel_mode: TravelMode,
    pub view_mode: ViewMode,
    pub search: String,
    pub category: Category,
    pub sort: SortOption,
    pub only_open: bool,
    #[serde(skip)]
    pub map: MapSelection,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between toilet and baby-care browsing. The category grids differ
    /// per mode, so the selection resets to `All`. Returns whether the mode
    /// actually changed.
    pub fn set_app_mode(&mut self, mode: AppMode) -> bool {
        let changed = self.app_mode != mode;
        self.app_mode = mode;
        self.category = Category::All;
        if changed {
            self.map.clear();
        }
        changed
    }

    pub fn toggle_only_open(&mut self) -> bool {
        self.only_open = !self.only_open;
        self.only_open
    }

    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            search: self.search.clone(),
            category: self.category,
            travel_mode: self.travel_mode,
            sort: self.sort,
            only_open: self.only_open,
        }
    }
}
