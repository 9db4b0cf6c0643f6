use crate::domain::a001_dish::ui::card::ImageFailures;
use contracts::domain::a001_dish::aggregate::DishRecord;
use contracts::projections::p900_carta::{Category, CategoryMap, FilterOption, FilterState};
use leptos::prelude::*;

/// ViewModel for the carta: owns the category filter and the photos that failed to load.
#[derive(Clone, Copy)]
pub struct CartaViewModel {
    pub categories: StoredValue<CategoryMap>,
    pub filter: RwSignal<FilterState>,
    pub image_failures: ImageFailures,
}

impl CartaViewModel {
    pub fn new(menu_data: Vec<DishRecord>) -> Self {
        Self {
            categories: StoredValue::new(CategoryMap::group(menu_data)),
            filter: RwSignal::new(FilterState::All),
            image_failures: ImageFailures::new(),
        }
    }

    /// One pill click, last write wins.
    pub fn select(&self, state: FilterState) {
        log::debug!("carta filter: {:?}", state);
        self.filter.set(state);
    }

    pub fn displayed(&self) -> CategoryMap {
        let filter = self.filter.get();
        self.categories.with_value(|map| filter.select(map))
    }

    pub fn sections(&self) -> Vec<Category> {
        self.displayed().iter().cloned().collect()
    }

    pub fn show_filter_bar(&self) -> bool {
        self.categories.with_value(CategoryMap::has_filter_choice)
    }

    pub fn filter_options(&self) -> Vec<FilterOption> {
        self.categories.with_value(FilterState::options)
    }
}
