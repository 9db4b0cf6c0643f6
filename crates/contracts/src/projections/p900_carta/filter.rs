use super::grouping::CategoryMap;

/// Подпись пункта «все категории» в панели фильтров
pub const ALL_LABEL: &str = "Todos";

/// Текущий фильтр карты: все категории или ровно одна.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    All,
    Category(String),
}

/// One pill of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub state: FilterState,
}

impl FilterState {
    pub fn category(label: impl Into<String>) -> Self {
        FilterState::Category(label.into())
    }

    /// Categories to display under this filter.
    ///
    /// A category that is not in `map` yields an empty result, never a
    /// fallback to all categories.
    pub fn select(&self, map: &CategoryMap) -> CategoryMap {
        match self {
            FilterState::All => map.clone(),
            FilterState::Category(label) => CategoryMap::only(map.get(label)),
        }
    }

    pub fn is_selected(&self, option: &FilterOption) -> bool {
        *self == option.state
    }

    /// "Todos" first, then one option per category in display order.
    pub fn options(map: &CategoryMap) -> Vec<FilterOption> {
        std::iter::once(FilterOption {
            label: ALL_LABEL.to_string(),
            state: FilterState::All,
        })
        .chain(map.labels().map(|label| FilterOption {
            label: label.to_string(),
            state: FilterState::category(label),
        }))
        .collect()
    }
}
