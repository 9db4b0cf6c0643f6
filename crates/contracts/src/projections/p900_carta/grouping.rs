use crate::domain::a001_dish::aggregate::DishRecord;

/// Категория для блюд без указанной категории
pub const DEFAULT_CATEGORY: &str = "Platos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub dishes: Vec<DishRecord>,
}

/// Ordered mapping label → dishes.
///
/// Categories keep the order of their first appearance in the input, dishes
/// keep their input order inside a category. Labels are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryMap {
    categories: Vec<Category>,
}

impl CategoryMap {
    /// Groups dishes in one left-to-right pass.
    pub fn group<I>(dishes: I) -> Self
    where
        I: IntoIterator<Item = DishRecord>,
    {
        dishes.into_iter().fold(Self::default(), |mut map, dish| {
            map.push(dish);
            map
        })
    }

    fn push(&mut self, dish: DishRecord) {
        let label = dish.category().unwrap_or(DEFAULT_CATEGORY);
        match self.categories.iter_mut().find(|c| c.label == label) {
            Some(category) => category.dishes.push(dish),
            None => self.categories.push(Category {
                label: label.to_string(),
                dishes: vec![dish],
            }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.label.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn dish_count(&self) -> usize {
        self.categories.iter().map(|c| c.dishes.len()).sum()
    }

    /// The filter bar is only worth showing with more than one category.
    pub fn has_filter_choice(&self) -> bool {
        self.categories.len() > 1
    }

    pub(crate) fn only(category: Option<&Category>) -> Self {
        Self {
            categories: category.into_iter().cloned().collect(),
        }
    }
}

impl FromIterator<DishRecord> for CategoryMap {
    fn from_iter<T: IntoIterator<Item = DishRecord>>(iter: T) -> Self {
        Self::group(iter)
    }
}

impl<'a> IntoIterator for &'a CategoryMap {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DishRecord> {
        vec![
            DishRecord::new("Croquetas", "8€").with_category("Entrantes"),
            DishRecord::new("Sopa", "5€"),
            DishRecord::new("Tarta", "4€").with_category("Postres"),
            DishRecord::new("Ensalada", "7€").with_category("Entrantes"),
            DishRecord::new("Guiso", "12€").with_category(""),
            DishRecord::new("Flan", "3€").with_category("Postres"),
        ]
    }

    #[test]
    fn test_first_seen_category_order() {
        let map = CategoryMap::group(sample());
        let labels: Vec<&str> = map.labels().collect();
        assert_eq!(labels, vec!["Entrantes", DEFAULT_CATEGORY, "Postres"]);
    }

    #[test]
    fn test_default_category_keeps_input_order() {
        let map = CategoryMap::group(sample());
        let names: Vec<&str> = map
            .get(DEFAULT_CATEGORY)
            .unwrap()
            .dishes
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sopa", "Guiso"]);
    }

    #[test]
    fn test_flatten_keeps_every_dish_once() {
        let dishes = sample();
        let map: CategoryMap = dishes.clone().into_iter().collect();

        assert_eq!(map.dish_count(), dishes.len());

        let flattened: Vec<(&str, &DishRecord)> = map
            .iter()
            .flat_map(|c| c.dishes.iter().map(move |d| (c.label.as_str(), d)))
            .collect();
        for dish in &dishes {
            let hits: Vec<&str> = flattened
                .iter()
                .filter(|(_, d)| *d == dish)
                .map(|(label, _)| *label)
                .collect();
            assert_eq!(hits, vec![dish.category().unwrap_or(DEFAULT_CATEGORY)]);
        }
    }

    #[test]
    fn test_empty_input() {
        let map = CategoryMap::group(Vec::new());
        assert!(map.is_empty());
        assert_eq!(map.dish_count(), 0);
        assert!(!map.has_filter_choice());
    }

    #[test]
    fn test_filter_choice_needs_two_categories() {
        let single = CategoryMap::group(vec![
            DishRecord::new("Sopa", "5€"),
            DishRecord::new("Guiso", "12€"),
        ]);
        assert!(!single.has_filter_choice());
        assert!(CategoryMap::group(sample()).has_filter_choice());
    }
}
