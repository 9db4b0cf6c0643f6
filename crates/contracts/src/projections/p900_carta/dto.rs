use serde::{Deserialize, Serialize};

use super::grouping::CategoryMap;
use crate::domain::a001_dish::aggregate::DishRecord;

/// Заголовок карты, если в настройках ничего не задано
pub const DEFAULT_RESTAURANT_NAME: &str = "Nuestra Carta";

/// Response of `GET /api/menu`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuResponse {
    #[serde(rename = "restaurantName", default = "default_restaurant_name")]
    pub restaurant_name: String,

    #[serde(rename = "logoUrl", default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub dishes: Vec<DishRecord>,
}

fn default_restaurant_name() -> String {
    DEFAULT_RESTAURANT_NAME.to_string()
}

impl Default for MenuResponse {
    fn default() -> Self {
        Self {
            restaurant_name: default_restaurant_name(),
            logo_url: None,
            dishes: Vec::new(),
        }
    }
}

impl MenuResponse {
    pub fn categories(&self) -> CategoryMap {
        CategoryMap::group(self.dishes.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_allergen::AllergenTag;
    use crate::projections::p900_carta::grouping::DEFAULT_CATEGORY;

    #[test]
    fn test_tarta_and_sopa_end_to_end() {
        let json = r#"{
            "restaurantName": "Casa Pepe",
            "dishes": [
                {"name": "Tarta", "price": "4€", "category": "Postres", "allergensRaw": "gluten/lacteos"},
                {"name": "Sopa", "price": "5€", "allergensRaw": ""}
            ]
        }"#;
        let menu: MenuResponse = serde_json::from_str(json).unwrap();
        assert_eq!(menu.restaurant_name, "Casa Pepe");
        assert_eq!(menu.logo_url, None);

        let categories = menu.categories();
        let labels: Vec<&str> = categories.labels().collect();
        assert_eq!(labels, vec!["Postres", DEFAULT_CATEGORY]);

        let postres = categories.get("Postres").unwrap();
        assert_eq!(postres.dishes.len(), 1);
        assert_eq!(
            postres.dishes[0].allergens(),
            vec![AllergenTag::Gluten, AllergenTag::Lacteos]
        );

        let platos = categories.get(DEFAULT_CATEGORY).unwrap();
        assert_eq!(platos.dishes.len(), 1);
        assert_eq!(platos.dishes[0].name, "Sopa");
        assert!(platos.dishes[0].allergens().is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let menu: MenuResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(menu, MenuResponse::default());
        assert_eq!(menu.restaurant_name, DEFAULT_RESTAURANT_NAME);
    }
}
