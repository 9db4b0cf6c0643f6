use serde::{Deserialize, Serialize};

use crate::domain::a002_allergen::{parse_allergens, AllergenTag};

// ============================================================================
// Aggregate
// ============================================================================

/// Блюдо карты: одна строка таблицы-источника.
///
/// Поля приходят как есть; `price` уже отформатирована и никогда не
/// разбирается как число. Пустая строка в необязательном поле равнозначна
/// отсутствию поля.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DishRecord {
    #[serde(alias = "nombre")]
    pub name: String,

    #[serde(alias = "precio")]
    pub price: String,

    #[serde(default, alias = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, alias = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(
        rename = "photoUrl",
        default,
        alias = "foto",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,

    #[serde(
        rename = "allergensRaw",
        default,
        alias = "alergenos",
        skip_serializing_if = "Option::is_none"
    )]
    pub allergens_raw: Option<String>,
}

impl DishRecord {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    pub fn with_allergens(mut self, raw: impl Into<String>) -> Self {
        self.allergens_raw = Some(raw.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Категория блюда; `None` означает категорию по умолчанию.
    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn photo_url(&self) -> Option<&str> {
        non_empty(&self.photo_url)
    }

    pub fn allergens_raw(&self) -> Option<&str> {
        non_empty(&self.allergens_raw)
    }

    /// Распознанные аллергены в порядке их появления в тексте.
    pub fn allergens(&self) -> Vec<AllergenTag> {
        parse_allergens(self.allergens_raw())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
