use contracts::domain::a001_dish::aggregate::DishRecord;
use contracts::domain::a002_allergen::AllergenTag;
use leptos::prelude::*;
use std::collections::HashSet;

/// Заглушка вместо фото блюда
pub const PLACEHOLDER_GLYPH: &str = "🍽️";

/// What the image area of a card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Photo(String),
    Placeholder,
}

impl ImageSlot {
    /// Photo while there is a reference that has not failed, placeholder otherwise.
    pub fn resolve(photo_url: Option<&str>, load_failed: bool) -> Self {
        match photo_url {
            Some(url) if !load_failed => ImageSlot::Photo(url.to_string()),
            _ => ImageSlot::Placeholder,
        }
    }
}

/// Photo references that failed to load during this session.
///
/// Owned by the page, not by the card: a card rebuilt after a filter change
/// must not request a broken photo again.
#[derive(Clone, Copy)]
pub struct ImageFailures(RwSignal<HashSet<String>>);

impl ImageFailures {
    pub fn new() -> Self {
        Self(RwSignal::new(HashSet::new()))
    }

    pub fn has_failed(&self, url: &str) -> bool {
        self.0.with(|failed| failed.contains(url))
    }

    /// Only the first failure of a reference notifies subscribers.
    pub fn mark_failed(&self, url: &str) {
        if !self.0.with_untracked(|failed| failed.contains(url)) {
            self.0.update(|failed| {
                failed.insert(url.to_string());
            });
        }
    }
}

impl Default for ImageFailures {
    fn default() -> Self {
        Self::new()
    }
}

/// ViewModel for one dish card
#[derive(Clone)]
pub struct DishCardViewModel {
    pub dish: DishRecord,
    pub allergens: Vec<AllergenTag>,
    failures: ImageFailures,
}

impl DishCardViewModel {
    pub fn new(dish: DishRecord, failures: ImageFailures) -> Self {
        let allergens = dish.allergens();
        Self {
            dish,
            allergens,
            failures,
        }
    }

    pub fn image_slot(&self) -> impl Fn() -> ImageSlot + 'static {
        let photo_url = self.dish.photo_url().map(str::to_string);
        let failures = self.failures;
        move || {
            let failed = photo_url
                .as_deref()
                .is_some_and(|url| failures.has_failed(url));
            ImageSlot::resolve(photo_url.as_deref(), failed)
        }
    }

    /// Handler for the image `error` event. A failed reference is never requested again.
    pub fn image_error_handler(&self) -> impl Fn() + Clone + 'static {
        let photo_url = self.dish.photo_url().map(str::to_string);
        let failures = self.failures;
        move || {
            if let Some(url) = photo_url.as_deref() {
                failures.mark_failed(url);
            }
        }
    }
}
