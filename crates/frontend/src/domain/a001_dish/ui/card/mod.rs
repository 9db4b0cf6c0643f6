//! Dish card
//!
//! - view_model.rs: extracted allergens and the image fallback state
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::DishCard;
pub use view_model::{DishCardViewModel, ImageFailures, ImageSlot, PLACEHOLDER_GLYPH};
