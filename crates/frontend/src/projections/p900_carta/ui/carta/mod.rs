//! Carta UI Module
//!
//! - view_model.rs: filter state and derived categories
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CartaRestaurante;
pub use view_model::CartaViewModel;
