//! Carta page: loads the menu payload and hands it to `CartaRestaurante`.
//!
//! - model.rs: API functions
//! - view_model.rs: loading and error state
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::CartaPage;
pub use view_model::CartaPageViewModel;
