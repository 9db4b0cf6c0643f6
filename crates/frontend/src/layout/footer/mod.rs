pub mod footer;

pub use footer::CartaFooter;
