pub mod csv_import;
pub mod error;
pub mod service;

pub use error::MenuError;
