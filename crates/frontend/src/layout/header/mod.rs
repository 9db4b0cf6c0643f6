pub mod header;

pub use header::CartaHeader;
