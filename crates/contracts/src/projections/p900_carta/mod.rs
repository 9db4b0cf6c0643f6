//! Carta projection: derived, never stored.
//!
//! - grouping.rs: dishes → categories in first-seen order
//! - filter.rs: category filter state and selection
//! - dto.rs: payload served to the frontend

pub mod dto;
pub mod filter;
pub mod grouping;

pub use dto::MenuResponse;
pub use filter::{FilterOption, FilterState};
pub use grouping::{Category, CategoryMap, DEFAULT_CATEGORY};
