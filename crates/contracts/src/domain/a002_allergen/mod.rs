pub mod aggregate;
pub mod parser;

pub use aggregate::AllergenTag;
pub use parser::parse_allergens;
