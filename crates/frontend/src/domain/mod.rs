pub mod a001_dish;
pub mod a002_allergen;
