pub mod carta;
pub mod category_section;
pub mod filter_nav;
pub mod page;
