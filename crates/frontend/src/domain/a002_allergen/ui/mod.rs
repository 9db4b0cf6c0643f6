pub mod badge;
pub mod legend;

pub use badge::AllergenBadge;
pub use legend::AllergenLegend;
