mod cuisine;
pub mod ingredients;
mod recipe;

pub use cuisine::*;
pub use ingredients::normalize_ingredients;
pub use recipe::*;
