//! Menu module.
//!
//! Dishes, categories and the category filter used on the menu page.

mod filter;
mod item;

pub use filter::{categories, filter_menu, CategoryFilter, MenuEntry, MenuView};
pub use item::{house_menu, DishCategory, MenuItem};
