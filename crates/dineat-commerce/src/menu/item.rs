//! Menu items and dish categories.

use crate::error::MenuError;
use crate::ids::ItemId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Dish category shown as a filter button on the menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DishCategory {
    Appetizer,
    #[default]
    MainCourse,
    Dessert,
    Beverage,
    Special,
}

impl DishCategory {
    /// All categories in menu order.
    pub const ALL: [DishCategory; 5] = [
        DishCategory::Appetizer,
        DishCategory::MainCourse,
        DishCategory::Dessert,
        DishCategory::Beverage,
        DishCategory::Special,
    ];

    /// Code stored on menu items (e.g., "MAIN_COURSE").
    pub fn code(&self) -> &'static str {
        match self {
            DishCategory::Appetizer => "APPETIZER",
            DishCategory::MainCourse => "MAIN_COURSE",
            DishCategory::Dessert => "DESSERT",
            DishCategory::Beverage => "BEVERAGE",
            DishCategory::Special => "SPECIAL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DishCategory::Appetizer => "Appetizer",
            DishCategory::MainCourse => "Main Course",
            DishCategory::Dessert => "Dessert",
            DishCategory::Beverage => "Beverage",
            DishCategory::Special => "Special",
        }
    }
}

impl FromStr for DishCategory {
    type Err = MenuError;

    /// Accepts codes in any case, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase().replace('-', "_");
        DishCategory::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| MenuError::UnknownCategory(s.to_string()))
    }
}

/// A dish on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: DishCategory,
    #[serde(default)]
    pub vegetarian: bool,
}

impl MenuItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: f64,
        category: DishCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category,
            vegetarian: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn vegetarian(mut self) -> Self {
        self.vegetarian = true;
        self
    }
}

/// The restaurant's standard menu.
pub fn house_menu() -> Vec<MenuItem> {
    use DishCategory::*;

    vec![
        MenuItem::new("paneer-tikka", "Paneer Tikka", 180.0, Appetizer)
            .with_description("Soft cottage cheese marinated in spices and grilled")
            .vegetarian(),
        MenuItem::new("vegetable-samosa", "Vegetable Samosa", 80.0, Appetizer)
            .with_description("Crispy pastry filled with spiced vegetables")
            .vegetarian(),
        MenuItem::new("chicken-tikka", "Chicken Tikka", 250.0, Appetizer)
            .with_description("Tender chicken pieces marinated in spices and grilled"),
        MenuItem::new("fish-fry", "Fish Fry", 280.0, Appetizer)
            .with_description("Crispy fried fish with spices"),
        MenuItem::new("dal-makhani", "Dal Makhani", 220.0, MainCourse)
            .with_description("Creamy black lentils cooked with butter and spices")
            .vegetarian(),
        MenuItem::new("palak-paneer", "Palak Paneer", 200.0, MainCourse)
            .with_description("Cottage cheese in creamy spinach gravy")
            .vegetarian(),
        MenuItem::new("vegetable-biryani", "Vegetable Biryani", 180.0, MainCourse)
            .with_description("Fragrant rice with mixed vegetables and spices")
            .vegetarian(),
        MenuItem::new("butter-chicken", "Butter Chicken", 320.0, MainCourse)
            .with_description("Tender chicken in creamy tomato gravy"),
        MenuItem::new("chicken-biryani", "Chicken Biryani", 280.0, MainCourse)
            .with_description("Fragrant rice with spiced chicken pieces"),
        MenuItem::new("mutton-rogan-josh", "Mutton Rogan Josh", 380.0, MainCourse)
            .with_description("Tender mutton in aromatic Kashmiri spices"),
        MenuItem::new("gulab-jamun", "Gulab Jamun", 60.0, Dessert)
            .with_description("Soft milk dumplings in sugar syrup")
            .vegetarian(),
        MenuItem::new("fresh-lime-soda", "Fresh Lime Soda", 40.0, Beverage)
            .with_description("Refreshing lime soda with mint")
            .vegetarian(),
        MenuItem::new("mango-lassi", "Mango Lassi", 60.0, Beverage)
            .with_description("Sweet yogurt drink with mango flavor")
            .vegetarian(),
        MenuItem::new("masala-tea", "Masala Tea", 30.0, Beverage)
            .with_description("Spiced Indian tea with milk")
            .vegetarian(),
    ]
}
