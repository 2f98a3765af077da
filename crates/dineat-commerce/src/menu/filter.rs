//! Category filtering for the menu page.

use std::fmt;
use std::str::FromStr;

use crate::error::MenuError;
use crate::ids::ItemId;
use crate::menu::{DishCategory, MenuItem};
use serde::Serialize;

/// Which category button is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DishCategory),
}

impl CategoryFilter {
    /// Check whether an item is shown under this filter.
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = MenuError;

    /// `"all"` or a category code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.code()),
        }
    }
}

/// Visibility of one menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub item_id: ItemId,
    pub visible: bool,
}

/// Result of applying a filter to the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    /// Filter whose button is highlighted.
    pub active: CategoryFilter,
    /// Every menu item, in menu order.
    pub entries: Vec<MenuEntry>,
}

impl MenuView {
    /// Ids of the entries left visible.
    pub fn visible_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.entries
            .iter()
            .filter(|e| e.visible)
            .map(|e| &e.item_id)
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }
}

/// Show items in the selected category and hide the rest.
pub fn filter_menu(items: &[MenuItem], filter: CategoryFilter) -> MenuView {
    let entries = items
        .iter()
        .map(|item| MenuEntry {
            item_id: item.id.clone(),
            visible: filter.matches(item),
        })
        .collect();

    MenuView {
        active: filter,
        entries,
    }
}

/// Categories present on the menu, in first-seen order.
pub fn categories(items: &[MenuItem]) -> Vec<DishCategory> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::house_menu;

    #[test]
    fn test_all_shows_everything() {
        let menu = house_menu();
        let view = filter_menu(&menu, CategoryFilter::All);
        assert_eq!(view.visible_count(), menu.len());
        assert_eq!(view.active, CategoryFilter::All);
    }

    #[test]
    fn test_single_category() {
        let menu = house_menu();
        let view = filter_menu(&menu, CategoryFilter::Only(DishCategory::Beverage));

        let visible: Vec<&str> = view.visible_ids().map(ItemId::as_str).collect();
        assert_eq!(visible, vec!["fresh-lime-soda", "mango-lassi", "masala-tea"]);
        // Hidden items are still listed
        assert_eq!(view.entries.len(), menu.len());
    }

    #[test]
    fn test_empty_category() {
        let view = filter_menu(&house_menu(), CategoryFilter::Only(DishCategory::Special));
        assert_eq!(view.visible_count(), 0);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("ALL".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "dessert".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(DishCategory::Dessert))
        );
        assert!("noodles".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::Only(DishCategory::MainCourse).to_string(), "MAIN_COURSE");
    }

    #[test]
    fn test_categories_in_menu_order() {
        assert_eq!(
            categories(&house_menu()),
            vec![
                DishCategory::Appetizer,
                DishCategory::MainCourse,
                DishCategory::Dessert,
                DishCategory::Beverage
            ]
        );
    }
}
