//! Cart line items.

use crate::error::CartError;
use crate::ids::ItemId;
use crate::menu::MenuItem;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// Serialized as `{"id","name","price","quantity"}`; unknown fields in
/// stored data are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product identifier, unique within the cart.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Always at least 1 while the item is in the cart.
    pub quantity: u32,
}

impl CartLineItem {
    /// Unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Check the invariants a stored line item must satisfy.
    pub(crate) fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && self.quantity >= 1
            && self.price.is_finite()
            && self.price >= 0.0
    }
}

/// An item to add to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NewCartItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

impl NewCartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Reject items with a blank id or name, or a price that is zero,
    /// negative or not a number.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.id.trim().is_empty() {
            return Err(CartError::InvalidItem("id"));
        }
        if self.name.trim().is_empty() {
            return Err(CartError::InvalidItem("name"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CartError::InvalidItem("price"));
        }
        Ok(())
    }

    pub(crate) fn into_line_item(self) -> CartLineItem {
        CartLineItem {
            id: ItemId::new(self.id),
            name: self.name,
            price: self.price,
            quantity: 1,
        }
    }
}

impl From<&MenuItem> for NewCartItem {
    fn from(item: &MenuItem) -> Self {
        Self::new(item.id.as_str(), item.name.clone(), item.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_item() {
        assert!(NewCartItem::new("tea", "Masala Tea", 30.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_falsy_fields() {
        let cases = [
            (NewCartItem::new("", "Tea", 10.0), "id"),
            (NewCartItem::new("tea", " ", 10.0), "name"),
            (NewCartItem::new("tea", "Tea", 0.0), "price"),
            (NewCartItem::new("tea", "Tea", -4.0), "price"),
            (NewCartItem::new("tea", "Tea", f64::NAN), "price"),
        ];
        for (item, field) in cases {
            match item.validate() {
                Err(CartError::InvalidItem(missing)) => assert_eq!(missing, field),
                other => panic!("expected InvalidItem({field}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_json_fields_default_to_falsy() {
        let item: NewCartItem = serde_json::from_str(r#"{"id":"bun"}"#).unwrap();
        assert!(matches!(item.validate(), Err(CartError::InvalidItem("name"))));
    }

    #[test]
    fn test_line_item_ignores_extra_fields() {
        let item: CartLineItem = serde_json::from_str(
            r#"{"id":"a","name":"Tea","price":10,"quantity":2,"category":"BEVERAGE"}"#,
        )
        .unwrap();
        assert_eq!(item.quantity, 2);
        assert!((item.subtotal() - 20.0).abs() < f64::EPSILON);
        assert!(item.is_well_formed());
    }

    #[test]
    fn test_large_quantity_is_well_formed() {
        let item = CartLineItem {
            id: ItemId::new("a"),
            name: "Tea".into(),
            price: 10.0,
            quantity: 1000,
        };
        assert!(item.is_well_formed());
    }

    #[test]
    fn test_zero_quantity_is_not_well_formed() {
        let item = CartLineItem {
            id: ItemId::new("a"),
            name: "Tea".into(),
            price: 10.0,
            quantity: 0,
        };
        assert!(!item.is_well_formed());
    }
}
