//! Cart view-model and rendering hooks.

use std::fmt::Write as _;

use crate::cart::CartLineItem;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use crate::site::escape_html;
use serde::Serialize;

/// Text shown in place of the item list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Everything a page needs to draw the cart badge, list and total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    /// Sum of all quantities.
    pub count: u32,
    /// The badge is hidden when the count is zero.
    pub badge_visible: bool,
    pub lines: Vec<CartLineView>,
    pub total: Money,
    /// e.g. "Total: ₹25.00".
    pub total_label: String,
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// Quantity the "-" control requests. Zero removes the line.
    pub decrement_to: u32,
    /// Quantity the "+" control requests.
    pub increment_to: u32,
    pub subtotal: Money,
}

impl CartView {
    /// Build the view from the cart's items.
    pub fn from_items(items: &[CartLineItem], currency: Currency) -> Self {
        let count = items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity));
        let total_decimal: f64 = items.iter().map(CartLineItem::subtotal).sum();
        let total = Money::from_decimal(total_decimal, currency);

        let lines = items
            .iter()
            .map(|item| CartLineView {
                id: item.id.clone(),
                name: item.name.clone(),
                unit_price: Money::from_decimal(item.price, currency),
                quantity: item.quantity,
                decrement_to: item.quantity.saturating_sub(1),
                increment_to: item.quantity.saturating_add(1),
                subtotal: Money::from_decimal(item.subtotal(), currency),
            })
            .collect();

        Self {
            count,
            badge_visible: count > 0,
            lines,
            total,
            total_label: format!("Total: {}", total.display()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the item list as HTML. All item text is escaped.
    pub fn render_html(&self) -> String {
        if self.is_empty() {
            return format!("<p class=\"empty-cart\">{}</p>", EMPTY_CART_MESSAGE);
        }

        let mut html = String::new();
        for line in &self.lines {
            // Writing to a String cannot fail
            let _ = write!(
                html,
                concat!(
                    "<div class=\"cart-item\" data-item-id=\"{id}\">",
                    "<div class=\"cart-item-info\"><h4>{name}</h4>",
                    "<p class=\"cart-item-price\">{price}</p></div>",
                    "<div class=\"cart-item-controls\">",
                    "<button class=\"btn-quantity\" data-quantity=\"{dec}\">-</button>",
                    "<span class=\"quantity\">{qty}</span>",
                    "<button class=\"btn-quantity\" data-quantity=\"{inc}\">+</button>",
                    "</div></div>"
                ),
                id = escape_html(line.id.as_str()),
                name = escape_html(&line.name),
                price = line.unit_price.display(),
                dec = line.decrement_to,
                qty = line.quantity,
                inc = line.increment_to,
            );
        }
        html
    }
}

/// Display refresh hook supplied by the embedding page.
///
/// Invoked after every cart mutation. Implementations must cope with the
/// page not having a badge, list or total element.
pub trait CartRenderer {
    fn render(&self, view: &CartView);
}

impl<F: Fn(&CartView)> CartRenderer for F {
    fn render(&self, view: &CartView) {
        self(view)
    }
}

/// Renderer for pages without any cart elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl CartRenderer for NoopRenderer {
    fn render(&self, _view: &CartView) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, name: &str, price: f64, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ItemId::new(id),
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::from_items(&[], Currency::INR);
        assert_eq!(view.count, 0);
        assert!(!view.badge_visible);
        assert_eq!(view.total_label, "Total: \u{20b9}0.00");
        assert_eq!(view.render_html(), "<p class=\"empty-cart\">Your cart is empty</p>");
    }

    #[test]
    fn test_view_counts_and_controls() {
        let items = [line("a", "Tea", 10.0, 2), line("b", "Bun", 5.0, 1)];
        let view = CartView::from_items(&items, Currency::INR);

        assert_eq!(view.count, 3);
        assert!(view.badge_visible);
        assert_eq!(view.total.amount_minor, 2500);
        assert_eq!(view.lines[0].decrement_to, 1);
        assert_eq!(view.lines[0].increment_to, 3);
        assert_eq!(view.lines[1].decrement_to, 0);
        assert_eq!(view.lines[0].subtotal.amount_minor, 2000);
    }

    #[test]
    fn test_render_html_escapes_item_text() {
        let items = [line("x\"y", "<b>Tea</b> & Bun", 12.5, 1)];
        let html = CartView::from_items(&items, Currency::INR).render_html();

        assert!(html.contains("data-item-id=\"x&quot;y\""));
        assert!(html.contains("<h4>&lt;b&gt;Tea&lt;/b&gt; &amp; Bun</h4>"));
        assert!(html.contains("\u{20b9}12.50"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_closure_renderer() {
        use std::cell::Cell;

        let seen = Cell::new(0);
        let renderer = |view: &CartView| seen.set(view.count);
        renderer.render(&CartView::from_items(&[line("a", "Tea", 1.0, 4)], Currency::INR));
        assert_eq!(seen.get(), 4);
    }
}
