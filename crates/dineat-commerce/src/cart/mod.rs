//! Shopping cart module.
//!
//! Contains the line item types, the persisted cart store and the view-model
//! the page renders from.

mod line_item;
mod store;
mod view;

pub use line_item::{CartLineItem, NewCartItem};
pub use store::{AddOutcome, CartStore, QuantityUpdate};
pub use view::{CartLineView, CartRenderer, CartView, NoopRenderer, EMPTY_CART_MESSAGE};
