//! Ordering logic for the DineAt restaurant client.
//!
//! Everything a customer touches between sitting down and paying, plus the
//! small pieces the kitchen and admin dashboards share:
//!
//! - **Cart**: the cart store, persisted under the `cart` storage key
//! - **Menu**: dishes, categories and category filtering
//! - **Checkout**: simulated payment and order status updates
//! - **Ratings**: per-dish star ratings and reviews
//! - **Site**: language preference, navigation menu, form validation
//!
//! All state goes through a [`dineat_storage::KeyValueStore`] and all user
//! feedback through a [`notify::Notifier`], so the same logic runs behind a
//! browser page, the command line client, or a test.
//!
//! # Example
//!
//! ```
//! use dineat_commerce::prelude::*;
//! use dineat_storage::MemoryStore;
//!
//! let storage = MemoryStore::new();
//! let notifier = NotificationCenter::new();
//! let menu = house_menu();
//!
//! let mut cart = CartStore::load(&storage, &notifier);
//! cart.add_item(&NewCartItem::from(&menu[0])).unwrap();
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(notifier.last().unwrap().message, "Paneer Tikka added to cart!");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod checkout;
pub mod menu;
pub mod rating;
pub mod site;

pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, MenuError, OrderError, PaymentError, RatingError, SiteError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notify::{NotificationCenter, NotificationKind, Notifier};

    // Cart
    pub use crate::cart::{
        AddOutcome, CartLineItem, CartRenderer, CartStore, CartView, NewCartItem, QuantityUpdate,
    };

    // Menu
    pub use crate::menu::{filter_menu, house_menu, CategoryFilter, DishCategory, MenuItem};

    // Checkout
    pub use crate::checkout::{update_order_status, Checkout, OrderStatus, PaymentMethod};

    // Ratings
    pub use crate::rating::{RatingBook, Stars};

    // Site
    pub use crate::site::{Language, LanguagePreference, NavMenu};
}
