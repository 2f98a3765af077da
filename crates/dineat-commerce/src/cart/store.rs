//! Cart store: the single owner of the current order's contents.

use std::collections::HashSet;

use dineat_storage::{keys, JsonStoreExt, KeyValueStore};

use crate::cart::{CartLineItem, CartRenderer, CartView, NewCartItem, NoopRenderer};
use crate::error::CartError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use crate::notify::Notifier;

/// Result of [`CartStore::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1.
    Added,
    /// The id was already in the cart; its quantity went up by one.
    Incremented { quantity: u32 },
}

/// Result of [`CartStore::update_quantity`].
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityUpdate {
    /// The line now has this quantity.
    Updated { quantity: u32 },
    /// The requested quantity was zero or less, so the line was removed.
    /// Holds the removed line if the id was in the cart.
    Removed(Option<CartLineItem>),
}

/// Shopping cart persisted under the [`keys::CART`] storage key.
///
/// Every mutating operation writes the full item list back to storage and
/// then invokes the renderer before returning, so a reload always rebuilds
/// the same list. If the write fails the in-memory list stays authoritative,
/// the user is told saving failed, and the next mutation tries again.
///
/// # Example
///
/// ```
/// use dineat_commerce::cart::{CartStore, NewCartItem};
/// use dineat_commerce::notify::NotificationCenter;
/// use dineat_storage::MemoryStore;
///
/// let storage = MemoryStore::new();
/// let notifier = NotificationCenter::new();
///
/// let mut cart = CartStore::load(&storage, &notifier);
/// cart.add_item(&NewCartItem::new("a", "Tea", 10.0)).unwrap();
/// cart.add_item(&NewCartItem::new("a", "Tea", 10.0)).unwrap();
/// cart.add_item(&NewCartItem::new("b", "Bun", 5.0)).unwrap();
///
/// assert_eq!(cart.item_count(), 3);
/// assert_eq!(cart.total().display_amount(), "25.00");
/// ```
pub struct CartStore<'a> {
    items: Vec<CartLineItem>,
    storage: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
    renderer: &'a dyn CartRenderer,
    currency: Currency,
    unsaved: bool,
}

impl<'a> CartStore<'a> {
    /// Rehydrate the cart from storage.
    ///
    /// Absent, unreadable or malformed data gives an empty cart.
    pub fn load(storage: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        Self {
            items: load_items(storage),
            storage,
            notifier,
            renderer: &NoopRenderer,
            currency: Currency::default(),
            unsaved: false,
        }
    }

    /// Set the display refresh hook.
    pub fn with_renderer(mut self, renderer: &'a dyn CartRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the currency totals are reported in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Add one unit of an item.
    ///
    /// Increments the quantity if the id is already present, otherwise
    /// appends a new line with quantity 1.
    pub fn add_item(&mut self, item: &NewCartItem) -> Result<AddOutcome, CartError> {
        item.validate()?;

        let outcome = match self.items.iter_mut().find(|i| i.id == *item.id) {
            Some(existing) => {
                let current = existing.quantity;
                existing.quantity = current.checked_add(1).ok_or(
                    CartError::QuantityExceedsLimit(u64::from(current) + 1, u32::MAX),
                )?;
                AddOutcome::Incremented {
                    quantity: existing.quantity,
                }
            }
            None => {
                self.items.push(item.clone().into_line_item());
                AddOutcome::Added
            }
        };

        tracing::debug!(item_id = %item.id, ?outcome, "added item to cart");
        match outcome {
            AddOutcome::Added => self
                .notifier
                .success(&format!("{} added to cart!", item.name)),
            AddOutcome::Incremented { .. } => self
                .notifier
                .success(&format!("{} quantity increased!", item.name)),
        }

        // A save failure must be the last notification
        self.after_mutation();
        Ok(outcome)
    }

    /// Remove the line with this id.
    ///
    /// An absent id is not an error; the list is left unchanged.
    pub fn remove_item(&mut self, id: &str) -> Option<CartLineItem> {
        let removed = self
            .items
            .iter()
            .position(|i| i.id == *id)
            .map(|index| self.items.remove(index));

        tracing::debug!(item_id = id, found = removed.is_some(), "removed item from cart");
        if let Some(item) = &removed {
            self.notifier
                .success(&format!("{} removed from cart!", item.name));
        }

        self.after_mutation();
        removed
    }

    /// Set the quantity of a line.
    ///
    /// Fractional quantities are truncated. A quantity that truncates to zero
    /// or less behaves exactly like [`remove_item`](Self::remove_item).
    pub fn update_quantity(
        &mut self,
        id: &str,
        new_quantity: f64,
    ) -> Result<QuantityUpdate, CartError> {
        if new_quantity.is_nan() {
            return Err(CartError::InvalidQuantity(new_quantity));
        }

        let whole = new_quantity.trunc();
        if whole <= 0.0 {
            return Ok(QuantityUpdate::Removed(self.remove_item(id)));
        }
        if whole.is_infinite() {
            return Err(CartError::InvalidQuantity(new_quantity));
        }
        if whole > f64::from(u32::MAX) {
            return Err(CartError::QuantityExceedsLimit(whole as u64, u32::MAX));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == *id)
            .ok_or_else(|| CartError::ItemNotFound(ItemId::new(id)))?;

        // Bounded by u32::MAX above
        let quantity = whole as u32;
        item.quantity = quantity;

        tracing::debug!(item_id = id, quantity, "updated cart quantity");
        self.after_mutation();
        Ok(QuantityUpdate::Updated { quantity })
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cleared cart");
        self.notifier.success("Cart cleared!");
        self.after_mutation();
    }

    /// Sum of price times quantity, rounded to two decimals.
    pub fn total(&self) -> Money {
        let total: f64 = self.items.iter().map(CartLineItem::subtotal).sum();
        Money::from_decimal(total, self.currency)
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Get a line by id.
    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == *id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// True when the last write to storage failed.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Current view-model.
    pub fn view(&self) -> CartView {
        CartView::from_items(&self.items, self.currency)
    }

    /// Invoke the renderer with the current state.
    pub fn refresh(&self) {
        self.renderer.render(&self.view());
    }

    fn after_mutation(&mut self) {
        self.persist();
        self.refresh();
    }

    fn persist(&mut self) {
        match self.storage.set_json(keys::CART, &self.items) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to save cart");
                self.unsaved = true;
                self.notifier.error("Error saving cart");
            }
        }
    }
}

impl std::fmt::Debug for CartStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("currency", &self.currency)
            .field("unsaved", &self.unsaved)
            .finish_non_exhaustive()
    }
}

fn load_items(storage: &dyn KeyValueStore) -> Vec<CartLineItem> {
    match storage.get_json::<Vec<CartLineItem>>(keys::CART) {
        Ok(Some(items)) if is_consistent(&items) => items,
        Ok(Some(_)) => {
            tracing::warn!("stored cart violates line item invariants, starting empty");
            Vec::new()
        }
        Ok(None) => Vec::new(),
        Err(e) if e.is_malformed_data() => {
            tracing::warn!(error = %e, "stored cart is malformed, starting empty");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored cart, starting empty");
            Vec::new()
        }
    }
}

fn is_consistent(items: &[CartLineItem]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .all(|item| item.is_well_formed() && seen.insert(item.id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotificationCenter, NotificationKind};
    use dineat_storage::{MemoryStore, StorageError};
    use std::cell::{Cell, RefCell};

    fn tea() -> NewCartItem {
        NewCartItem::new("a", "Tea", 10.0)
    }

    fn bun() -> NewCartItem {
        NewCartItem::new("b", "Bun", 5.0)
    }

    fn stored_items(storage: &MemoryStore) -> Vec<CartLineItem> {
        storage.get_json(keys::CART).unwrap().unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let cart = CartStore::load(&storage, &notifier);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_distinct_adds_count_each_call() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);

        for i in 0..5 {
            let outcome = cart
                .add_item(&NewCartItem::new(format!("dish-{i}"), "Dish", 1.0))
                .unwrap();
            assert_eq!(outcome, AddOutcome::Added);
        }
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 5);
    }

    #[test]
    fn test_repeated_add_increments_quantity() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);

        assert_eq!(cart.add_item(&tea()).unwrap(), AddOutcome::Added);
        assert_eq!(
            cart.add_item(&tea()).unwrap(),
            AddOutcome::Incremented { quantity: 2 }
        );
        assert_eq!(
            cart.add_item(&tea()).unwrap(),
            AddOutcome::Incremented { quantity: 3 }
        );

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(
            notifier.messages(),
            vec!["Tea added to cart!", "Tea quantity increased!", "Tea quantity increased!"]
        );
    }

    #[test]
    fn test_add_invalid_item_is_rejected_without_mutation() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);

        let err = cart.add_item(&NewCartItem::new("a", "", 10.0)).unwrap_err();
        assert!(matches!(err, CartError::InvalidItem("name")));
        assert!(cart.is_empty());
        assert!(storage.get(keys::CART).unwrap().is_none());
        assert!(notifier.history().is_empty());
    }

    #[test]
    fn test_total_example() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);

        cart.add_item(&tea()).unwrap();
        cart.add_item(&tea()).unwrap();
        cart.add_item(&bun()).unwrap();

        assert_eq!(cart.total().amount_minor, 2500);
        assert_eq!(cart.total().display_amount(), "25.00");
    }

    #[test]
    fn test_total_rounds_to_two_decimals() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);

        cart.add_item(&NewCartItem::new("x", "Chai", 0.1)).unwrap();
        cart.add_item(&NewCartItem::new("y", "Biscuit", 0.2)).unwrap();
        assert_eq!(cart.total().display_amount(), "0.30");
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for quantity in [0.0, -5.0, 0.4] {
            let storage = MemoryStore::new();
            let notifier = NotificationCenter::new();
            let mut cart = CartStore::load(&storage, &notifier);
            cart.add_item(&tea()).unwrap();
            cart.add_item(&bun()).unwrap();

            let result = cart.update_quantity("a", quantity).unwrap();
            assert!(matches!(result, QuantityUpdate::Removed(Some(ref item)) if item.name == "Tea"));
            assert!(cart.get("a").is_none());
            assert_eq!(cart.len(), 1);
            assert_eq!(notifier.last().unwrap().message, "Tea removed from cart!");
        }
    }

    #[test]
    fn test_update_quantity_zero_matches_remove_for_absent_id() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();

        let result = cart.update_quantity("missing", 0.0).unwrap();
        assert_eq!(result, QuantityUpdate::Removed(None));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_truncates() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();

        let result = cart.update_quantity("a", 4.9).unwrap();
        assert_eq!(result, QuantityUpdate::Updated { quantity: 4 });
        assert_eq!(cart.item_count(), 4);
        assert_eq!(stored_items(&storage)[0].quantity, 4);
    }

    #[test]
    fn test_update_quantity_unknown_item() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();

        let err = cart.update_quantity("zzz", 3.0).unwrap_err();
        assert!(matches!(err, CartError::ItemNotFound(ref id) if id.as_str() == "zzz"));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_rejects_nan_and_overflowing_values() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();

        assert!(matches!(
            cart.update_quantity("a", f64::NAN),
            Err(CartError::InvalidQuantity(_))
        ));
        assert!(matches!(
            cart.update_quantity("a", f64::INFINITY),
            Err(CartError::InvalidQuantity(_))
        ));
        assert!(matches!(
            cart.update_quantity("a", 1e10),
            Err(CartError::QuantityExceedsLimit(10_000_000_000, u32::MAX))
        ));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_negative_infinity_removes() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();
        cart.add_item(&bun()).unwrap();

        let result = cart.update_quantity("a", f64::NEG_INFINITY).unwrap();
        assert!(matches!(result, QuantityUpdate::Removed(Some(ref item)) if item.name == "Tea"));
        assert_eq!(cart.len(), 1);
        assert_eq!(stored_items(&storage).len(), 1);
    }

    #[test]
    fn test_large_quantities_are_accepted() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();

        assert_eq!(
            cart.update_quantity("a", 1000.0).unwrap(),
            QuantityUpdate::Updated { quantity: 1000 }
        );
        assert_eq!(
            cart.add_item(&tea()).unwrap(),
            AddOutcome::Incremented { quantity: 1001 }
        );
        assert_eq!(stored_items(&storage)[0].quantity, 1001);
    }

    #[test]
    fn test_add_at_u32_max_is_rejected() {
        let storage = MemoryStore::new();
        storage
            .set(
                keys::CART,
                &format!(r#"[{{"id":"a","name":"Tea","price":10,"quantity":{}}}]"#, u32::MAX),
            )
            .unwrap();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);

        assert!(matches!(
            cart.add_item(&tea()),
            Err(CartError::QuantityExceedsLimit(_, u32::MAX))
        ));
        assert_eq!(cart.get("a").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_reload_keeps_large_quantities() {
        let storage = MemoryStore::new();
        storage
            .set(
                keys::CART,
                concat!(
                    r#"[{"id":"a","name":"Tea","price":10,"quantity":1000},"#,
                    r#"{"id":"b","name":"Bun","price":5,"quantity":1}]"#
                ),
            )
            .unwrap();
        let notifier = NotificationCenter::new();
        let cart = CartStore::load(&storage, &notifier);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 1001);
    }

    #[test]
    fn test_remove_absent_id_leaves_list_unchanged() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();
        cart.add_item(&bun()).unwrap();
        let before = cart.items().to_vec();
        let notifications_before = notifier.history().len();

        assert!(cart.remove_item("nope").is_none());
        assert_eq!(cart.items(), before.as_slice());
        assert_eq!(notifier.history().len(), notifications_before);
    }

    #[test]
    fn test_clear() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();
        cart.add_item(&bun()).unwrap();

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total().display_amount(), "0.00");
        assert!(stored_items(&storage).is_empty());
        assert_eq!(notifier.last().unwrap().message, "Cart cleared!");

        // Clearing an empty cart is fine too
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_persist_reload_roundtrip() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let expected = {
            let mut cart = CartStore::load(&storage, &notifier);
            cart.add_item(&bun()).unwrap();
            cart.add_item(&tea()).unwrap();
            cart.add_item(&tea()).unwrap();
            cart.add_item(&NewCartItem::new("c", "Lassi", 60.5)).unwrap();
            cart.update_quantity("c", 3.0).unwrap();
            cart.items().to_vec()
        };

        let reloaded = CartStore::load(&storage, &notifier);
        assert_eq!(reloaded.items(), expected.as_slice());
        let ids: Vec<&str> = reloaded.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let notifier = NotificationCenter::new();
        let cases = [
            "not json at all",
            "{\"id\":\"a\"}",
            "[{\"id\":\"a\",\"name\":\"Tea\"}]",
            "[{\"id\":\"a\",\"name\":\"Tea\",\"price\":10,\"quantity\":-1}]",
            "[{\"id\":\"a\",\"name\":\"Tea\",\"price\":10,\"quantity\":0}]",
            concat!(
                "[{\"id\":\"a\",\"name\":\"Tea\",\"price\":10,\"quantity\":1},",
                "{\"id\":\"a\",\"name\":\"Tea\",\"price\":10,\"quantity\":2}]"
            ),
        ];

        for raw in cases {
            let storage = MemoryStore::new();
            storage.set(keys::CART, raw).unwrap();
            let cart = CartStore::load(&storage, &notifier);
            assert!(cart.is_empty(), "expected empty cart for {raw}");
        }
    }

    #[test]
    fn test_loads_data_written_by_the_page() {
        let storage = MemoryStore::new();
        storage
            .set(
                keys::CART,
                r#"[{"id":"7","name":"Butter Chicken","price":320,"category":"MAIN_COURSE","quantity":2}]"#,
            )
            .unwrap();
        let notifier = NotificationCenter::new();
        let cart = CartStore::load(&storage, &notifier);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().display(), "\u{20b9}640.00");
    }

    #[test]
    fn test_persistence_failure_is_not_fatal() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        cart.add_item(&tea()).unwrap();

        storage.set_fail_writes(true);
        cart.add_item(&bun()).unwrap();

        // Memory is authoritative, storage still has the old list
        assert_eq!(cart.len(), 2);
        assert!(cart.has_unsaved_changes());
        assert_eq!(stored_items(&storage).len(), 1);
        let errors: Vec<_> = notifier
            .history()
            .into_iter()
            .filter(|n| n.kind == NotificationKind::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Error saving cart");

        // The next mutation after storage recovers writes the full list
        storage.set_fail_writes(false);
        cart.update_quantity("b", 2.0).unwrap();
        assert!(!cart.has_unsaved_changes());
        assert_eq!(stored_items(&storage), cart.items().to_vec());
    }

    #[test]
    fn test_quota_exceeded_is_not_fatal() {
        let storage = MemoryStore::with_quota(80);
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);

        cart.add_item(&tea()).unwrap();
        assert!(!cart.has_unsaved_changes());
        cart.add_item(&NewCartItem::new("long", "A dish with a rather long name", 99.0))
            .unwrap();

        assert!(cart.has_unsaved_changes());
        assert_eq!(cart.len(), 2);
        assert!(matches!(
            storage.set(keys::CART, &"x".repeat(100)),
            Err(StorageError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_renderer_invoked_after_every_mutation() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let calls = Cell::new(0);
        let last_count = Cell::new(0);
        let renderer = |view: &CartView| {
            calls.set(calls.get() + 1);
            last_count.set(view.count);
        };
        let mut cart = CartStore::load(&storage, &notifier).with_renderer(&renderer);

        cart.add_item(&tea()).unwrap();
        cart.add_item(&tea()).unwrap();
        cart.update_quantity("a", 5.0).unwrap();
        cart.remove_item("missing");
        assert_eq!(calls.get(), 4);
        assert_eq!(last_count.get(), 5);

        cart.clear();
        assert_eq!(calls.get(), 5);
        assert_eq!(last_count.get(), 0);

        // Rejected input does not refresh
        let _ = cart.add_item(&NewCartItem::default());
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_renderer_sees_persisted_state() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let snapshots = RefCell::new(Vec::new());
        let renderer = |_view: &CartView| {
            let stored: Option<Vec<CartLineItem>> = storage.get_json(keys::CART).unwrap();
            snapshots.borrow_mut().push(stored.map(|items| items.len()));
        };
        let mut cart = CartStore::load(&storage, &notifier).with_renderer(&renderer);

        cart.add_item(&tea()).unwrap();
        cart.add_item(&bun()).unwrap();
        assert_eq!(*snapshots.borrow(), vec![Some(1), Some(2)]);
    }
}
