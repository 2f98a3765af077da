//! Simulated payment.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use dineat_storage::{keys, KeyValueStore};
use serde::{Deserialize, Serialize};

use crate::cart::CartStore;
use crate::error::PaymentError;
use crate::money::Money;
use crate::notify::Notifier;

/// Page shown after a successful payment.
pub const CONFIRMATION_PAGE: &str = "/orders/confirmation/";

/// How long the simulated gateway takes to answer.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Payment method chosen on the payment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cod,
    Card,
    Upi,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cod,
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::Wallet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == code)
            .ok_or_else(|| PaymentError::UnknownMethod(s.to_string()))
    }
}

/// Outcome of a successful payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    /// Amount charged.
    pub total: Money,
    pub order_date: DateTime<Utc>,
    /// Page to navigate to next.
    pub redirect_to: &'static str,
}

/// Runs the simulated payment for a cart.
///
/// Nothing is charged. The payment details are recorded under the
/// [`keys::PAYMENT_METHOD`], [`keys::TOTAL_AMOUNT`] and [`keys::ORDER_DATE`]
/// keys for the confirmation page, then the cart is emptied.
pub struct Checkout<'a> {
    storage: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
    processing_delay: Duration,
}

impl<'a> Checkout<'a> {
    pub fn new(storage: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        Self {
            storage,
            notifier,
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Pay for everything in `cart`.
    ///
    /// Validation failures and storage errors leave the cart untouched.
    /// The cart is cleared only once the payment has gone through.
    pub async fn process_payment(
        &self,
        cart: &mut CartStore<'_>,
        method: Option<PaymentMethod>,
    ) -> Result<PaymentReceipt, PaymentError> {
        let method = method.ok_or(PaymentError::NoMethodSelected)?;
        if cart.is_empty() {
            return Err(PaymentError::EmptyCart);
        }
        let total = cart.total();
        if !total.is_positive() {
            return Err(PaymentError::InvalidTotal);
        }

        let order_date = Utc::now();
        self.storage.set(keys::PAYMENT_METHOD, method.as_str())?;
        self.storage.set(keys::TOTAL_AMOUNT, &total.display_amount())?;
        self.storage.set(
            keys::ORDER_DATE,
            &order_date.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;

        tracing::info!(method = %method, total = %total, "processing payment");
        self.notifier.info("Processing payment...");

        tokio::time::sleep(self.processing_delay).await;

        self.notifier.success("Payment successful! Order confirmed.");
        cart.clear();

        Ok(PaymentReceipt {
            method,
            total,
            order_date,
            redirect_to: CONFIRMATION_PAGE,
        })
    }
}

impl fmt::Debug for Checkout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkout")
            .field("processing_delay", &self.processing_delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::NewCartItem;
    use crate::notify::{NotificationCenter, NotificationKind};
    use dineat_storage::{JsonStoreExt, MemoryStore};

    fn filled_cart<'a>(storage: &'a MemoryStore, notifier: &'a NotificationCenter) -> CartStore<'a> {
        let mut cart = CartStore::load(storage, notifier);
        cart.add_item(&NewCartItem::new("tea", "Masala Tea", 30.0)).unwrap();
        cart.add_item(&NewCartItem::new("tea", "Masala Tea", 30.0)).unwrap();
        cart.add_item(&NewCartItem::new("lassi", "Mango Lassi", 60.5)).unwrap();
        cart
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("UPI".parse::<PaymentMethod>().unwrap(), PaymentMethod::Upi);
        assert_eq!(" cod ".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cod);
        assert!(matches!(
            "cheque".parse::<PaymentMethod>(),
            Err(PaymentError::UnknownMethod(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_payment_records_details_and_clears_cart() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = filled_cart(&storage, &notifier);

        let checkout = Checkout::new(&storage, &notifier);
        let receipt = checkout
            .process_payment(&mut cart, Some(PaymentMethod::Card))
            .await
            .unwrap();

        assert_eq!(receipt.method, PaymentMethod::Card);
        assert_eq!(receipt.total.display_amount(), "120.50");
        assert_eq!(receipt.redirect_to, CONFIRMATION_PAGE);
        assert!(cart.is_empty());

        assert_eq!(storage.get(keys::PAYMENT_METHOD).unwrap().as_deref(), Some("card"));
        assert_eq!(storage.get(keys::TOTAL_AMOUNT).unwrap().as_deref(), Some("120.50"));
        let stored_date = storage.get(keys::ORDER_DATE).unwrap().unwrap();
        assert!(stored_date.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stored_date).is_ok());

        let stored_cart: Vec<serde_json::Value> =
            storage.get_json(keys::CART).unwrap().unwrap();
        assert!(stored_cart.is_empty());

        let messages = notifier.messages();
        let n = messages.len();
        assert_eq!(
            &messages[n - 3..],
            &[
                "Processing payment...".to_string(),
                "Payment successful! Order confirmed.".to_string(),
                "Cart cleared!".to_string(),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_processing_waits_for_delay() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = filled_cart(&storage, &notifier);
        let checkout = Checkout::new(&storage, &notifier);

        let start = tokio::time::Instant::now();
        checkout
            .process_payment(&mut cart, Some(PaymentMethod::Cod))
            .await
            .unwrap();
        assert!(start.elapsed() >= DEFAULT_PROCESSING_DELAY);
    }

    #[tokio::test]
    async fn test_missing_method_rejected() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = filled_cart(&storage, &notifier);

        let err = Checkout::new(&storage, &notifier)
            .process_payment(&mut cart, None)
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::NoMethodSelected));
        assert_eq!(cart.len(), 2);
        assert!(storage.get(keys::PAYMENT_METHOD).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);

        let err = Checkout::new(&storage, &notifier)
            .process_payment(&mut cart, Some(PaymentMethod::Upi))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Your cart is empty");
        assert!(notifier.last().is_none());
    }

    #[tokio::test]
    async fn test_zero_total_rejected() {
        let storage = MemoryStore::new();
        storage
            .set(
                keys::CART,
                r#"[{"id":"water","name":"Water","price":0,"quantity":2}]"#,
            )
            .unwrap();
        let notifier = NotificationCenter::new();
        let mut cart = CartStore::load(&storage, &notifier);
        assert_eq!(cart.len(), 1);

        let err = Checkout::new(&storage, &notifier)
            .process_payment(&mut cart, Some(PaymentMethod::Cod))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::InvalidTotal));
        assert_eq!(err.to_string(), "Invalid cart total");
        for key in [keys::PAYMENT_METHOD, keys::TOTAL_AMOUNT, keys::ORDER_DATE] {
            assert!(storage.get(key).unwrap().is_none());
        }
        assert_eq!(cart.item_count(), 2);
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_cart() {
        let storage = MemoryStore::new();
        let notifier = NotificationCenter::new();
        let mut cart = filled_cart(&storage, &notifier);
        storage.set_fail_writes(true);

        let err = Checkout::new(&storage, &notifier)
            .with_processing_delay(Duration::ZERO)
            .process_payment(&mut cart, Some(PaymentMethod::Wallet))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Storage(_)));
        assert_eq!(cart.item_count(), 3);
        assert_ne!(
            notifier.last().map(|n| n.kind),
            Some(NotificationKind::Info)
        );
    }
}
