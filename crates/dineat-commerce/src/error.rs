//! Error types for cart, menu, checkout, rating and site operations.
//!
//! Every operation reports invalid input through one of these enums and
//! leaves state untouched; whether the problem is shown to the user is up to
//! the caller. [`user_message`](CartError::user_message) helpers give the
//! wording the ordering pages use.

use dineat_storage::StorageError;
use thiserror::Error;

use crate::ids::ItemId;

/// Errors from cart store operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// A required item field is missing or falsy.
    #[error("Invalid item data: missing {0}")]
    InvalidItem(&'static str),

    /// No line item with this id.
    #[error("Item not found in cart: {0}")]
    ItemNotFound(ItemId),

    /// Quantity is not a finite number.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(f64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u64, u32),
}

impl CartError {
    /// Notification text for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::InvalidItem(_) => "Error adding item to cart",
            CartError::ItemNotFound(_) | CartError::InvalidQuantity(_) => {
                "Error updating quantity"
            }
            CartError::QuantityExceedsLimit(..) => "Maximum quantity reached",
        }
    }
}

/// Errors from menu filtering.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    /// Category code is not one of the known dish categories.
    #[error("Unknown menu category: {0}")]
    UnknownCategory(String),
}

/// Errors from the simulated payment flow.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// No payment method chosen.
    #[error("Please select a payment method")]
    NoMethodSelected,

    /// Payment method code is not recognised.
    #[error("Unknown payment method: {0}")]
    UnknownMethod(String),

    /// Nothing to pay for.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Cart total is zero or negative.
    #[error("Invalid cart total")]
    InvalidTotal,

    /// Payment details could not be recorded.
    #[error("Payment processing failed: {0}")]
    Storage(#[from] StorageError),
}

/// Errors from kitchen order status updates.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    /// Order id was blank.
    #[error("Invalid order ID or status")]
    MissingOrderId,

    /// Status is not one of the known order statuses.
    #[error("Invalid status: {0}")]
    UnknownStatus(String),
}

/// Errors from rating submission.
#[derive(Error, Debug)]
pub enum RatingError {
    /// Dish id was blank.
    #[error("Invalid dish ID")]
    MissingDish,

    /// No star rating selected.
    #[error("Please select a rating")]
    NoRating,

    /// Star rating outside 1..=5.
    #[error("Rating must be between 1 and 5, got {0}")]
    OutOfRange(u8),

    /// Rating could not be stored.
    #[error("Error submitting rating: {0}")]
    Storage(#[from] StorageError),
}

/// Errors from language, form and other page helpers.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Language code other than `en` or `ta`.
    #[error("Invalid language selection: {0}")]
    UnsupportedLanguage(String),

    /// A required form field is blank.
    #[error("{0} is required")]
    RequiredField(String),

    /// Email field does not look like an address.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Phone field is not ten digits.
    #[error("Please enter a valid phone number")]
    InvalidPhone,

    /// Preference could not be stored.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_user_messages() {
        assert_eq!(
            CartError::InvalidItem("price").user_message(),
            "Error adding item to cart"
        );
        assert_eq!(
            CartError::ItemNotFound(ItemId::new("x")).user_message(),
            "Error updating quantity"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CartError::InvalidItem("name").to_string(),
            "Invalid item data: missing name"
        );
        assert_eq!(
            SiteError::RequiredField("Email".into()).to_string(),
            "Email is required"
        );
        assert_eq!(
            PaymentError::NoMethodSelected.to_string(),
            "Please select a payment method"
        );
    }
}
