//! Checkout module.
//!
//! Simulated payment and kitchen order status updates.

mod order;
mod payment;

pub use order::{update_order_status, OrderStatus, OrderStatusBadge};
pub use payment::{
    Checkout, PaymentMethod, PaymentReceipt, CONFIRMATION_PAGE, DEFAULT_PROCESSING_DELAY,
};
