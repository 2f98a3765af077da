//! Kitchen order status updates.

use std::fmt;
use std::str::FromStr;

use crate::error::OrderError;
use crate::ids::OrderId;
use crate::notify::Notifier;
use serde::{Deserialize, Serialize};

/// Where an order is in the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, not yet started.
    #[default]
    Pending,
    Preparing,
    /// Ready to serve.
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    /// Status codes are matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::UnknownStatus(s.to_string()))
    }
}

/// Status label as drawn on an order card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderStatusBadge {
    pub order_id: OrderId,
    pub status: OrderStatus,
    /// e.g. "Preparing".
    pub label: &'static str,
    /// e.g. "status-preparing".
    pub css_class: String,
}

impl OrderStatusBadge {
    pub fn new(order_id: OrderId, status: OrderStatus) -> Self {
        Self {
            order_id,
            status,
            label: status.display_name(),
            css_class: format!("status-{}", status.as_str()),
        }
    }
}

/// Mark an order with a new status on the dashboard.
///
/// Any status may follow any other. Nothing is persisted; the returned badge
/// is what the order card should show.
pub fn update_order_status(
    notifier: &dyn Notifier,
    order_id: &str,
    status: &str,
) -> Result<OrderStatusBadge, OrderError> {
    let order_id = OrderId::new(order_id);
    if order_id.is_empty() || status.is_empty() {
        return Err(OrderError::MissingOrderId);
    }
    let status: OrderStatus = status.parse()?;

    tracing::info!(order_id = %order_id, status = %status, "order status updated");
    notifier.success(&format!("Order #{} marked as {}", order_id, status));

    Ok(OrderStatusBadge::new(order_id, status))
}
