//! Order lifecycle and notification status enums.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Orders progress `PendingPayment → PaymentConfirmed → Processing → Shipped
/// → OutForDelivery → Delivered`, with `Cancelled` reachable from any
/// non-terminal state. `Delivered` and `Cancelled` are terminal: no
/// transition out of them is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    PendingPayment,
    PaymentConfirmed,
    Processing,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order, `Cancelled` last.
    pub const ALL: [Self; 7] = [
        Self::PendingPayment,
        Self::PaymentConfirmed,
        Self::Processing,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Whether the status accepts no further transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether an order in this status may move to `next`.
    ///
    /// Terminal states accept nothing. Between non-terminal states any move
    /// is allowed, including corrections backwards and skipping steps - the
    /// admin panel drives these transitions by hand.
    #[must_use]
    pub const fn can_transition_to(&self, _next: Self) -> bool {
        !self.is_terminal()
    }

    /// The notification category announced for a transition into this status.
    #[must_use]
    pub const fn notification_kind(&self) -> NotificationKind {
        match self {
            Self::Shipped | Self::OutForDelivery => NotificationKind::Shipping,
            Self::Delivered => NotificationKind::Delivery,
            Self::Cancelled => NotificationKind::Cancellation,
            Self::PaymentConfirmed => NotificationKind::Payment,
            Self::PendingPayment | Self::Processing => NotificationKind::Order,
        }
    }

    /// Human-readable label, as shown to customers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PendingPayment => "Pending Payment",
            Self::PaymentConfirmed => "Payment Confirmed",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], " ").as_str() {
            "pending payment" => Ok(Self::PendingPayment),
            "payment confirmed" => Ok(Self::PaymentConfirmed),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "out for delivery" => Ok(Self::OutForDelivery),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Order,
    Payment,
    Shipping,
    Delivery,
    Cancellation,
}

impl NotificationKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 5] = [
        Self::Order,
        Self::Payment,
        Self::Shipping,
        Self::Delivery,
        Self::Cancellation,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Order => "Order",
            Self::Payment => "Payment",
            Self::Shipping => "Shipping",
            Self::Delivery => "Delivery",
            Self::Cancellation => "Cancellation",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
