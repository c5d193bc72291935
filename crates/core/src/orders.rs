//! Order store: lifecycle, status history, notes, and notifications.
//!
//! The store owns every order, the pointer to the most recently placed one,
//! and the notification feed. All mutation goes through the methods here;
//! each status transition appends to the order's history and emits one
//! notification. Orders are created all-or-nothing - a failed payment never
//! produces a partial order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::CartLine;
use crate::types::{NotificationId, NotificationKind, OrderId, OrderStatus, PaymentDetails};

/// Author recorded on admin-entered order notes.
const NOTE_AUTHOR: &str = "Admin";

/// Errors from order store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// No order with the given id exists.
    #[error("no order with id {0}")]
    NotFound(OrderId),

    /// Orders are never placed with an empty item list.
    #[error("cannot place an order with no items")]
    EmptyOrder,

    /// The order is in a terminal status and accepts no further transitions.
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// No notification with the given id exists.
    #[error("no notification with id {0}")]
    NotificationNotFound(NotificationId),
}

/// One entry in an order's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    pub notes: Option<String>,
}

/// A free-form note attached to an order by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNote {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    /// Whether the note is shown to the customer or internal-only.
    pub customer_visible: bool,
}

/// Customer details on an order.
///
/// There is no account system; orders carry a static guest identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl CustomerInfo {
    /// The stub identity used for every order.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            name: "Guest Customer".to_string(),
            email: "guest@stride.shop".to_string(),
            address: "P.O. Box 100, Nairobi".to_string(),
        }
    }
}

impl Default for CustomerInfo {
    fn default() -> Self {
        Self::guest()
    }
}

/// A customer-facing notification tied to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub order_id: OrderId,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub kind: NotificationKind,
}

/// A placed order.
///
/// `items` is a snapshot taken at placement; later cart mutations never
/// touch it. `status_history` is append-only and chronological, and its last
/// entry always matches `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub total_price: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub status: OrderStatus,
    pub status_history: Vec<StatusEvent>,
    pub payment: Option<PaymentDetails>,
    pub customer: CustomerInfo,
    pub notes: Vec<OrderNote>,
}

impl Order {
    /// When the order was placed (first status event).
    #[must_use]
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        self.status_history.first().map(|event| event.timestamp)
    }

    /// When the order last changed status (last status event).
    #[must_use]
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.status_history.last().map(|event| event.timestamp)
    }
}

/// Everything needed to place an order.
///
/// Totals are supplied by the caller (the checkout quote), not recomputed
/// here - the order records exactly what the customer saw and paid.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub items: Vec<CartLine>,
    pub total_price: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub payment: Option<PaymentDetails>,
    pub initial_status: OrderStatus,
}

/// The order store.
///
/// Serializes directly as the order persistence blob: orders, the
/// current-order pointer, and the notification feed travel together,
/// independent of the cart blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderService {
    orders: Vec<Order>,
    current_order: Option<OrderId>,
    notifications: Vec<Notification>,
}

impl OrderService {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            current_order: None,
            notifications: Vec::new(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Place a new order and emit its placement notification.
    ///
    /// The order id is derived from the placement timestamp (epoch
    /// milliseconds) and bumped past any existing id, so ids stay unique and
    /// strictly increasing even for same-millisecond placements.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyOrder`] when the draft has no items; the
    /// store is left unchanged.
    pub fn place_order(&mut self, draft: OrderDraft) -> Result<OrderId, OrderError> {
        if draft.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let now = Utc::now();
        let id = self.next_order_id(now);
        let initial = draft.initial_status;

        let order = Order {
            id,
            items: draft.items,
            total_price: draft.total_price,
            shipping: draft.shipping,
            tax: draft.tax,
            status: initial,
            status_history: vec![StatusEvent {
                status: initial,
                timestamp: now,
                notes: None,
            }],
            payment: draft.payment,
            customer: CustomerInfo::guest(),
            notes: Vec::new(),
        };

        let (kind, message) = if initial == OrderStatus::PaymentConfirmed {
            (
                NotificationKind::Payment,
                format!("Payment confirmed. Order #{id} is being prepared."),
            )
        } else {
            (NotificationKind::Order, format!("Order #{id} has been placed."))
        };

        tracing::info!(order_id = %id, status = %initial, total = %order.total_price, "order placed");

        self.orders.push(order);
        self.current_order = Some(id);
        self.push_notification(id, kind, message, now);
        Ok(id)
    }

    /// Move an order to a new status.
    ///
    /// Appends a [`StatusEvent`] stamped now - with `note`, or a default
    /// `"Status updated to {status}"` - and emits one notification whose kind
    /// is derived from the new status.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for an unknown id and
    /// [`OrderError::InvalidTransition`] when the order is already in a
    /// terminal status (`Delivered` or `Cancelled`).
    pub fn update_status(
        &mut self,
        id: OrderId,
        new_status: OrderStatus,
        note: Option<&str>,
    ) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrderError::NotFound(id))?;

        if !order.status.can_transition_to(new_status) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: new_status,
            });
        }

        let now = Utc::now();
        let notes = note.map_or_else(|| format!("Status updated to {new_status}"), String::from);
        order.status_history.push(StatusEvent {
            status: new_status,
            timestamp: now,
            notes: Some(notes),
        });
        order.status = new_status;

        tracing::info!(order_id = %id, status = %new_status, "order status updated");

        self.push_notification(
            id,
            new_status.notification_kind(),
            format!("Your order is now {new_status}."),
            now,
        );
        Ok(())
    }

    /// Mark an order's payment as confirmed.
    ///
    /// # Errors
    ///
    /// Same as [`update_status`](Self::update_status).
    pub fn mark_paid(&mut self, id: OrderId) -> Result<(), OrderError> {
        self.update_status(id, OrderStatus::PaymentConfirmed, None)
    }

    /// Attach an admin note to an order. No status change, no notification.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for an unknown id.
    pub fn add_note(
        &mut self,
        id: OrderId,
        text: &str,
        customer_visible: bool,
    ) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrderError::NotFound(id))?;

        order.notes.push(OrderNote {
            text: text.to_string(),
            timestamp: Utc::now(),
            author: NOTE_AUTHOR.to_string(),
            customer_visible,
        });
        Ok(())
    }

    // =========================================================================
    // Notification management
    // =========================================================================

    /// Mark one notification as read.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotificationNotFound`] for an unknown id.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> Result<(), OrderError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)
            .ok_or(OrderError::NotificationNotFound(id))?;
        notification.read = true;
        Ok(())
    }

    /// Mark every notification as read.
    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    /// Remove one notification.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotificationNotFound`] for an unknown id.
    pub fn remove_notification(&mut self, id: NotificationId) -> Result<(), OrderError> {
        let before = self.notifications.len();
        self.notifications.retain(|notification| notification.id != id);
        if self.notifications.len() == before {
            return Err(OrderError::NotificationNotFound(id));
        }
        Ok(())
    }

    /// Drop every notification, read or not.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up one order.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// The most recently placed order, if any.
    #[must_use]
    pub fn current_order(&self) -> Option<&Order> {
        self.current_order.and_then(|id| self.order(id))
    }

    /// Orders still in flight (not delivered, not cancelled).
    #[must_use]
    pub fn current_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| !order.status.is_terminal())
            .collect()
    }

    /// Orders that reached `Delivered`.
    #[must_use]
    pub fn delivered_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.status == OrderStatus::Delivered)
            .collect()
    }

    /// Orders that were cancelled.
    #[must_use]
    pub fn cancelled_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.status == OrderStatus::Cancelled)
            .collect()
    }

    /// All notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Notifications not yet marked read.
    #[must_use]
    pub fn unread_notifications(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|notification| !notification.read)
            .collect()
    }

    /// Notifications for one order.
    #[must_use]
    pub fn notifications_for_order(&self, id: OrderId) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|notification| notification.order_id == id)
            .collect()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn next_order_id(&self, now: DateTime<Utc>) -> OrderId {
        let stamp = now.timestamp_millis();
        let last = self
            .orders
            .iter()
            .map(|order| order.id.as_i64())
            .max()
            .unwrap_or(0);
        OrderId::new(stamp.max(last + 1))
    }

    fn push_notification(
        &mut self,
        order_id: OrderId,
        kind: NotificationKind,
        message: String,
        timestamp: DateTime<Utc>,
    ) {
        self.notifications.push(Notification {
            id: NotificationId::generate(),
            order_id,
            message,
            timestamp,
            read: false,
            kind,
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CartLineId, Gender, PaymentMethod, Product, ProductId};

    fn line(product_id: i64, size: &str, price: i64, quantity: u32) -> CartLine {
        let product = Product {
            id: ProductId::new(product_id),
            name: format!("Sneaker {product_id}"),
            brand: "Stride".to_string(),
            categories: vec!["running".to_string()],
            gender: Gender::Unisex,
            original_price: Decimal::new(price, 0),
            discount_price: Decimal::new(price, 0),
            sizes: vec![size.to_string()],
            date_added: Utc::now(),
            sales: 0,
        };
        CartLine {
            id: CartLineId::for_selection(&product, size),
            product,
            size: size.to_string(),
            quantity,
        }
    }

    fn draft(initial_status: OrderStatus) -> OrderDraft {
        OrderDraft {
            items: vec![line(1, "M", 1000, 2), line(2, "L", 2000, 1)],
            total_price: Decimal::new(4620, 0),
            shipping: Decimal::new(300, 0),
            tax: Decimal::new(320, 0),
            payment: Some(PaymentDetails {
                method: PaymentMethod::Card,
                payment_id: "AB12CD34".to_string(),
            }),
            initial_status,
        }
    }

    fn place(store: &mut OrderService, initial_status: OrderStatus) -> OrderId {
        store.place_order(draft(initial_status)).unwrap()
    }

    #[test]
    fn empty_draft_creates_no_order() {
        let mut store = OrderService::new();
        let result = store.place_order(OrderDraft {
            items: Vec::new(),
            ..draft(OrderStatus::PendingPayment)
        });

        assert_eq!(result, Err(OrderError::EmptyOrder));
        assert!(store.orders().is_empty());
        assert!(store.notifications().is_empty());
        assert!(store.current_order().is_none());
    }

    #[test]
    fn placement_seeds_history_and_pointer() {
        let mut store = OrderService::new();
        let id = place(&mut store, OrderStatus::PendingPayment);

        let order = store.order(id).unwrap();
        assert_eq!(order.status, OrderStatus::PendingPayment);
        assert_eq!(order.status_history.len(), 1);
        assert_eq!(order.status_history[0].status, OrderStatus::PendingPayment);
        assert_eq!(order.status_history[0].notes, None);
        assert_eq!(store.current_order().unwrap().id, id);
    }

    #[test]
    fn placement_notification_kind_follows_initial_status() {
        let mut store = OrderService::new();
        let pending = place(&mut store, OrderStatus::PendingPayment);
        assert_eq!(store.notifications_for_order(pending).len(), 1);
        assert_eq!(
            store.notifications_for_order(pending)[0].kind,
            NotificationKind::Order
        );

        let confirmed = place(&mut store, OrderStatus::PaymentConfirmed);
        let notifications = store.notifications_for_order(confirmed);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Payment);
    }

    #[test]
    fn order_ids_are_unique_and_increasing() {
        let mut store = OrderService::new();
        let ids: Vec<OrderId> = (0..5)
            .map(|_| place(&mut store, OrderStatus::PaymentConfirmed))
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn update_status_on_unknown_order_is_not_found() {
        let mut store = OrderService::new();
        let missing = OrderId::new(123);
        assert_eq!(
            store.update_status(missing, OrderStatus::Shipped, None),
            Err(OrderError::NotFound(missing))
        );
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn update_status_appends_event_with_default_note() {
        let mut store = OrderService::new();
        let id = place(&mut store, OrderStatus::PaymentConfirmed);

        store.update_status(id, OrderStatus::Processing, None).unwrap();

        let order = store.order(id).unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.status_history.len(), 2);
        assert_eq!(
            order.status_history[1].notes.as_deref(),
            Some("Status updated to Processing")
        );
    }

    #[test]
    fn shipping_transition_with_note_emits_one_shipping_notification() {
        let mut store = OrderService::new();
        let id = place(&mut store, OrderStatus::PaymentConfirmed);
        store.update_status(id, OrderStatus::Processing, None).unwrap();
        let before = store.notifications().len();

        store
            .update_status(id, OrderStatus::Shipped, Some("Left warehouse"))
            .unwrap();

        let order = store.order(id).unwrap();
        let last = order.status_history.last().unwrap();
        assert_eq!(last.status, OrderStatus::Shipped);
        assert_eq!(last.notes.as_deref(), Some("Left warehouse"));

        assert_eq!(store.notifications().len(), before + 1);
        let newest = store.notifications().last().unwrap();
        assert_eq!(newest.kind, NotificationKind::Shipping);
        assert_eq!(newest.order_id, id);
        assert_eq!(newest.message, "Your order is now Shipped.");
    }

    #[test]
    fn history_last_entry_always_matches_status() {
        let mut store = OrderService::new();
        let id = place(&mut store, OrderStatus::PendingPayment);

        let walk = [
            OrderStatus::PaymentConfirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ];
        for status in walk {
            store.update_status(id, status, None).unwrap();
            let order = store.order(id).unwrap();
            assert_eq!(order.status_history.last().unwrap().status, order.status);
        }

        let order = store.order(id).unwrap();
        assert_eq!(order.status_history.len(), 6);
        for pair in order.status_history.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn terminal_orders_reject_further_transitions() {
        let mut store = OrderService::new();
        let cancelled = place(&mut store, OrderStatus::PaymentConfirmed);
        store
            .update_status(cancelled, OrderStatus::Cancelled, None)
            .unwrap();

        let result = store.update_status(cancelled, OrderStatus::Processing, None);
        assert_eq!(
            result,
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Cancelled,
                to: OrderStatus::Processing,
            })
        );

        // Nothing changed: no history entry, no notification.
        let order = store.order(cancelled).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.status_history.len(), 2);
        assert_eq!(store.notifications_for_order(cancelled).len(), 2);

        let delivered = place(&mut store, OrderStatus::PaymentConfirmed);
        store
            .update_status(delivered, OrderStatus::Delivered, None)
            .unwrap();
        assert!(store
            .update_status(delivered, OrderStatus::Shipped, None)
            .is_err());
    }

    #[test]
    fn mark_paid_confirms_payment() {
        let mut store = OrderService::new();
        let id = place(&mut store, OrderStatus::PendingPayment);

        store.mark_paid(id).unwrap();

        assert_eq!(store.order(id).unwrap().status, OrderStatus::PaymentConfirmed);
        let kinds: Vec<NotificationKind> = store
            .notifications_for_order(id)
            .iter()
            .map(|notification| notification.kind)
            .collect();
        assert_eq!(kinds, vec![NotificationKind::Order, NotificationKind::Payment]);
    }

    #[test]
    fn notes_do_not_notify_or_change_status() {
        let mut store = OrderService::new();
        let id = place(&mut store, OrderStatus::PaymentConfirmed);
        let before = store.notifications().len();

        store.add_note(id, "Customer asked for gift wrap", true).unwrap();
        store.add_note(id, "Repeat buyer", false).unwrap();

        let order = store.order(id).unwrap();
        assert_eq!(order.notes.len(), 2);
        assert_eq!(order.notes[0].author, "Admin");
        assert!(order.notes[0].customer_visible);
        assert!(!order.notes[1].customer_visible);
        assert_eq!(order.status, OrderStatus::PaymentConfirmed);
        assert_eq!(store.notifications().len(), before);

        assert_eq!(
            store.add_note(OrderId::new(9), "x", false),
            Err(OrderError::NotFound(OrderId::new(9)))
        );
    }

    #[test]
    fn notification_read_and_remove_by_stable_id() {
        let mut store = OrderService::new();
        let id = place(&mut store, OrderStatus::PaymentConfirmed);
        store.update_status(id, OrderStatus::Shipped, None).unwrap();

        let first = store.notifications()[0].id;
        let second = store.notifications()[1].id;

        store.mark_notification_read(first).unwrap();
        assert_eq!(store.unread_notifications().len(), 1);

        // Removing the first leaves the second addressable by its own id.
        store.remove_notification(first).unwrap();
        assert_eq!(store.notifications().len(), 1);
        store.mark_notification_read(second).unwrap();
        assert!(store.unread_notifications().is_empty());

        assert_eq!(
            store.remove_notification(first),
            Err(OrderError::NotificationNotFound(first))
        );
    }

    #[test]
    fn mark_all_and_clear_notifications() {
        let mut store = OrderService::new();
        let id = place(&mut store, OrderStatus::PaymentConfirmed);
        store.update_status(id, OrderStatus::Processing, None).unwrap();
        store.update_status(id, OrderStatus::Shipped, None).unwrap();

        store.mark_all_notifications_read();
        assert!(store.unread_notifications().is_empty());
        assert_eq!(store.notifications().len(), 3);

        store.clear_notifications();
        assert!(store.notifications().is_empty());

        // Clearing an already-empty feed is fine.
        store.clear_notifications();
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn order_queries_split_by_lifecycle() {
        let mut store = OrderService::new();
        let in_flight = place(&mut store, OrderStatus::PaymentConfirmed);
        let delivered = place(&mut store, OrderStatus::PaymentConfirmed);
        let cancelled = place(&mut store, OrderStatus::PaymentConfirmed);
        store
            .update_status(delivered, OrderStatus::Delivered, None)
            .unwrap();
        store
            .update_status(cancelled, OrderStatus::Cancelled, None)
            .unwrap();

        let current: Vec<OrderId> = store.current_orders().iter().map(|o| o.id).collect();
        assert_eq!(current, vec![in_flight]);
        let done: Vec<OrderId> = store.delivered_orders().iter().map(|o| o.id).collect();
        assert_eq!(done, vec![delivered]);
        let gone: Vec<OrderId> = store.cancelled_orders().iter().map(|o| o.id).collect();
        assert_eq!(gone, vec![cancelled]);
    }
}
