//! Order lifecycle walked the way the admin panel drives it.

#![allow(clippy::unwrap_used)]

use stride_admin::orders::{OrderQuery, SortDirection, SortField};
use stride_core::{
    NotificationKind, OrderError, OrderService, OrderStatus, PaymentMethod,
};
use stride_integration_tests::reference_cart;
use stride_storefront::checkout::CheckoutPolicy;
use stride_storefront::payment::StaticGateway;

async fn confirmed_order(orders: &mut OrderService) -> stride_core::OrderId {
    let mut cart = reference_cart();
    CheckoutPolicy::default()
        .checkout(&mut cart, orders, &StaticGateway::approving(PaymentMethod::Card))
        .await
        .unwrap()
}

#[tokio::test]
async fn full_walk_to_delivered_notifies_each_step() {
    let mut orders = OrderService::new();
    let id = confirmed_order(&mut orders).await;

    orders.update_status(id, OrderStatus::Processing, None).unwrap();
    orders
        .update_status(id, OrderStatus::Shipped, Some("Left warehouse"))
        .unwrap();
    orders.update_status(id, OrderStatus::OutForDelivery, None).unwrap();
    orders.update_status(id, OrderStatus::Delivered, None).unwrap();

    let order = orders.order(id).unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    assert_eq!(order.status_history.len(), 5);
    assert_eq!(order.status_history.last().unwrap().status, order.status);
    for pair in order.status_history.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }

    // Placement + four transitions, with kinds derived per status.
    let kinds: Vec<NotificationKind> = orders
        .notifications_for_order(id)
        .iter()
        .map(|n| n.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::Payment,
            NotificationKind::Order,
            NotificationKind::Shipping,
            NotificationKind::Shipping,
            NotificationKind::Delivery,
        ]
    );

    // Delivered is terminal.
    assert_eq!(
        orders.update_status(id, OrderStatus::Processing, None),
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Processing,
        })
    );
}

#[tokio::test]
async fn cancellation_absorbs_and_admin_notes_stay_silent() {
    let mut orders = OrderService::new();
    let id = confirmed_order(&mut orders).await;

    orders.add_note(id, "Customer requested cancellation", true).unwrap();
    orders
        .update_status(id, OrderStatus::Cancelled, Some("Refund issued"))
        .unwrap();

    let order = orders.order(id).unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(order.notes.len(), 1);

    // Cancelled accepts nothing further, not even delivery.
    for next in OrderStatus::ALL {
        assert!(orders.update_status(id, next, None).is_err());
    }

    // One placement notification, one cancellation, none for the note.
    let kinds: Vec<NotificationKind> = orders
        .notifications_for_order(id)
        .iter()
        .map(|n| n.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![NotificationKind::Payment, NotificationKind::Cancellation]
    );
}

#[tokio::test]
async fn admin_list_reflects_lifecycle_queries() {
    let mut orders = OrderService::new();
    let first = confirmed_order(&mut orders).await;
    let second = confirmed_order(&mut orders).await;
    let third = confirmed_order(&mut orders).await;

    orders.update_status(second, OrderStatus::Shipped, None).unwrap();
    orders.update_status(third, OrderStatus::Delivered, None).unwrap();

    // Customer-side splits.
    let current: Vec<_> = orders.current_orders().iter().map(|o| o.id).collect();
    assert_eq!(current, vec![first, second]);
    assert_eq!(orders.delivered_orders().len(), 1);
    assert!(orders.cancelled_orders().is_empty());

    // Admin-side query: only shipped.
    let shipped = OrderQuery {
        status: Some(OrderStatus::Shipped),
        ..OrderQuery::default()
    }
    .run(&orders);
    assert_eq!(shipped.total_matches, 1);
    assert_eq!(shipped.orders[0].id, second);

    // Search by brand hits every order carrying the product.
    let by_brand = OrderQuery {
        search: Some("nike".to_string()),
        sort_field: SortField::Id,
        sort_direction: SortDirection::Asc,
        ..OrderQuery::default()
    }
    .run(&orders);
    assert_eq!(by_brand.total_matches, 3);
    assert_eq!(by_brand.orders[0].id, first);
}
