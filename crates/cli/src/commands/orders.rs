//! Order management commands.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use stride_admin::orders::{OrderQuery, statuses_present};
use stride_admin::persist::{load_orders, save_orders};
use stride_core::{Order, OrderId, OrderStatus};
use stride_storefront::checkout::mark_order_paid;
use stride_storefront::persist::{load_cart, save_cart};

use super::{CommandError, config};

/// List orders matching the filter flags.
///
/// # Errors
///
/// Returns [`CommandError`] for unreadable blobs or an unparseable status.
pub fn list(
    status: Option<&str>,
    search: Option<String>,
    from: Option<&str>,
    to: Option<&str>,
    page: usize,
) -> Result<(), CommandError> {
    let config = config()?;
    let store = load_orders(&config.order_store_path())?;

    let status = status
        .map(str::parse::<OrderStatus>)
        .transpose()
        .map_err(CommandError::InvalidArgument)?;

    let query = OrderQuery {
        status,
        search,
        placed_from: from.map(start_of_day).transpose()?,
        placed_to: to.map(end_of_day).transpose()?,
        page,
        ..OrderQuery::default()
    };
    let result = query.run(&store);

    if result.total_matches == 0 {
        println!("No orders found");
        return Ok(());
    }

    println!(
        "Page {}/{} ({} orders)",
        result.page, result.total_pages, result.total_matches
    );
    for order in &result.orders {
        println!(
            "#{}  {:<18} {:>3} item(s)  Ksh {}",
            order.id,
            order.status.label(),
            order.items.len(),
            order.total_price,
        );
    }

    let present = statuses_present(&store);
    if !present.is_empty() {
        let labels: Vec<&str> = present.iter().map(OrderStatus::label).collect();
        println!("Statuses in use: {}", labels.join(", "));
    }
    Ok(())
}

/// Show one order in full.
///
/// # Errors
///
/// Returns [`CommandError::Order`] when the order does not exist.
pub fn show(id: i64) -> Result<(), CommandError> {
    let config = config()?;
    let store = load_orders(&config.order_store_path())?;
    let id = OrderId::new(id);

    let order = store
        .order(id)
        .ok_or(stride_core::OrderError::NotFound(id))?;
    print_order(order);

    let notifications = store.notifications_for_order(id);
    if !notifications.is_empty() {
        println!("Notifications:");
        for notification in notifications {
            let read = if notification.read { "read" } else { "unread" };
            println!("  [{}] ({read}) {}", notification.kind, notification.message);
        }
    }
    Ok(())
}

/// Move an order to a new status.
///
/// # Errors
///
/// Returns [`CommandError`] for an unknown order, a terminal-state
/// transition, or an unparseable status.
pub fn set_status(id: i64, status: &str, note: Option<&str>) -> Result<(), CommandError> {
    let config = config()?;
    let mut store = load_orders(&config.order_store_path())?;

    let status: OrderStatus = status.parse().map_err(CommandError::InvalidArgument)?;
    store.update_status(OrderId::new(id), status, note)?;
    save_orders(&store, &config.order_store_path())?;

    println!("Order #{id} is now {status}");
    Ok(())
}

/// Attach an admin note.
///
/// # Errors
///
/// Returns [`CommandError::Order`] when the order does not exist.
pub fn add_note(id: i64, text: &str, customer_visible: bool) -> Result<(), CommandError> {
    let config = config()?;
    let mut store = load_orders(&config.order_store_path())?;

    store.add_note(OrderId::new(id), text, customer_visible)?;
    save_orders(&store, &config.order_store_path())?;

    let visibility = if customer_visible { "customer-visible" } else { "internal" };
    println!("Note added to order #{id} ({visibility})");
    Ok(())
}

/// Confirm payment on an order and clear the live cart.
///
/// # Errors
///
/// Returns [`CommandError::Order`] when the order does not exist or is
/// terminal.
pub fn mark_paid(id: i64) -> Result<(), CommandError> {
    let config = config()?;
    let mut store = load_orders(&config.order_store_path())?;
    let mut cart = load_cart(&config.cart_store_path())?;

    mark_order_paid(&mut store, &mut cart, OrderId::new(id))?;

    save_orders(&store, &config.order_store_path())?;
    save_cart(&cart, &config.cart_store_path())?;
    println!("Order #{id} marked as paid, cart cleared");
    Ok(())
}

/// Parse a `YYYY-MM-DD` date as the start of that UTC day.
fn start_of_day(date: &str) -> Result<DateTime<Utc>, CommandError> {
    let day = date
        .parse::<NaiveDate>()
        .map_err(|_| CommandError::InvalidArgument(format!("invalid date: {date}")))?;
    Ok(day.and_time(NaiveTime::MIN).and_utc())
}

/// Parse a `YYYY-MM-DD` date as the end of that UTC day (exclusive of the
/// next midnight).
fn end_of_day(date: &str) -> Result<DateTime<Utc>, CommandError> {
    let next = start_of_day(date)? + chrono::Duration::days(1);
    Ok(next - chrono::Duration::nanoseconds(1))
}

fn print_order(order: &Order) {
    println!("Order #{}  {}", order.id, order.status.label());
    println!("Customer: {} <{}>", order.customer.name, order.customer.email);
    if let Some(payment) = &order.payment {
        println!("Paid via {} (txn {})", payment.method, payment.payment_id);
    }
    println!(
        "Total Ksh {} (shipping Ksh {}, tax Ksh {})",
        order.total_price, order.shipping, order.tax
    );

    println!("Items:");
    for line in &order.items {
        println!(
            "  {} x {} (size {}) - Ksh {}",
            line.quantity,
            line.product.name,
            line.size,
            line.line_total(),
        );
    }

    println!("History:");
    for event in &order.status_history {
        let notes = event.notes.as_deref().unwrap_or("-");
        println!(
            "  {}  {:<18} {notes}",
            event.timestamp.format("%Y-%m-%d %H:%M:%S"),
            event.status.label(),
        );
    }

    if !order.notes.is_empty() {
        println!("Notes:");
        for note in &order.notes {
            let visibility = if note.customer_visible { "public" } else { "internal" };
            println!("  [{visibility}] {} - {}", note.author, note.text);
        }
    }
}
