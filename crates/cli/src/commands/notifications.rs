//! Notification management commands.

use chrono::Utc;

use stride_admin::notifications::{kind_counts, relative_time};
use stride_admin::persist::{load_orders, save_orders};
use stride_core::NotificationId;

use super::{CommandError, config};

/// List notifications, optionally only unread ones.
///
/// # Errors
///
/// Returns [`CommandError`] when the order blob cannot be read.
pub fn list(unread_only: bool) -> Result<(), CommandError> {
    let config = config()?;
    let store = load_orders(&config.order_store_path())?;
    let now = Utc::now();

    let notifications: Vec<_> = if unread_only {
        store.unread_notifications()
    } else {
        store.notifications().iter().collect()
    };

    if notifications.is_empty() {
        println!("No notifications");
        return Ok(());
    }

    for notification in &notifications {
        let read = if notification.read { " " } else { "*" };
        println!(
            "{read} {}  [{:<12}] order #{}  {}  ({})",
            notification.id,
            notification.kind.label(),
            notification.order_id,
            notification.message,
            relative_time(notification.timestamp, now),
        );
    }

    let counts: Vec<String> = kind_counts(store.notifications())
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect();
    if !counts.is_empty() {
        println!("{}", counts.join(", "));
    }
    Ok(())
}

/// Mark one notification as read.
///
/// # Errors
///
/// Returns [`CommandError`] for an invalid or unknown id.
pub fn mark_read(id: &str) -> Result<(), CommandError> {
    let config = config()?;
    let mut store = load_orders(&config.order_store_path())?;

    store.mark_notification_read(parse_id(id)?)?;
    save_orders(&store, &config.order_store_path())?;
    println!("Notification marked as read");
    Ok(())
}

/// Mark every notification as read.
///
/// # Errors
///
/// Returns [`CommandError`] when the blob cannot be read or written.
pub fn mark_all_read() -> Result<(), CommandError> {
    let config = config()?;
    let mut store = load_orders(&config.order_store_path())?;

    store.mark_all_notifications_read();
    save_orders(&store, &config.order_store_path())?;
    println!("All notifications marked as read");
    Ok(())
}

/// Remove one notification.
///
/// # Errors
///
/// Returns [`CommandError`] for an invalid or unknown id.
pub fn remove(id: &str) -> Result<(), CommandError> {
    let config = config()?;
    let mut store = load_orders(&config.order_store_path())?;

    store.remove_notification(parse_id(id)?)?;
    save_orders(&store, &config.order_store_path())?;
    println!("Notification removed");
    Ok(())
}

/// Remove every notification.
///
/// # Errors
///
/// Returns [`CommandError`] when the blob cannot be read or written.
pub fn clear() -> Result<(), CommandError> {
    let config = config()?;
    let mut store = load_orders(&config.order_store_path())?;

    store.clear_notifications();
    save_orders(&store, &config.order_store_path())?;
    println!("Notifications cleared");
    Ok(())
}

fn parse_id(id: &str) -> Result<NotificationId, CommandError> {
    id.parse()
        .map_err(|_| CommandError::InvalidArgument(format!("invalid notification id: {id}")))
}
