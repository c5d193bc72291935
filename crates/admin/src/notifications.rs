//! Notification panel read-model.
//!
//! Pure views over the notification feed: per-kind tab counts, kind
//! filtering, and the relative timestamps the panel displays.

use chrono::{DateTime, Utc};

use stride_core::{Notification, NotificationKind};

/// Count per kind, in display order. Kinds with no notifications are
/// included with a zero count; the panel decides which tabs to show.
#[must_use]
pub fn kind_counts(notifications: &[Notification]) -> Vec<(NotificationKind, usize)> {
    NotificationKind::ALL
        .into_iter()
        .map(|kind| {
            let count = notifications
                .iter()
                .filter(|notification| notification.kind == kind)
                .count();
            (kind, count)
        })
        .collect()
}

/// Notifications of one kind, or all of them.
#[must_use]
pub fn filter_by_kind(
    notifications: &[Notification],
    kind: Option<NotificationKind>,
) -> Vec<&Notification> {
    notifications
        .iter()
        .filter(|notification| kind.is_none_or(|kind| notification.kind == kind))
        .collect()
}

/// Format a timestamp relative to `now`: "Just now", "5m ago", "3h ago",
/// "2d ago", then the calendar date.
#[must_use]
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }

    let days = hours / 24;
    if days < 7 {
        return format!("{days}d ago");
    }

    timestamp.format("%Y-%m-%d").to_string()
}
