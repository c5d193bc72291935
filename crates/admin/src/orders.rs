//! Order list querying for the admin panel.
//!
//! A query narrows the order list by status, free-text search, and placement
//! date, then sorts and paginates. Searching matches the order id as well as
//! product names and brands inside the order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stride_core::{Order, OrderService, OrderStatus};

/// Orders shown per page.
const ORDERS_PER_PAGE: usize = 10;

/// Sortable columns of the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Last status change, newest first by default.
    #[default]
    Date,
    Id,
    Total,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Admin order-list query.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    /// Restrict to one status; `None` lists every order.
    pub status: Option<OrderStatus>,
    /// Case-insensitive match on order id, product name, or brand.
    pub search: Option<String>,
    /// Only orders placed at or after this instant.
    pub placed_from: Option<DateTime<Utc>>,
    /// Only orders placed at or before this instant.
    pub placed_to: Option<DateTime<Utc>>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1-based page number; zero is treated as the first page.
    pub page: usize,
}

/// One page of query results.
#[derive(Debug, Clone)]
pub struct OrderPage<'a> {
    pub orders: Vec<&'a Order>,
    /// 1-based page that was returned.
    pub page: usize,
    /// Total pages for this query, never zero.
    pub total_pages: usize,
    /// Matching orders across all pages.
    pub total_matches: usize,
}

impl OrderQuery {
    /// Run the query against the order store.
    #[must_use]
    pub fn run<'a>(&self, store: &'a OrderService) -> OrderPage<'a> {
        let mut matches: Vec<&Order> = store
            .orders()
            .iter()
            .filter(|order| self.matches(order))
            .collect();

        self.sort(&mut matches);

        let total_matches = matches.len();
        let total_pages = matches.len().div_ceil(ORDERS_PER_PAGE).max(1);
        let page = self.page.clamp(1, total_pages);
        let orders = matches
            .into_iter()
            .skip((page - 1) * ORDERS_PER_PAGE)
            .take(ORDERS_PER_PAGE)
            .collect();

        OrderPage {
            orders,
            page,
            total_pages,
            total_matches,
        }
    }

    fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }

        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !search_hit(order, &needle) {
                return false;
            }
        }

        // Orders with no history cannot be placed-date filtered; let them
        // through rather than hiding them.
        if let Some(placed) = order.placed_at() {
            if self.placed_from.is_some_and(|from| placed < from) {
                return false;
            }
            if self.placed_to.is_some_and(|to| placed > to) {
                return false;
            }
        }

        true
    }

    fn sort(&self, orders: &mut [&Order]) {
        match self.sort_field {
            SortField::Date => orders.sort_by_key(|order| order.last_update()),
            SortField::Id => orders.sort_by_key(|order| order.id),
            SortField::Total => orders.sort_by_key(|order| order.total_price),
        }
        if self.sort_direction == SortDirection::Desc {
            orders.reverse();
        }
    }
}

fn search_hit(order: &Order, needle: &str) -> bool {
    if order.id.to_string().contains(needle) {
        return true;
    }
    order.items.iter().any(|line| {
        line.product.name.to_lowercase().contains(needle)
            || line.product.brand.to_lowercase().contains(needle)
    })
}

/// The statuses present across all orders, in lifecycle order.
///
/// Drives the status filter chips: only statuses that actually occur are
/// offered.
#[must_use]
pub fn statuses_present(store: &OrderService) -> Vec<OrderStatus> {
    OrderStatus::ALL
        .into_iter()
        .filter(|status| store.orders().iter().any(|order| order.status == *status))
        .collect()
}
