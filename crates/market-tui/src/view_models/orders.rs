//! View model for the order history page

use super::format_price;
use crate::state::{AppState, FetchStatus};
use chrono::{DateTime, NaiveDate};
use market_client::OrderLine;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRow {
    pub name: String,
    /// `$12.50 x 2 = $25.00`
    pub price_breakdown: String,
    /// `Sold by potter`
    pub seller: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub title: String,
    pub date: String,
    pub summary: String,
    pub lines: Vec<OrderLineRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrdersViewModel {
    Loading,
    Failed(String),
    Empty,
    Loaded(Vec<OrderRow>),
}

/// Render a server date as `Mar 05 2024`
///
/// The server sends RFC 2822 (`Tue, 05 Mar 2024 10:00:00 GMT`); RFC 3339 and
/// plain dates are accepted too. Anything else is shown as sent.
pub fn format_date(raw: &str) -> String {
    const FORMAT: &str = "%b %d %Y";
    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return date.format(FORMAT).to_string();
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format(FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(FORMAT).to_string();
    }
    raw.to_string()
}

impl OrdersViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let orders = match &state.orders.status {
            FetchStatus::Loaded(orders) => orders,
            FetchStatus::Errored(message) => return Self::Failed(message.clone()),
            FetchStatus::Loading | FetchStatus::Unloaded => return Self::Loading,
        };

        if orders.is_empty() {
            return Self::Empty;
        }

        let line_count: usize = orders.iter().map(|order| order.items.len()).sum();
        let selected = state.orders_page.selected_line.min(line_count.saturating_sub(1));
        let mut index = 0;

        let rows = orders
            .iter()
            .map(|order| OrderRow {
                title: format!("Order #{}", order.id),
                date: format_date(&order.order_date),
                summary: format!(
                    "{} {} · {}",
                    order.total_items,
                    if order.total_items == 1 { "item" } else { "items" },
                    format_price(order.total_price)
                ),
                lines: order
                    .items
                    .iter()
                    .map(|line| {
                        let row = OrderLineRow {
                            name: line.name.clone(),
                            price_breakdown: format!(
                                "{} x {} = {}",
                                format_price(line.purchase_price),
                                line.quantity,
                                format_price(line.line_total())
                            ),
                            seller: format!("Sold by {}", line.shop_name),
                            selected: index == selected,
                        };
                        index += 1;
                        row
                    })
                    .collect(),
            })
            .collect();

        Self::Loaded(rows)
    }
}

/// Order line under the cursor, if the orders are loaded and not empty
pub fn selected_line(state: &AppState) -> Option<&OrderLine> {
    let mut lines = state.orders.data()?.iter().flat_map(|order| order.items.iter());
    let count = lines.clone().count();
    lines.nth(state.orders_page.selected_line.min(count.checked_sub(1)?))
}
