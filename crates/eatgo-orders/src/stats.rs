//! Restaurant dashboard figures, derived from a restaurant's orders.

use crate::model::{Order, OrderStatus};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DishSales {
    pub name: String,
    pub quantity: u64,
}

/// Orders still being worked on (`PLACED` through `IN_DELIVERY`).
pub fn active_orders_count(orders: &[Order]) -> usize {
    orders.iter().filter(|o| o.status.is_active()).count()
}

/// Total of delivered orders created at or after `since`.
pub fn revenue_since(orders: &[Order], since: DateTime<Utc>) -> Money {
    delivered(orders)
        .filter(|o| o.created_at >= since)
        .map(|o| o.total_price)
        .sum()
}

/// Best-selling dishes by delivered quantity; ties are broken by name.
pub fn top_dishes(orders: &[Order], limit: usize) -> Vec<DishSales> {
    let mut by_name: HashMap<&str, u64> = HashMap::new();
    for line in delivered(orders).flat_map(|o| &o.items) {
        *by_name.entry(line.dish_name.as_str()).or_default() += u64::from(line.quantity);
    }

    let mut sales: Vec<DishSales> = by_name
        .into_iter()
        .map(|(name, quantity)| DishSales {
            name: name.to_string(),
            quantity,
        })
        .collect();
    sales.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));
    sales.truncate(limit);
    sales
}

fn delivered(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders.iter().filter(|o| o.status == OrderStatus::Delivered)
}
