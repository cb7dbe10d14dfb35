//! Stock effects of each order operation.

use std::collections::BTreeMap;

use shared::models::Order;

use super::stock;

fn nothing() -> BTreeMap<String, i64> {
    BTreeMap::new()
}

fn held_by(order: &Order) -> BTreeMap<String, i64> {
    if order.status.consumes_stock() {
        stock::quantities(&order.items)
    } else {
        nothing()
    }
}

/// Effects of creating `order`: a consuming order depletes its quantities,
/// an order born cancelled or rejected touches nothing.
pub fn creation(order: &Order) -> BTreeMap<String, i64> {
    stock::adjustments_between(&nothing(), &held_by(order))
}

/// Effects of replacing `before` with `after` in one PUT.
///
/// This covers every combination at once: quantity edits while consuming,
/// leaving the consuming group (restore), entering it (deplete), and edits
/// that change items and status together.
pub fn transition(before: &Order, after: &Order) -> BTreeMap<String, i64> {
    stock::adjustments_between(&held_by(before), &held_by(after))
}

/// Effects of deleting `order`: whatever it held comes back.
pub fn deletion(order: &Order) -> BTreeMap<String, i64> {
    stock::adjustments_between(&held_by(order), &nothing())
}
