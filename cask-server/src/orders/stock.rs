//! Signed stock adjustments.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use shared::models::OrderItem;
use shared::util;

use crate::store::Document;

/// Net quantity per product across an order's items.
/// Lines naming the same product sum.
pub fn quantities(items: &[OrderItem]) -> BTreeMap<String, i64> {
    let mut totals = BTreeMap::new();
    for item in items {
        *totals.entry(item.product_id.clone()).or_insert(0) += item.quantity;
    }
    totals
}

/// Adjustments that move product stock from holding `old` quantities to
/// holding `new` ones: positive values return stock, negative consume it.
/// Products absent from a side count as zero; zero deltas are dropped.
pub fn adjustments_between(
    old: &BTreeMap<String, i64>,
    new: &BTreeMap<String, i64>,
) -> BTreeMap<String, i64> {
    let mut adjustments = BTreeMap::new();
    for product_id in old.keys().chain(new.keys()) {
        let held_before = old.get(product_id).copied().unwrap_or(0);
        let held_after = new.get(product_id).copied().unwrap_or(0);
        let delta = held_before - held_after;
        if delta != 0 {
            adjustments.insert(product_id.clone(), delta);
        }
    }
    adjustments
}

/// Apply adjustments to the product collection, clamping stock at zero.
///
/// An adjustment naming a product that no longer exists is skipped with a
/// warning; the rest of the batch still applies. Touched products get a
/// fresh `updated_at`.
pub fn apply(doc: &mut Document, adjustments: &BTreeMap<String, i64>) {
    for (product_id, adjustment) in adjustments {
        match doc.products.iter_mut().find(|p| &p.id == product_id) {
            Some(product) => {
                let before = product.stock_quantity;
                product.stock_quantity = (before + adjustment).max(0);
                product.updated_at = Some(util::now_iso());
                debug!(
                    %product_id,
                    adjustment,
                    before,
                    after = product.stock_quantity,
                    "stock adjusted"
                );
            }
            None => {
                warn!(%product_id, adjustment, "stock adjustment names a missing product, skipping");
            }
        }
    }
}
