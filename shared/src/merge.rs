//! Shallow JSON merge used by every PUT handler.

use serde_json::{Map, Value};

/// Merge `patch` over `base` one level deep.
///
/// Every top-level key in `patch` replaces the corresponding key in `base`,
/// including explicit `null` values. Nested objects (a customer's `address`,
/// an order's `items`) are replaced wholesale, never merged recursively.
/// Keys absent from `patch` keep their stored value.
pub fn shallow_merge(mut base: Map<String, Value>, patch: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in patch {
        base.insert(key, value);
    }
    base
}
