//! Capability strings.
//!
//! User records carry materialized permission arrays. Three forms match:
//! the exact string, a `{resource}:*` wildcard, and the blanket `all`.
//! The `admin` role passes every check without consulting the array.

// ========== Catalog ==========
pub const PRODUCTS_READ: &str = "products:read";
pub const PRODUCTS_WRITE: &str = "products:write";

// ========== Accounts ==========
pub const CUSTOMERS_READ: &str = "customers:read";
pub const CUSTOMERS_WRITE: &str = "customers:write";
pub const USERS_READ: &str = "users:read";
pub const USERS_WRITE: &str = "users:write";

// ========== Orders ==========
pub const ORDERS_READ: &str = "orders:read";
pub const ORDERS_WRITE: &str = "orders:write";
/// Required to move an order out of `pending`.
pub const ORDERS_APPROVE: &str = "orders:approve";

// ========== Field Sales ==========
pub const VISITS_READ: &str = "visits:read";
pub const VISITS_WRITE: &str = "visits:write";
pub const PORTALS_READ: &str = "portals:read";
pub const PORTALS_WRITE: &str = "portals:write";

// ========== Audit ==========
pub const LOGS_READ: &str = "logs:read";
pub const LOGS_WRITE: &str = "logs:write";

/// Every capability the server knows about.
pub const ALL_PERMISSIONS: &[&str] = &[
    PRODUCTS_READ,
    PRODUCTS_WRITE,
    CUSTOMERS_READ,
    CUSTOMERS_WRITE,
    USERS_READ,
    USERS_WRITE,
    ORDERS_READ,
    ORDERS_WRITE,
    ORDERS_APPROVE,
    VISITS_READ,
    VISITS_WRITE,
    PORTALS_READ,
    PORTALS_WRITE,
    LOGS_READ,
    LOGS_WRITE,
];

/// Check one required capability against a grant list.
pub fn has_permission(granted: &[String], required: &str) -> bool {
    if granted.iter().any(|p| p == "all" || p == required) {
        return true;
    }
    match required.split_once(':') {
        Some((resource, _action)) => granted
            .iter()
            .any(|p| p.strip_suffix(":*").is_some_and(|prefix| prefix == resource)),
        None => false,
    }
}
