//! Entity models, one module per collection.
//!
//! | Module | Collection |
//! |--------|------------|
//! | `product` | `products` |
//! | `customer` | `customers` |
//! | `order` | `orders` |
//! | `user` | `users` |
//! | `visit` | `visits` |
//! | `portal` | `customer_portals` |
//! | `system_log` | `system_logs` |
//!
//! All entities share the same conventions: a string `id`, optional
//! `created_at` / `updated_at` RFC 3339 timestamps, and optional fields for
//! everything a client is not required to send. Fields that are `None`
//! are omitted from serialized output, so stored documents and API
//! responses only carry the keys a client actually set.

pub mod customer;
pub mod location;
pub mod order;
pub mod portal;
pub mod product;
pub mod status;
pub mod system_log;
pub mod user;
pub mod visit;

pub use customer::{Address, Customer};
pub use location::Location;
pub use order::{DeliveryConfirmation, Order, OrderItem, OrderStatus};
pub use portal::CustomerPortal;
pub use product::Product;
pub use status::Status;
pub use system_log::SystemLog;
pub use user::User;
pub use visit::Visit;
