//! Order lifecycle and its inventory side effects.
//!
//! An order in any stock-consuming status (draft, pending, approved,
//! shipped, delivered) holds the quantities its items name against product
//! stock. Cancelled and rejected orders hold nothing. Every order write
//! reduces to a set of signed per-product adjustments computed here and
//! applied inside the same store cycle that persists the order itself.

pub mod lifecycle;
pub mod stock;
