//! Orders domain module: cart building, order composition and the status
//! lifecycle.
//!
//! This crate contains business rules for customer orders, implemented purely
//! as deterministic domain logic (no IO, no storage). Stock counters live in
//! the catalog crate; this crate only reads them.

pub mod cart;
pub mod order;

pub use cart::{Cart, CartLine, compose_order};
pub use order::{Order, OrderId, OrderItem, OrderItemId, OrderStatus};
