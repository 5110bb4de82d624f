//! In-memory state container for the order dashboard.
//!
//! Owns the products, orders and shipments for one session and routes every
//! mutation through the domain operations: stock is reserved when an order is
//! placed, and a shipment is generated when an order is paid. Nothing is
//! persisted; the store resets with the process.

mod seed;
pub mod store;
pub mod summary;

pub use store::Store;
pub use summary::DashboardSummary;
