//! Shipments: records synthesized for paid orders.
//!
//! Carrier handoff is simulated; tracking codes and delivery estimates are
//! generated locally.

pub mod shipment;

pub use shipment::{DEFAULT_CARRIER, Shipment, ShipmentId, ShipmentStatus};
