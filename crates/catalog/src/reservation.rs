use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderboard_core::EntityId;

use crate::product::ProductId;

/// Stock reservation identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub EntityId);

impl ReservationId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Time-bounded hold of stock units for a specific order.
///
/// Data shape only: nothing schedules or enforces expiry yet. The order
/// reference stays a raw [`EntityId`] because this crate sits below the
/// orders crate in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReservation {
    pub id: ReservationId,
    pub product_id: ProductId,
    pub order_id: EntityId,
    pub quantity: i64,
    pub reserved_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
