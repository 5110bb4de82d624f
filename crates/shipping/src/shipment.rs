use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderboard_core::EntityId;
use orderboard_orders::OrderId;

/// Carrier label stamped on generated shipments (no real carrier integration).
pub const DEFAULT_CARRIER: &str = "Express Logistics";

/// Orders carry no address in this scope, so generated shipments get a
/// placeholder.
const PLACEHOLDER_ADDRESS: &str = "Customer address on file";

/// Days until the estimated delivery of a freshly generated shipment.
const DELIVERY_ESTIMATE_DAYS: i64 = 3;

/// Shipment identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(pub EntityId);

impl ShipmentId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Shipment status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    AwaitingPickup,
    InTransit,
    Delivered,
    Returned,
}

impl core::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ShipmentStatus::AwaitingPickup => "awaiting_pickup",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Returned => "returned",
        };
        f.write_str(name)
    }
}

/// A shipment tied to exactly one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    id: ShipmentId,
    order_id: OrderId,
    tracking_code: String,
    carrier: String,
    status: ShipmentStatus,
    shipping_address: String,
    created_at: DateTime<Utc>,
    estimated_delivery: Option<DateTime<Utc>>,
}

impl Shipment {
    /// Synthesize a shipment for a paid order.
    ///
    /// Fresh identity and tracking code, default carrier, awaiting pickup,
    /// estimated delivery three days out.
    pub fn for_order(order_id: OrderId, now: DateTime<Utc>) -> Self {
        Self {
            id: ShipmentId::new(EntityId::new()),
            order_id,
            tracking_code: generate_tracking_code(),
            carrier: DEFAULT_CARRIER.to_string(),
            status: ShipmentStatus::AwaitingPickup,
            shipping_address: PLACEHOLDER_ADDRESS.to_string(),
            created_at: now,
            estimated_delivery: Some(now + Duration::days(DELIVERY_ESTIMATE_DAYS)),
        }
    }

    pub fn id(&self) -> ShipmentId {
        self.id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Externally meaningful identifier, opaque here beyond uniqueness.
    pub fn tracking_code(&self) -> &str {
        &self.tracking_code
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn estimated_delivery(&self) -> Option<DateTime<Utc>> {
        self.estimated_delivery
    }

    /// Shipment progression is driven by the carrier side, outside this core.
    pub fn set_status(&mut self, status: ShipmentStatus) {
        self.status = status;
    }
}

/// Tracking codes keep the carrier's `TR…BR` shape; a UUIDv7 body makes them
/// unique.
fn generate_tracking_code() -> String {
    format!("TR{}BR", Uuid::now_v7().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_order_id() -> OrderId {
        OrderId::new(EntityId::new())
    }

    #[test]
    fn for_order_fills_generated_fields() {
        let order_id = test_order_id();
        let now = Utc::now();

        let shipment = Shipment::for_order(order_id, now);

        assert_eq!(shipment.order_id(), order_id);
        assert_eq!(shipment.carrier(), DEFAULT_CARRIER);
        assert_eq!(shipment.status(), ShipmentStatus::AwaitingPickup);
        assert_eq!(shipment.created_at(), now);
        assert_eq!(
            shipment.estimated_delivery(),
            Some(now + Duration::days(3))
        );
        assert!(!shipment.shipping_address().is_empty());
    }

    #[test]
    fn tracking_codes_are_unique_and_keep_the_carrier_shape() {
        let now = Utc::now();
        let a = Shipment::for_order(test_order_id(), now);
        let b = Shipment::for_order(test_order_id(), now);

        assert_ne!(a.tracking_code(), b.tracking_code());
        for shipment in [&a, &b] {
            assert!(shipment.tracking_code().starts_with("TR"));
            assert!(shipment.tracking_code().ends_with("BR"));
        }
    }

    #[test]
    fn status_progression_is_settable_externally() {
        let mut shipment = Shipment::for_order(test_order_id(), Utc::now());

        shipment.set_status(ShipmentStatus::InTransit);

        assert_eq!(shipment.status(), ShipmentStatus::InTransit);
    }

    #[test]
    fn statuses_serialize_to_snake_case_names() {
        assert_eq!(
            serde_json::to_string(&ShipmentStatus::AwaitingPickup).unwrap(),
            "\"awaiting_pickup\""
        );
        assert_eq!(
            serde_json::to_string(&ShipmentStatus::InTransit).unwrap(),
            "\"in_transit\""
        );
    }
}
