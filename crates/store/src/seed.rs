//! Sample dataset loaded at startup.
//!
//! Timestamps are laid out relative to "now" so a freshly seeded session
//! looks like a dashboard with some recent history.

use chrono::{Duration, Utc};

use orderboard_catalog::{Product, ProductId};
use orderboard_core::{CustomerId, DomainResult, EntityId};
use orderboard_orders::{Order, OrderId, OrderItem, OrderStatus};
use orderboard_shipping::{Shipment, ShipmentStatus};

use crate::store::Store;

pub(crate) fn sample_store() -> DomainResult<Store> {
    let now = Utc::now();

    let smartphone = Product::new(
        ProductId::new(EntityId::new()),
        "ABC123",
        "Smartphone Galaxy Pro",
        89999,
        50,
        8,
    )?;
    let laptop = Product::new(
        ProductId::new(EntityId::new()),
        "XYZ999",
        "Laptop UltraBook",
        129999,
        25,
        3,
    )?;
    let headphones = Product::new(
        ProductId::new(EntityId::new()),
        "DEF456",
        "Headphones Wireless",
        19999,
        100,
        15,
    )?;

    // Paid yesterday; its shipment is still waiting for the carrier.
    let mut paid_order = Order::new(
        OrderId::new(EntityId::new()),
        CustomerId::new(),
        "Joana Silva",
        "joana@example.com",
        vec![OrderItem::snapshot(&smartphone, 2)?],
        now - Duration::days(1),
    )?;
    paid_order.transition(OrderStatus::Paid, now - Duration::hours(20))?;
    paid_order.set_payment_method("credit_card");

    let pending_order = Order::new(
        OrderId::new(EntityId::new()),
        CustomerId::new(),
        "Maria Santos",
        "maria@example.com",
        vec![OrderItem::snapshot(&laptop, 1)?],
        now - Duration::hours(6),
    )?;

    // Shipped two days after payment; its shipment is on the road.
    let mut shipped_order = Order::new(
        OrderId::new(EntityId::new()),
        CustomerId::new(),
        "Carlos Oliveira",
        "carlos@example.com",
        vec![OrderItem::snapshot(&headphones, 3)?],
        now - Duration::days(2),
    )?;
    shipped_order.transition(OrderStatus::Paid, now - Duration::days(2) + Duration::hours(1))?;
    shipped_order.set_payment_method("bank_transfer");
    shipped_order.transition(OrderStatus::Processing, now - Duration::days(2) + Duration::hours(3))?;
    shipped_order.transition(OrderStatus::Shipped, now - Duration::days(1))?;

    let awaiting_pickup = Shipment::for_order(paid_order.id(), now - Duration::hours(19));
    let mut in_transit = Shipment::for_order(shipped_order.id(), now - Duration::days(1));
    in_transit.set_status(ShipmentStatus::InTransit);

    Ok(Store::from_parts(
        vec![smartphone, laptop, headphones],
        // Newest first, the way the dashboard lists them.
        vec![pending_order, paid_order, shipped_order],
        vec![awaiting_pickup, in_transit],
    ))
}
