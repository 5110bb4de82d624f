use chrono::Utc;

use orderboard_catalog::{Product, ProductId};
use orderboard_core::{CustomerId, DomainError, DomainResult, EntityId};
use orderboard_orders::{Cart, Order, OrderId, OrderStatus, compose_order};
use orderboard_shipping::{Shipment, ShipmentId};

use crate::seed;

/// Single source of truth for one dashboard session.
///
/// Plain owned value: callers hold it and mutate it through `&mut self`
/// operations. One actor, no locking. Orders are kept newest-first, the way
/// a dashboard lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    products: Vec<Product>,
    orders: Vec<Order>,
    shipments: Vec<Shipment>,
}

impl Store {
    /// Empty store, no catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the sample dataset.
    pub fn seeded() -> DomainResult<Self> {
        seed::sample_store()
    }

    pub(crate) fn from_parts(
        products: Vec<Product>,
        orders: Vec<Order>,
        shipments: Vec<Shipment>,
    ) -> Self {
        Self {
            products,
            orders,
            shipments,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn product(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == product_id)
    }

    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == order_id)
    }

    pub fn shipments_for_order(&self, order_id: OrderId) -> impl Iterator<Item = &Shipment> {
        self.shipments
            .iter()
            .filter(move |s| s.order_id() == order_id)
    }

    /// Compose and record a new order from a cart, then reserve stock for
    /// each of its items.
    ///
    /// Composition validates the customer fields, the cart and every line's
    /// availability up front, so a rejection leaves the store untouched.
    pub fn place_order(
        &mut self,
        cart: &Cart,
        customer_name: &str,
        customer_email: &str,
    ) -> DomainResult<OrderId> {
        let order = compose_order(
            OrderId::new(EntityId::new()),
            CustomerId::new(),
            customer_name,
            customer_email,
            cart,
            &self.products,
            Utc::now(),
        )?;

        let order_id = order.id();
        let reservations: Vec<(ProductId, i64)> = order
            .items()
            .iter()
            .map(|item| (item.product_id, item.quantity))
            .collect();

        tracing::info!(
            "Placed order {} ({} line(s), {} cents total)",
            order_id,
            order.items().len(),
            order.total_amount()
        );
        self.orders.insert(0, order);

        for (product_id, quantity) in reservations {
            self.reserve_stock(product_id, quantity)?;
        }

        Ok(order_id)
    }

    /// Commit stock to an order: the direct stock-operator path.
    pub fn reserve_stock(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == product_id)
            .ok_or(DomainError::NotFound)?;

        product.reserve(quantity)?;

        tracing::info!(
            "Reserved {} unit(s) of '{}' ({} still available)",
            quantity,
            product.sku(),
            product.available_quantity()
        );
        Ok(())
    }

    /// Move an order along its lifecycle.
    ///
    /// A successful transition into `paid` generates the order's shipment.
    /// The strict transition table means `paid` is reachable exactly once,
    /// so an order never accumulates duplicate shipments.
    pub fn update_order_status(
        &mut self,
        order_id: OrderId,
        target: OrderStatus,
    ) -> DomainResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id() == order_id)
            .ok_or(DomainError::NotFound)?;

        order.transition(target, Utc::now())?;
        tracing::info!("Order {} moved to {}", order_id, target);

        if target == OrderStatus::Paid {
            self.create_shipment(order_id)?;
        }

        Ok(())
    }

    /// Synthesize a shipment for an existing order.
    pub fn create_shipment(&mut self, order_id: OrderId) -> DomainResult<ShipmentId> {
        if self.order(order_id).is_none() {
            return Err(DomainError::NotFound);
        }

        let shipment = Shipment::for_order(order_id, Utc::now());
        let shipment_id = shipment.id();

        tracing::info!(
            "Created shipment {} for order {} (tracking {})",
            shipment_id,
            order_id,
            shipment.tracking_code()
        );
        self.shipments.push(shipment);

        Ok(shipment_id)
    }
}
