use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderboard_catalog::{Product, ProductId};
use orderboard_core::{CustomerId, DomainError, DomainResult, EntityId};

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub EntityId);

impl OrderItemId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order status lifecycle.
///
/// Forward path: pending_payment → paid → processing → shipped → delivered.
/// Cancellation is reachable from any non-terminal state; delivered and
/// cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Transition table for the order lifecycle.
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        use OrderStatus::*;

        match (self, target) {
            (PendingPayment, Paid)
            | (Paid, Processing)
            | (Processing, Shipped)
            | (Shipped, Delivered) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            OrderStatus::PendingPayment => "pending_payment",
            OrderStatus::Paid => "paid",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Order line snapshotting the product at composition time.
///
/// The sku, name and price are copies, not live references: later catalog
/// changes must not rewrite historical orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub sku: String,
    pub product_name: String,
    pub quantity: i64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub total_price: u64,
}

impl OrderItem {
    /// Snapshot a product into an order line.
    pub fn snapshot(product: &Product, quantity: i64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        Ok(Self {
            id: OrderItemId::new(EntityId::new()),
            product_id: product.id(),
            sku: product.sku().to_string(),
            product_name: product.name().to_string(),
            quantity,
            unit_price: product.unit_price(),
            total_price: product.unit_price() * quantity as u64,
        })
    }
}

/// A customer order.
///
/// Items are immutable once the order exists; only the status and
/// `updated_at` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    customer_name: String,
    customer_email: String,
    items: Vec<OrderItem>,
    /// Sum of item totals, in smallest currency unit.
    total_amount: u64,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    payment_method: Option<String>,
}

impl Order {
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        customer_name: &str,
        customer_email: &str,
        items: Vec<OrderItem>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if customer_email.trim().is_empty() {
            return Err(DomainError::validation("customer email cannot be empty"));
        }
        if items.is_empty() {
            return Err(DomainError::validation(
                "order must contain at least one item",
            ));
        }

        let total_amount = items.iter().map(|item| item.total_price).sum();

        Ok(Self {
            id,
            customer_id,
            customer_name: customer_name.trim().to_string(),
            customer_email: customer_email.trim().to_string(),
            items,
            total_amount,
            status: OrderStatus::PendingPayment,
            created_at: now,
            updated_at: now,
            payment_method: None,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of item totals, in smallest currency unit.
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn set_payment_method(&mut self, method: impl Into<String>) {
        self.payment_method = Some(method.into());
    }

    /// Move the order to `target`, stamping `updated_at`.
    ///
    /// Rejects targets the transition table does not allow from the current
    /// status; the order is unchanged on rejection.
    pub fn transition(&mut self, target: OrderStatus, now: DateTime<Utc>) -> DomainResult<()> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::invariant(format!(
                "cannot transition order from {} to {}",
                self.status, target
            )));
        }

        self.status = target;
        self.updated_at = now;
        Ok(())
    }
}
