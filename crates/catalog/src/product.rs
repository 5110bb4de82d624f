use serde::{Deserialize, Serialize};

use orderboard_core::{DomainError, DomainResult, EntityId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Catalog entry with live stock counters.
///
/// Invariant: `0 <= reserved_quantity <= stock_quantity`. The available
/// quantity is derived (`stock - reserved`) so it cannot drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
    stock_quantity: i64,
    reserved_quantity: i64,
}

impl Product {
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: u64,
        stock_quantity: i64,
        reserved_quantity: i64,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        let name = name.into();

        if sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if stock_quantity < 0 {
            return Err(DomainError::validation("stock quantity cannot be negative"));
        }
        if reserved_quantity < 0 {
            return Err(DomainError::validation(
                "reserved quantity cannot be negative",
            ));
        }
        if reserved_quantity > stock_quantity {
            return Err(DomainError::invariant(
                "reserved quantity cannot exceed stock quantity",
            ));
        }

        Ok(Self {
            id,
            sku,
            name,
            unit_price,
            stock_quantity,
            reserved_quantity,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in smallest currency unit (e.g., cents).
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Total units owned.
    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    /// Units committed to unfulfilled orders.
    pub fn reserved_quantity(&self) -> i64 {
        self.reserved_quantity
    }

    /// Units sellable now.
    pub fn available_quantity(&self) -> i64 {
        self.stock_quantity - self.reserved_quantity
    }

    pub fn in_stock(&self) -> bool {
        self.available_quantity() > 0
    }

    /// Less than 20% of owned stock is still sellable.
    pub fn is_low_stock(&self) -> bool {
        self.available_quantity() * 5 < self.stock_quantity
    }

    /// Commit `quantity` units to an order.
    ///
    /// Increases the reserved quantity; the available quantity drops by the
    /// same amount through derivation. Callers are expected to have checked
    /// availability already (the cart does); a request that would overdraw the
    /// stock is a caller error and leaves the product unchanged.
    pub fn reserve(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation("reserved quantity must be positive"));
        }

        if self.reserved_quantity + quantity > self.stock_quantity {
            return Err(DomainError::invariant(format!(
                "reserving {} unit(s) of '{}' exceeds stock on hand",
                quantity, self.sku
            )));
        }

        self.reserved_quantity += quantity;
        Ok(())
    }
}
