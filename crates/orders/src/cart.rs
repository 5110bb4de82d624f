use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderboard_catalog::{Product, ProductId};
use orderboard_core::{CustomerId, DomainError, DomainResult};

use crate::order::{Order, OrderId, OrderItem};

/// One line of a draft order: product reference plus desired quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Draft order under construction.
///
/// Every mutation is checked against the product's current available
/// quantity and leaves the cart untouched on rejection. At most one line
/// exists per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity currently carted for a product (0 when no line exists).
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Add one unit of `product`, creating a line or incrementing an
    /// existing one.
    pub fn add_product(&mut self, product: &Product) -> DomainResult<()> {
        let available = product.available_quantity();

        if available == 0 {
            return Err(DomainError::stock(format!(
                "'{}' has no available stock",
                product.sku()
            )));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id())
        {
            if line.quantity >= available {
                return Err(DomainError::stock(format!(
                    "only {} unit(s) of '{}' available",
                    available,
                    product.sku()
                )));
            }
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: product.id(),
                quantity: 1,
            });
        }

        Ok(())
    }

    /// Replace a line's quantity outright.
    ///
    /// A quantity of zero or less removes the line; a quantity above the
    /// product's available stock is rejected without mutating.
    pub fn set_quantity(&mut self, product: &Product, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            self.remove_product(product.id());
            return Ok(());
        }

        if quantity > product.available_quantity() {
            return Err(DomainError::stock(format!(
                "only {} unit(s) of '{}' available",
                product.available_quantity(),
                product.sku()
            )));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id())
        {
            line.quantity = quantity;
        } else {
            self.lines.push(CartLine {
                product_id: product.id(),
                quantity,
            });
        }

        Ok(())
    }

    pub fn remove_product(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }
}

/// Compose an order from a cart.
///
/// Pure function: looks up each line's product in `products`, re-checks
/// availability, snapshots sku/name/price into order items and sums the
/// total. Produces no order and touches nothing on rejection. Reserving the
/// stock is the caller's next step, one item at a time.
pub fn compose_order(
    order_id: OrderId,
    customer_id: CustomerId,
    customer_name: &str,
    customer_email: &str,
    cart: &Cart,
    products: &[Product],
    now: DateTime<Utc>,
) -> DomainResult<Order> {
    if customer_name.trim().is_empty() {
        return Err(DomainError::validation("customer name cannot be empty"));
    }
    if customer_email.trim().is_empty() {
        return Err(DomainError::validation("customer email cannot be empty"));
    }
    if cart.is_empty() {
        return Err(DomainError::validation("cart is empty"));
    }

    let mut items = Vec::with_capacity(cart.lines().len());
    for line in cart.lines() {
        let product = products
            .iter()
            .find(|p| p.id() == line.product_id)
            .ok_or(DomainError::NotFound)?;

        if line.quantity > product.available_quantity() {
            return Err(DomainError::stock(format!(
                "only {} unit(s) of '{}' available",
                product.available_quantity(),
                product.sku()
            )));
        }

        items.push(OrderItem::snapshot(product, line.quantity)?);
    }

    Order::new(
        order_id,
        customer_id,
        customer_name,
        customer_email,
        items,
        now,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderStatus;
    use orderboard_core::EntityId;

    fn product(sku: &str, unit_price: u64, stock: i64, reserved: i64) -> Product {
        Product::new(
            ProductId::new(EntityId::new()),
            sku,
            format!("{sku} product"),
            unit_price,
            stock,
            reserved,
        )
        .unwrap()
    }

    fn compose(cart: &Cart, name: &str, email: &str, products: &[Product]) -> DomainResult<Order> {
        compose_order(
            OrderId::new(EntityId::new()),
            CustomerId::new(),
            name,
            email,
            cart,
            products,
            Utc::now(),
        )
    }

    #[test]
    fn add_product_creates_a_line_at_quantity_one() {
        let product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();

        cart.add_product(&product).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(product.id()), 1);
    }

    #[test]
    fn add_product_increments_an_existing_line() {
        let product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();

        cart.add_product(&product).unwrap();
        cart.add_product(&product).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(product.id()), 2);
    }

    #[test]
    fn add_product_rejects_out_of_stock_without_mutating() {
        let product = product("DEF456", 19999, 10, 10);
        let mut cart = Cart::new();

        let err = cart.add_product(&product).unwrap_err();

        match err {
            DomainError::Stock(msg) => assert!(msg.contains("DEF456")),
            _ => panic!("Expected Stock error for zero availability"),
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn add_product_rejects_increment_beyond_availability() {
        let product = product("ABC123", 89999, 5, 3);
        let mut cart = Cart::new();

        cart.add_product(&product).unwrap();
        cart.add_product(&product).unwrap();
        let err = cart.add_product(&product).unwrap_err();

        match err {
            DomainError::Stock(msg) => assert!(msg.contains("2 unit(s)")),
            _ => panic!("Expected Stock error beyond availability"),
        }
        assert_eq!(cart.quantity_of(product.id()), 2);
    }

    #[test]
    fn set_quantity_replaces_the_line() {
        let product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();

        cart.set_quantity(&product, 5).unwrap();

        assert_eq!(cart.quantity_of(product.id()), 5);
    }

    #[test]
    fn set_quantity_zero_or_less_removes_the_line() {
        let product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();
        cart.add_product(&product).unwrap();

        cart.set_quantity(&product, 0).unwrap();
        assert!(cart.is_empty());

        cart.add_product(&product).unwrap();
        cart.set_quantity(&product, -2).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_above_availability_is_rejected_without_mutating() {
        let product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();
        cart.add_product(&product).unwrap();

        let err = cart.set_quantity(&product, 43).unwrap_err();

        match err {
            DomainError::Stock(_) => {}
            _ => panic!("Expected Stock error above availability"),
        }
        assert_eq!(cart.quantity_of(product.id()), 1);
    }

    #[test]
    fn compose_rejects_blank_customer_name() {
        let product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();
        cart.add_product(&product).unwrap();

        let err = compose(&cart, "   ", "ana@x.com", &[product]).unwrap_err();

        match err {
            DomainError::Validation(msg) => assert!(msg.contains("name")),
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn compose_rejects_blank_customer_email() {
        let product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();
        cart.add_product(&product).unwrap();

        let err = compose(&cart, "Ana", "", &[product]).unwrap_err();

        match err {
            DomainError::Validation(msg) => assert!(msg.contains("email")),
            _ => panic!("Expected Validation error for blank email"),
        }
    }

    #[test]
    fn compose_rejects_empty_cart() {
        let err = compose(&Cart::new(), "Ana", "ana@x.com", &[]).unwrap_err();

        match err {
            DomainError::Validation(msg) => assert!(msg.contains("cart")),
            _ => panic!("Expected Validation error for empty cart"),
        }
    }

    #[test]
    fn compose_rejects_unknown_product() {
        let known = product("ABC123", 89999, 50, 8);
        let phantom = product("GHO999", 100, 10, 0);
        let mut cart = Cart::new();
        cart.add_product(&phantom).unwrap();

        let err = compose(&cart, "Ana", "ana@x.com", &[known]).unwrap_err();

        match err {
            DomainError::NotFound => {}
            _ => panic!("Expected NotFound for unknown product"),
        }
    }

    #[test]
    fn compose_rechecks_availability_at_submission() {
        let mut product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();
        cart.set_quantity(&product, 5).unwrap();

        // Stock moved between carting and submission.
        product.reserve(40).unwrap();

        let err = compose(&cart, "Ana", "ana@x.com", &[product]).unwrap_err();
        match err {
            DomainError::Stock(_) => {}
            _ => panic!("Expected Stock error after availability dropped"),
        }
    }

    #[test]
    fn compose_snapshots_products_and_sums_totals() {
        let product = product("ABC123", 89999, 50, 8);
        let mut cart = Cart::new();
        cart.add_product(&product).unwrap();
        cart.add_product(&product).unwrap();

        let order = compose(&cart, "Ana", "ana@x.com", &[product.clone()]).unwrap();

        assert_eq!(order.customer_name(), "Ana");
        assert_eq!(order.customer_email(), "ana@x.com");
        assert_eq!(order.status(), OrderStatus::PendingPayment);
        assert_eq!(order.items().len(), 1);

        let item = &order.items()[0];
        assert_eq!(item.product_id, product.id());
        assert_eq!(item.quantity, 2);
        assert_eq!(item.total_price, 2 * 89999);
        assert_eq!(order.total_amount(), 2 * 89999);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a composed order's total always equals the sum of
            /// its item totals, and each item total is price × quantity.
            #[test]
            fn composed_totals_are_consistent(
                quantities in proptest::collection::vec(1i64..=10, 1..=4),
                prices in proptest::collection::vec(1u64..100_000, 4)
            ) {
                let products: Vec<Product> = quantities
                    .iter()
                    .enumerate()
                    .map(|(i, _)| {
                        product(&format!("SKU-{i}"), prices[i], 100, 0)
                    })
                    .collect();

                let mut cart = Cart::new();
                for (i, &quantity) in quantities.iter().enumerate() {
                    cart.set_quantity(&products[i], quantity).unwrap();
                }

                let order = compose(&cart, "Ana", "ana@x.com", &products).unwrap();

                let mut expected_total = 0u64;
                for (item, &quantity) in order.items().iter().zip(&quantities) {
                    prop_assert_eq!(item.quantity, quantity);
                    prop_assert_eq!(item.total_price, item.unit_price * quantity as u64);
                    expected_total += item.total_price;
                }
                prop_assert_eq!(order.total_amount(), expected_total);
            }
        }
    }
}
