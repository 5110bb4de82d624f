use serde::{Deserialize, Serialize};

use orderboard_orders::OrderStatus;

use crate::store::Store;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_orders: usize,
    /// Sum of all orders' totals, in smallest currency unit.
    pub total_revenue: u64,
    pub pending_payment_orders: usize,
    pub low_stock_products: usize,
}

impl Store {
    /// Compute the dashboard headline numbers from current state.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_orders: self.orders().len(),
            total_revenue: self.orders().iter().map(|o| o.total_amount()).sum(),
            pending_payment_orders: self
                .orders()
                .iter()
                .filter(|o| o.status() == OrderStatus::PendingPayment)
                .count(),
            low_stock_products: self
                .products()
                .iter()
                .filter(|p| p.is_low_stock())
                .count(),
        }
    }
}
