//! # Sales Statistics
//!
//! Running totals kept by the pizzeria for the lifetime of the session.
//! No cost basis is modelled, so profit grows exactly like revenue.

use crate::money::Price;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalesStats {
    pub order_count: usize,
    pub total_sales: Price,
    pub total_profit: Price,
}

impl SalesStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one sold order
    pub fn record_sale(&mut self, price: Price) {
        self.order_count += 1;
        self.total_sales += price;
        self.total_profit += price;
    }

    /// Lines shown by the statistics screen
    pub fn report(&self) -> [String; 3] {
        [
            format!("Количество проданных пицц: {}", self.order_count),
            format!("Выручка: {}", self.total_sales),
            format!("Прибыль: {}", self.total_profit),
        ]
    }
}
