//! # Order Types
//!
//! An order pairs one pizza with one payment method. Placing it prints the
//! receipt line, confirms payment and appends a snapshot to the journal.

use crate::console::Console;
use crate::error::PizzeriaResult;
use crate::journal::OrderJournal;
use crate::money::Price;
use crate::payment::PaymentMethod;
use crate::pizza::Pizza;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted snapshot of an ordered pizza
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub name: String,
    pub base_price: Price,
    pub toppings: Vec<String>,
    pub price: Price,
}

impl From<&Pizza> for OrderRecord {
    fn from(pizza: &Pizza) -> Self {
        Self {
            name: pizza.name.clone(),
            base_price: pizza.base_price,
            toppings: pizza.toppings.clone(),
            price: pizza.price(),
        }
    }
}

/// A customer order
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique order ID (generated, used for logging only)
    pub id: String,

    pub pizza: Pizza,

    pub payment_method: PaymentMethod,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order with generated ID
    pub fn new(pizza: Pizza, payment_method: PaymentMethod) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pizza,
            payment_method,
            created_at: Utc::now(),
        }
    }

    /// Final price of the order
    pub fn total(&self) -> Price {
        self.pizza.price()
    }

    /// Snapshot written to the journal
    pub fn record(&self) -> OrderRecord {
        OrderRecord::from(&self.pizza)
    }

    /// Print the receipt, take payment and persist the order
    pub fn place_order(
        &self,
        console: &mut dyn Console,
        journal: &OrderJournal,
    ) -> PizzeriaResult<()> {
        console.write_line(&format!("Заказана пицца: {}", self.pizza))?;
        self.payment_method.pay(self.total(), console)?;
        journal.append(&self.record())?;

        tracing::info!(
            order_id = %self.id,
            pizza = %self.pizza.name,
            toppings = self.pizza.toppings.len(),
            price = %self.total(),
            payment = self.payment_method.as_str(),
            created_at = %self.created_at.to_rfc3339(),
            "order placed"
        );
        Ok(())
    }
}
