//! # Payment Methods
//!
//! The customer pays either in cash or by card. Both methods only confirm the
//! amount on the console; nothing is charged anywhere.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            PaymentMethod (enum)          │
//! │  ├── pay(amount, console)                │
//! │  └── label()                             │
//! └──────────────────────────────────────────┘
//!                      ▲
//!           ┌──────────┴──────────┐
//!   ┌───────┴───────┐     ┌───────┴───────┐
//!   │     Cash      │     │     Card      │
//!   └───────────────┘     └───────────────┘
//! ```

use crate::console::Console;
use crate::error::PizzeriaResult;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// How an order is paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    /// All methods in menu order
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Card];

    /// Menu entry text (e.g. "Наличными")
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Наличными",
            PaymentMethod::Card => "Картой",
        }
    }

    /// Identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
        }
    }

    /// Resolve a payment menu answer ("1" or "2")
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(PaymentMethod::Cash),
            "2" => Some(PaymentMethod::Card),
            _ => None,
        }
    }

    /// Confirm payment of `amount` on the console
    pub fn pay(&self, amount: Price, console: &mut dyn Console) -> PizzeriaResult<()> {
        let confirmation = match self {
            PaymentMethod::Cash => "Оплата наличными: ",
            PaymentMethod::Card => "Оплата картой: ",
        };
        tracing::debug!(method = self.as_str(), amount = %amount, "payment confirmed");
        console.write_line(&format!("{} {}", confirmation, amount.plain()))
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_from_choice() {
        assert_eq!(PaymentMethod::from_choice("1"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::from_choice("2"), Some(PaymentMethod::Card));
        assert_eq!(PaymentMethod::from_choice("3"), None);
        assert_eq!(PaymentMethod::from_choice("abc"), None);
        assert_eq!(PaymentMethod::from_choice(" 1"), None);
    }

    #[test]
    fn test_pay_prints_method_and_amount() {
        let mut console = ScriptedConsole::default();

        PaymentMethod::Cash.pay(Price::new(8.49), &mut console).unwrap();
        PaymentMethod::Card.pay(Price::new(5.0), &mut console).unwrap();

        assert_eq!(
            console.transcript(),
            ["Оплата наличными:  8.49", "Оплата картой:  5.0"]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(PaymentMethod::ALL.len(), 2);
        assert_eq!(PaymentMethod::Cash.to_string(), "Наличными");
        assert_eq!(PaymentMethod::Card.as_str(), "card");
    }
}
