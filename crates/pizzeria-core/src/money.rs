//! # Money
//!
//! Prices are held in cents so that adding toppings never drifts.
//! On the wire (order journal, menu TOML) a price is a plain decimal number.

use crate::error::{PizzeriaError, PizzeriaResult};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Surcharge for every topping added to a pizza
pub const TOPPING_PRICE: Price = Price::from_cents(50);

/// Largest price accepted from the console or a menu file (1 000 000.00)
pub const MAX_PRICE: Price = Price::from_cents(100_000_000);

/// Price with amount in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    /// Amount in cents
    pub amount: i64,
}

impl Price {
    /// Zero price
    pub const ZERO: Price = Price::from_cents(0);

    /// Create a new price from a decimal amount, rounded to the nearest cent
    pub fn new(amount: f64) -> Self {
        Self {
            amount: (amount * 100.0).round() as i64,
        }
    }

    /// Create a price from cents
    pub const fn from_cents(amount: i64) -> Self {
        Self { amount }
    }

    /// Exact price for a decimal amount.
    ///
    /// `None` unless the amount is finite, between zero and [`MAX_PRICE`],
    /// and has no more than two fractional digits.
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 || amount > MAX_PRICE.as_decimal() {
            return None;
        }
        let cents = amount * 100.0;
        if (cents - cents.round()).abs() > 1e-6 {
            return None;
        }
        Some(Self::from_cents(cents.round() as i64))
    }

    /// Parse a price typed at the console.
    ///
    /// Accepts anything `f64` parses after trimming whitespace, as long as
    /// [`Price::from_decimal`] takes it.
    pub fn parse(input: &str) -> PizzeriaResult<Self> {
        input
            .trim()
            .parse()
            .ok()
            .and_then(Self::from_decimal)
            .ok_or_else(|| PizzeriaError::InvalidPrice {
                input: input.to_string(),
            })
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.amount as f64 / 100.0
    }

    /// Shortest decimal form that keeps at least one fractional digit
    /// (`5.0`, `8.49`), as printed on payment confirmations.
    pub fn plain(&self) -> String {
        format!("{:?}", self.as_decimal())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.as_decimal())
    }
}

impl TryFrom<f64> for Price {
    type Error = PizzeriaError;

    fn try_from(amount: f64) -> PizzeriaResult<Self> {
        Price::from_decimal(amount).ok_or_else(|| PizzeriaError::InvalidPrice {
            input: amount.to_string(),
        })
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.as_decimal()
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::from_cents(self.amount + rhs.amount)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.amount += rhs.amount;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}
