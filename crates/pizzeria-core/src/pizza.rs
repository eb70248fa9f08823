//! # Pizza Types
//!
//! A pizza is a name, a base price and the toppings stacked on top of it.
//! Standard and custom pizzas behave the same; the kind only records where
//! the pizza came from.

use crate::money::{Price, TOPPING_PRICE};

/// Marker printed for a pizza without toppings
pub const NO_TOPPINGS: &str = "без добавок";

/// Where a pizza came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaKind {
    /// Picked from the menu catalog
    Standard,
    /// Named and priced by the customer
    Custom,
}

impl Default for PizzaKind {
    fn default() -> Self {
        PizzaKind::Standard
    }
}

/// A pizza being ordered
#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    /// Standard or custom
    pub kind: PizzaKind,

    /// Display name
    pub name: String,

    /// Price without toppings
    pub base_price: Price,

    /// Toppings in the order they were added
    pub toppings: Vec<String>,

    /// Current price, base plus toppings
    price: Price,
}

impl Pizza {
    fn new(kind: PizzaKind, name: impl Into<String>, base_price: Price) -> Self {
        Self {
            kind,
            name: name.into(),
            base_price,
            toppings: Vec::new(),
            price: base_price,
        }
    }

    /// Create a pizza from the catalog
    pub fn standard(name: impl Into<String>, base_price: Price) -> Self {
        Self::new(PizzaKind::Standard, name, base_price)
    }

    /// Create a customer-defined pizza
    pub fn custom(name: impl Into<String>, base_price: Price) -> Self {
        Self::new(PizzaKind::Custom, name, base_price)
    }

    /// Add a topping, raising the price by [`TOPPING_PRICE`]
    pub fn add_topping(&mut self, topping: impl Into<String>) {
        self.toppings.push(topping.into());
        self.price += TOPPING_PRICE;
    }

    /// Current price
    pub fn price(&self) -> Price {
        self.price
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.kind, PizzaKind::Custom)
    }
}

impl std::fmt::Display for Pizza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.toppings.is_empty() {
            write!(f, "{} ({}): {}", self.name, NO_TOPPINGS, self.price)
        } else {
            write!(f, "{} ({}): {}", self.name, self.toppings.join(", "), self.price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_follows_toppings() {
        let mut pizza = Pizza::standard("Маргарита", Price::new(7.99));
        assert_eq!(pizza.price(), Price::new(7.99));

        pizza.add_topping("чили");
        assert_eq!(pizza.price(), Price::new(8.49));

        pizza.add_topping("оливки");
        pizza.add_topping("чили");
        assert_eq!(pizza.price(), Price::from_cents(799 + 3 * 50));
        assert_eq!(pizza.toppings, vec!["чили", "оливки", "чили"]);
    }

    #[test]
    fn test_topping_order_does_not_change_price() {
        let mut a = Pizza::custom("A", Price::new(3.10));
        let mut b = Pizza::custom("B", Price::new(3.10));
        for t in ["халапеньо", "прошутто", "оливки"] {
            a.add_topping(t);
        }
        for t in ["оливки", "халапеньо", "прошутто"] {
            b.add_topping(t);
        }
        assert_eq!(a.price(), b.price());
        assert_eq!(a.price(), Price::new(4.60));
    }

    #[test]
    fn test_display_without_toppings() {
        let pizza = Pizza::standard("Пепперони", Price::new(8.99));
        assert_eq!(pizza.to_string(), "Пепперони (без добавок): 8.99");
    }

    #[test]
    fn test_display_with_toppings() {
        let mut pizza = Pizza::custom("Test", Price::new(5.0));
        pizza.add_topping("сладкий лук");
        pizza.add_topping("чили");
        assert_eq!(pizza.to_string(), "Test (сладкий лук, чили): 6.00");
        assert!(pizza.is_custom());
    }

    #[test]
    fn test_new_pizzas_do_not_share_toppings() {
        let mut first = Pizza::custom("One", Price::new(5.0));
        first.add_topping("оливки");
        let second = Pizza::custom("Two", Price::new(5.0));

        assert!(second.toppings.is_empty());
        assert_eq!(second.price(), Price::new(5.0));
    }
}
