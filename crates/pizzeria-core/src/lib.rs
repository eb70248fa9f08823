//! # pizzeria-core
//!
//! Core types for the pizzeria ordering console.
//!
//! This crate provides:
//! - `Pizza` and `Menu` for the pizza catalog and toppings
//! - `PaymentMethod` for cash and card payments
//! - `Order` and `OrderJournal` for placing and persisting orders
//! - `SalesStats` for running totals
//! - `Console` for prompt/response I/O
//! - `PizzeriaError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pizzeria_core::{Menu, Order, OrderJournal, PaymentMethod, StdConsole};
//!
//! let menu = Menu::standard();
//! let mut pizza = menu.pizza(1).unwrap();
//! pizza.add_topping("чили");
//!
//! let order = Order::new(pizza, PaymentMethod::Cash);
//! order.place_order(&mut StdConsole::stdio(), &OrderJournal::default())?;
//! ```

pub mod console;
pub mod error;
pub mod journal;
pub mod menu;
pub mod money;
pub mod order;
pub mod payment;
pub mod pizza;
pub mod stats;

// Re-exports for convenience
pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::{PizzeriaError, PizzeriaResult};
pub use journal::{OrderJournal, DEFAULT_JOURNAL_PATH};
pub use menu::{Menu, MenuPizza};
pub use money::{Price, TOPPING_PRICE};
pub use order::{Order, OrderRecord};
pub use payment::PaymentMethod;
pub use pizza::{Pizza, PizzaKind, NO_TOPPINGS};
pub use stats::SalesStats;
