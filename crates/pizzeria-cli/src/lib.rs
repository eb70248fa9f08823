//! # pizzeria-cli
//!
//! Interactive console for ordering pizzas.
//!
//! This crate provides:
//! - `Pizzeria`, the menu-driven controller
//! - `AppConfig`, environment-based configuration
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PIZZERIA_ORDERS_FILE` | `orders.json` | Order journal path |
//! | `PIZZERIA_MENU_FILE` | built-in menu | TOML menu file |
//! | `RUST_LOG` | `warn` | Log filter (logs go to stderr) |

pub mod config;
pub mod pizzeria;

pub use config::AppConfig;
pub use pizzeria::{MainMenuChoice, Pizzeria};
