//! # Pizzeria
//!
//! Console pizza ordering.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export PIZZERIA_ORDERS_FILE=orders.json
//! export RUST_LOG=pizzeria_core=debug
//!
//! pizzeria
//! ```

use pizzeria_cli::{AppConfig, Pizzeria};
use pizzeria_core::{OrderJournal, StdConsole};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the menus on stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = AppConfig::from_env();
    let menu = config.load_menu()?;

    info!("Orders file: {}", config.orders_file.display());
    info!(
        "Menu: {} pizzas, {} toppings",
        menu.pizzas.len(),
        menu.toppings.len()
    );

    let mut pizzeria = Pizzeria::new(menu, OrderJournal::new(&config.orders_file));
    let mut console = StdConsole::stdio();
    pizzeria.run(&mut console)?;

    Ok(())
}
