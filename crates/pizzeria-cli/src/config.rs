//! # Application Configuration
//!
//! Where orders are written and which menu is served.
//! Values come from the environment (and an optional `.env` file).

use pizzeria_core::{Menu, DEFAULT_JOURNAL_PATH};
use std::path::PathBuf;

/// Locations searched for a menu file when none is configured
const MENU_SEARCH_PATHS: [&str; 3] = [
    "config/menu.toml",
    "../config/menu.toml",
    "../../config/menu.toml",
];

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Order journal path
    pub orders_file: PathBuf,
    /// Explicit menu file, if any
    pub menu_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            orders_file: std::env::var("PIZZERIA_ORDERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_JOURNAL_PATH)),
            menu_file: std::env::var("PIZZERIA_MENU_FILE").ok().map(PathBuf::from),
        }
    }

    /// Load the configured menu.
    ///
    /// An explicitly configured file must load. Otherwise the first
    /// `config/menu.toml` found wins, falling back to the built-in menu.
    pub fn load_menu(&self) -> anyhow::Result<Menu> {
        if let Some(path) = &self.menu_file {
            let menu = Menu::load(path)
                .map_err(|e| anyhow::anyhow!("Failed to load menu {}: {}", path.display(), e))?;
            tracing::info!("Loaded {} pizzas from {}", menu.pizzas.len(), path.display());
            return Ok(menu);
        }

        for path in MENU_SEARCH_PATHS {
            if std::path::Path::new(path).is_file() {
                let menu = Menu::load(path)
                    .map_err(|e| anyhow::anyhow!("Failed to load menu {}: {}", path, e))?;
                tracing::info!("Loaded {} pizzas from {}", menu.pizzas.len(), path);
                return Ok(menu);
            }
        }

        tracing::warn!("No menu file found, using built-in menu");
        Ok(Menu::standard())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            orders_file: PathBuf::from(DEFAULT_JOURNAL_PATH),
            menu_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.orders_file, PathBuf::from("orders.json"));
        assert!(config.menu_file.is_none());
    }

    #[test]
    fn test_load_explicit_menu() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        std::fs::write(
            &path,
            "toppings = [\"чили\"]\n\n[[pizzas]]\nname = \"Кальцоне\"\nbase_price = 9.5\n",
        )
        .unwrap();

        let config = AppConfig {
            menu_file: Some(path),
            ..AppConfig::default()
        };
        let menu = config.load_menu().unwrap();
        assert_eq!(menu.pizzas.len(), 1);
        assert_eq!(menu.pizzas[0].name, "Кальцоне");
        assert_eq!(menu.toppings, vec!["чили"]);
    }

    #[test]
    fn test_missing_explicit_menu_is_an_error() {
        let config = AppConfig {
            menu_file: Some(PathBuf::from("/nonexistent/menu.toml")),
            ..AppConfig::default()
        };
        assert!(config.load_menu().is_err());
    }
}
