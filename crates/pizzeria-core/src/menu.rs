//! # Menu Catalog
//!
//! Standard pizzas and available toppings.
//! The built-in menu can be replaced by a TOML file such as `config/menu.toml`:
//!
//! ```toml
//! toppings = ["чили", "оливки"]
//!
//! [[pizzas]]
//! name = "Маргарита"
//! base_price = 7.99
//! ```

use crate::error::{PizzeriaError, PizzeriaResult};
use crate::money::Price;
use crate::pizza::Pizza;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A standard pizza on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPizza {
    /// Display name
    pub name: String,

    /// Price before toppings
    pub base_price: Price,
}

impl MenuPizza {
    pub fn new(name: impl Into<String>, base_price: Price) -> Self {
        Self {
            name: name.into(),
            base_price,
        }
    }
}

/// Pizza and topping catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub pizzas: Vec<MenuPizza>,

    #[serde(default)]
    pub toppings: Vec<String>,
}

impl Menu {
    /// The house menu
    pub fn standard() -> Self {
        Self {
            pizzas: vec![
                MenuPizza::new("Маргарита", Price::new(7.99)),
                MenuPizza::new("Пепперони", Price::new(8.99)),
                MenuPizza::new("Вегетарианская", Price::new(9.99)),
                MenuPizza::new("Четыре сыра", Price::new(10.99)),
                MenuPizza::new("Гавайская", Price::new(11.99)),
            ],
            toppings: [
                "сладкий лук",
                "халапеньо",
                "чили",
                "соленый огурец",
                "оливки",
                "прошутто",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }

    /// Load a menu from a TOML string.
    ///
    /// Base prices go through [`Price`]'s checks, so a negative, oversized or
    /// sub-cent price fails the whole menu.
    pub fn from_toml(toml_str: &str) -> PizzeriaResult<Self> {
        let menu: Menu = toml::from_str(toml_str)?;
        if menu.pizzas.is_empty() {
            return Err(PizzeriaError::Menu("menu has no pizzas".to_string()));
        }
        Ok(menu)
    }

    /// Load a menu from a TOML file
    pub fn load(path: impl AsRef<Path>) -> PizzeriaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| PizzeriaError::Menu(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Fresh pizza for menu number `number` (1-based)
    pub fn pizza(&self, number: usize) -> Option<Pizza> {
        number
            .checked_sub(1)
            .and_then(|i| self.pizzas.get(i))
            .map(|entry| Pizza::standard(entry.name.clone(), entry.base_price))
    }

    /// Topping for menu number `number` (1-based)
    pub fn topping(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.toppings.get(i))
            .map(String::as_str)
    }

    /// Menu number that starts a custom pizza
    pub fn custom_choice(&self) -> usize {
        self.pizzas.len() + 1
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}
