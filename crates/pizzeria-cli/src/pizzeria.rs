//! # Pizzeria
//!
//! The interactive controller. It owns the menu, the order journal and the
//! session's orders, and walks the customer through the menus:
//!
//! ```text
//! main menu ──1──▶ pizza ──▶ toppings ──▶ payment ──▶ place order ──┐
//!     ▲  │                                                          │
//!     │  └──2──▶ statistics                                         │
//!     └─────────────────────────────────────────────────────────────┘
//!        3 ──▶ quit
//! ```
//!
//! A choice that is not on the menu reprompts. Everything else that goes
//! wrong (unreadable price, closed input, failed write) ends the session.

use pizzeria_core::{
    Console, Menu, Order, OrderJournal, PaymentMethod, Pizza, PizzeriaResult, Price, SalesStats,
};
use tracing::{debug, info};

const INVALID_CHOICE: &str = "Неверный выбор. Попробуйте снова.";

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    CreateOrder,
    ShowStatistics,
    Quit,
}

impl MainMenuChoice {
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MainMenuChoice::CreateOrder),
            "2" => Some(MainMenuChoice::ShowStatistics),
            "3" => Some(MainMenuChoice::Quit),
            _ => None,
        }
    }
}

/// Parse a numbered menu answer: ASCII digits only, no sign or whitespace.
fn parse_menu_number(input: &str) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Session state of the pizzeria
pub struct Pizzeria {
    menu: Menu,
    journal: OrderJournal,
    orders: Vec<Order>,
    stats: SalesStats,
}

impl Pizzeria {
    pub fn new(menu: Menu, journal: OrderJournal) -> Self {
        Self {
            menu,
            journal,
            orders: Vec::new(),
            stats: SalesStats::new(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Orders placed this session, oldest first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn stats(&self) -> &SalesStats {
        &self.stats
    }

    /// Run the main menu until the customer quits
    pub fn run(&mut self, console: &mut dyn Console) -> PizzeriaResult<()> {
        loop {
            console.write_line("")?;
            console.write_line("Что вы хотите сделать?")?;
            console.write_line("1. Создать заказ")?;
            console.write_line("2. Просмотреть статистику")?;
            console.write_line("3. Выход")?;

            let choice = console.read_line("Введите 1, 2 или 3: ")?;
            match MainMenuChoice::from_input(&choice) {
                Some(MainMenuChoice::CreateOrder) => {
                    let total = self.create_order(console)?.total();
                    self.stats.record_sale(total);
                }
                Some(MainMenuChoice::ShowStatistics) => self.show_statistics(console)?,
                Some(MainMenuChoice::Quit) => {
                    info!(orders = self.orders.len(), total_sales = %self.stats.total_sales, "session finished");
                    return Ok(());
                }
                None => {
                    debug!(input = %choice, "rejected main menu choice");
                    console.write_line(INVALID_CHOICE)?;
                }
            }
        }
    }

    /// Take one order from the customer and place it
    pub fn create_order(&mut self, console: &mut dyn Console) -> PizzeriaResult<&Order> {
        let mut pizza = self.select_pizza(console)?;
        self.add_toppings(console, &mut pizza)?;
        let payment_method = self.select_payment(console)?;

        self.orders.push(Order::new(pizza, payment_method));
        let order = &self.orders[self.orders.len() - 1];
        order.place_order(console, &self.journal)?;
        Ok(order)
    }

    /// Print order count and running totals
    pub fn show_statistics(&self, console: &mut dyn Console) -> PizzeriaResult<()> {
        console.write_line("")?;
        console.write_line("Статистика:")?;
        for line in self.stats.report() {
            console.write_line(&line)?;
        }
        Ok(())
    }

    /// Pick a catalog pizza or define a custom one.
    ///
    /// A custom pizza ends the selection just like a catalog pick.
    fn select_pizza(&self, console: &mut dyn Console) -> PizzeriaResult<Pizza> {
        let custom_choice = self.menu.custom_choice().to_string();

        loop {
            console.write_line("")?;
            console.write_line("Выберите пиццу:")?;
            for (i, entry) in self.menu.pizzas.iter().enumerate() {
                console.write_line(&format!("{}. {} - {}", i + 1, entry.name, entry.base_price))?;
            }
            console.write_line(&format!("{}. Создать собственную пиццу", custom_choice))?;

            let choice = console.read_line("Введите номер пиццы: ")?;
            if choice == custom_choice {
                let name = console.read_line("Введите название пиццы: ")?;
                let base_price = Price::parse(&console.read_line("Введите базовую цену пиццы: ")?)?;
                return Ok(Pizza::custom(name, base_price));
            }
            if let Some(pizza) = parse_menu_number(&choice).and_then(|n| self.menu.pizza(n)) {
                return Ok(pizza);
            }

            debug!(input = %choice, "rejected pizza choice");
            console.write_line(INVALID_CHOICE)?;
        }
    }

    fn add_toppings(&self, console: &mut dyn Console, pizza: &mut Pizza) -> PizzeriaResult<()> {
        loop {
            console.write_line("")?;
            console.write_line("Добавить топпинги? (y/n)")?;
            let answer = console.read_line("Введите y или n: ")?;
            if !answer.eq_ignore_ascii_case("y") {
                return Ok(());
            }

            console.write_line("")?;
            console.write_line("Доступные топпинги:")?;
            for (i, topping) in self.menu.toppings.iter().enumerate() {
                console.write_line(&format!("{}. {}", i + 1, topping))?;
            }

            let choice = console.read_line("Введите номер топпинга (или 0, чтобы завершить): ")?;
            if let Some(topping) = parse_menu_number(&choice).and_then(|n| self.menu.topping(n)) {
                pizza.add_topping(topping);
            } else if choice == "0" {
                return Ok(());
            } else {
                debug!(input = %choice, "rejected topping choice");
                console.write_line(INVALID_CHOICE)?;
            }
        }
    }

    fn select_payment(&self, console: &mut dyn Console) -> PizzeriaResult<PaymentMethod> {
        loop {
            console.write_line("")?;
            console.write_line("Выберите способ оплаты:")?;
            for (i, method) in PaymentMethod::ALL.iter().enumerate() {
                console.write_line(&format!("{}. {}", i + 1, method))?;
            }

            let choice = console.read_line("Введите 1 или 2: ")?;
            if let Some(method) = PaymentMethod::from_choice(&choice) {
                return Ok(method);
            }

            debug!(input = %choice, "rejected payment choice");
            console.write_line(INVALID_CHOICE)?;
        }
    }
}
