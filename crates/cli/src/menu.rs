//! Interactive operator menu.
//!
//! Reads one choice per line, asks for the arguments it needs, calls the
//! warehouse and prints the outcome. Bad input never ends the loop: anything
//! that fails inside an action is reported as a generic error and the menu is
//! shown again. Only choice 7, end of input, or a broken terminal stop it.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};

use warehouse_core::fmt_amount;
use warehouse_inventory::{ItemUpdate, Notify, Warehouse};

pub const GREETING: &str = "Добро пожаловать в систему управления складом!";

const MENU: &[&str] = &[
    "1. Добавить товар",
    "2. Обновить товар",
    "3. Просмотреть все товары",
    "4. Рассчитать общую стоимость товара",
    "5. Применить скидку",
    "6. Завершить заказ",
    "7. Выйти",
];

/// What the loop does after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, R, W, N: Notify> {
    warehouse: &'a mut Warehouse<N>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write, N: Notify> Menu<'a, R, W, N> {
    pub fn new(warehouse: &'a mut Warehouse<N>, input: R, output: W) -> Self {
        Self {
            warehouse,
            input,
            output,
        }
    }

    /// Runs until the operator exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{GREETING}")?;

        loop {
            writeln!(self.output)?;
            for line in MENU {
                writeln!(self.output, "{line}")?;
            }

            let Some(choice) = self.read_answer("Выберите действие: ")? else {
                tracing::info!("input closed; leaving menu");
                break;
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.downcast_ref::<io::Error>().is_some() => return Err(err),
                Err(err) => {
                    tracing::warn!(choice = choice.trim(), error = %err, "menu action failed");
                    writeln!(self.output, "Произошла ошибка: {err}")?;
                }
            }
        }
        Ok(())
    }

    /// Runs the action behind one menu choice.
    pub fn dispatch(&mut self, choice: &str) -> anyhow::Result<Flow> {
        match choice {
            "1" => self.add_item()?,
            "2" => self.update_item()?,
            "3" => self.list_items()?,
            "4" => self.item_total()?,
            "5" => self.apply_discount()?,
            "6" => self.complete_order()?,
            "7" => {
                writeln!(self.output, "Выход из программы.")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(self.output, "Неверный выбор, попробуйте снова.")?,
        }
        Ok(Flow::Continue)
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// `None` once input is exhausted.
    fn read_answer(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        match self.read_answer(prompt)? {
            Some(answer) => Ok(answer),
            None => bail!("ввод завершён"),
        }
    }

    fn ask_parsed<T>(&mut self, prompt: &str, what: &str) -> anyhow::Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let raw = self.ask(prompt)?;
        raw.trim()
            .parse()
            .with_context(|| format!("некорректное значение ({what}): {raw:?}"))
    }

    /// Like [`Menu::ask_parsed`], but an empty answer means "no value".
    fn ask_optional<T>(&mut self, prompt: &str, what: &str) -> anyhow::Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let raw = self.ask(prompt)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let value = raw
            .trim()
            .parse()
            .with_context(|| format!("некорректное значение ({what}): {raw:?}"))?;
        Ok(Some(value))
    }

    fn add_item(&mut self) -> anyhow::Result<()> {
        let name = self.ask("Введите название товара: ")?;
        let quantity: i64 = self.ask_parsed("Введите количество: ", "количество")?;
        let price: f64 = self.ask_parsed("Введите цену: ", "цена")?;

        let confirmation = self.warehouse.add_item(&name, quantity, price)?;
        writeln!(self.output, "{confirmation}")?;
        Ok(())
    }

    fn update_item(&mut self) -> anyhow::Result<()> {
        let name = self.ask("Введите название товара для обновления: ")?;
        let quantity = self.ask_optional(
            "Введите новое количество (или оставьте пустым): ",
            "количество",
        )?;
        let price = self.ask_optional("Введите новую цену (или оставьте пустым): ", "цена")?;

        if let Some(summary) = self
            .warehouse
            .update_item(&name, ItemUpdate::new(quantity, price))
        {
            writeln!(self.output, "{summary}")?;
        }
        Ok(())
    }

    fn list_items(&mut self) -> anyhow::Result<()> {
        if self.warehouse.inventory().is_empty() {
            writeln!(self.output, "Склад пуст.")?;
            return Ok(());
        }
        for (name, record) in self.warehouse.items() {
            writeln!(self.output, "{}", record.describe(name))?;
        }
        Ok(())
    }

    fn item_total(&mut self) -> anyhow::Result<()> {
        let name = self.ask("Введите название товара: ")?;
        if self.warehouse.get(&name).is_none() {
            writeln!(self.output, "Товар '{name}' не найден на складе.")?;
            return Ok(());
        }

        let total = self.warehouse.item_total(&name)?;
        writeln!(
            self.output,
            "Общая стоимость товара '{name}': {}",
            fmt_amount(total)
        )?;
        Ok(())
    }

    fn apply_discount(&mut self) -> anyhow::Result<()> {
        let name = self.ask("Введите название товара для скидки: ")?;
        let percentage: f64 =
            self.ask_parsed("Введите размер скидки в процентах: ", "скидка")?;

        if let Some(message) = self.warehouse.apply_discount(&name, percentage) {
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }

    fn complete_order(&mut self) -> anyhow::Result<()> {
        let order_id = self.ask("Введите ID заказа: ")?;
        let items: Vec<String> = self
            .ask("Введите список товаров через запятую: ")?
            .split(',')
            .map(|item| item.trim().to_string())
            .collect();

        self.warehouse.complete_order(&order_id, items.as_slice());
        Ok(())
    }
}
