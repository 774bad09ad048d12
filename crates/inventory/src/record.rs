use serde::{Deserialize, Serialize};

use warehouse_core::{Price, ValueObject};

/// On-hand count and unit price of one item.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub quantity: u64,
    pub price: Price,
}

impl ValueObject for StockRecord {}

impl StockRecord {
    pub fn new(quantity: u64, price: Price) -> Self {
        Self { quantity, price }
    }

    /// True when at least one unit can be shipped.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Value of everything on hand.
    pub fn total_value(&self) -> f64 {
        self.price.total(self.quantity)
    }

    /// Operator-facing line: `"<name>: <q> шт. по <price> за шт."`.
    pub fn describe(&self, name: &str) -> String {
        format!("{name}: {} шт. по {} за шт.", self.quantity, self.price)
    }
}
