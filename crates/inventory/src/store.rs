//! The item mapping and its fallible operations.
//!
//! Every `try_*` operation validates all of its input before touching a
//! record, so a failed call leaves the inventory exactly as it was.

use std::collections::BTreeMap;

use chrono::Utc;

use warehouse_core::{Discount, DomainError, DomainResult, Price};

use crate::order::{OrderReceipt, validate_envelope};
use crate::record::StockRecord;

/// Quantity stocked when the caller does not name one.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Price stocked when the caller does not name one.
pub const DEFAULT_PRICE: f64 = 0.0;

/// Partial update of a record: `None` fields keep their current value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl ItemUpdate {
    pub fn new(quantity: Option<i64>, price: Option<f64>) -> Self {
        Self { quantity, price }
    }

    pub fn quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            price: None,
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            quantity: None,
            price: Some(price),
        }
    }
}

/// Mapping from item name (case-sensitive) to its stock record.
///
/// Names are kept in order so listings are stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: BTreeMap<String, StockRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&StockRecord> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in name order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &StockRecord)> {
        self.items.iter().map(|(name, record)| (name.as_str(), record))
    }

    fn record(&self, name: &str) -> DomainResult<&StockRecord> {
        self.items
            .get(name)
            .ok_or_else(|| DomainError::item_not_found(name))
    }

    fn record_mut(&mut self, name: &str) -> DomainResult<&mut StockRecord> {
        self.items
            .get_mut(name)
            .ok_or_else(|| DomainError::item_not_found(name))
    }

    /// Adds `quantity` units of `name` at `price`.
    ///
    /// An existing item accumulates quantity and takes the new price (last
    /// write wins). Returns the confirmation shown to the operator.
    pub fn try_add_item(&mut self, name: &str, quantity: i64, price: f64) -> DomainResult<String> {
        if quantity <= 0 {
            return Err(DomainError::invalid_quantity(quantity));
        }
        let unit_price = Price::new(price)?;
        if name.trim().is_empty() {
            return Err(DomainError::invalid_item_name(name));
        }
        let added = u64::try_from(quantity).map_err(|_| DomainError::invalid_quantity(quantity))?;

        match self.items.get_mut(name) {
            Some(record) => {
                record.quantity = record
                    .quantity
                    .checked_add(added)
                    .ok_or_else(|| DomainError::invalid_quantity(quantity))?;
                record.price = unit_price;
            }
            None => {
                self.items
                    .insert(name.to_string(), StockRecord::new(added, unit_price));
            }
        }
        tracing::debug!(item = name, quantity, price = unit_price.value(), "stock added");

        Ok(format!(
            "Товар '{name}' добавлен на склад: {quantity} шт. по цене {unit_price} за штуку."
        ))
    }

    /// `price × quantity`. Pure; never looks at the store.
    pub fn calculate_total(price: f64, quantity: i64) -> DomainResult<f64> {
        let price = Price::new(price)?;
        let quantity = u64::try_from(quantity).map_err(|_| DomainError::invalid_quantity(quantity))?;
        Ok(price.total(quantity))
    }

    /// Value of everything on hand for `name`.
    pub fn item_total(&self, name: &str) -> DomainResult<f64> {
        Ok(self.record(name)?.total_value())
    }

    pub fn try_item_details(&self, name: &str) -> DomainResult<String> {
        Ok(self.record(name)?.describe(name))
    }

    /// Overwrites only the fields present in `update`.
    pub fn try_update_item(&mut self, name: &str, update: ItemUpdate) -> DomainResult<String> {
        let record = self.record_mut(name)?;

        let quantity = update
            .quantity
            .map(|q| u64::try_from(q).map_err(|_| DomainError::invalid_quantity(q)))
            .transpose()?;
        let price = update.price.map(Price::new).transpose()?;

        if let Some(quantity) = quantity {
            record.quantity = quantity;
        }
        if let Some(price) = price {
            record.price = price;
        }
        tracing::debug!(item = name, quantity = record.quantity, price = record.price.value(), "item updated");

        Ok(format!(
            "{name}: quantity={}, price={}",
            record.quantity, record.price
        ))
    }

    /// Takes `percentage` percent off the item's price and stores the result.
    pub fn try_apply_discount(&mut self, name: &str, percentage: f64) -> DomainResult<String> {
        let record = self.record_mut(name)?;
        let discount = Discount::new(percentage)?;
        let price = record.price.discounted(discount)?;
        record.price = price;
        tracing::debug!(item = name, percentage, price = price.value(), "discount applied");

        Ok(format!("Новая цена товара '{name}' со скидкой: {price}"))
    }

    /// Ships one unit per listed occurrence.
    ///
    /// Availability of every occurrence is checked against the stock as it was
    /// before the order, and nothing is decremented unless all of them pass.
    /// A name listed more often than it has units therefore passes the check;
    /// its extra decrements stop at zero, so the receipt can list more units
    /// than actually left the shelf.
    pub fn try_complete_order<S: AsRef<str>>(
        &mut self,
        order_id: &str,
        items: &[S],
    ) -> DomainResult<OrderReceipt> {
        validate_envelope(order_id, items)?;

        for name in items {
            let name = name.as_ref();
            match self.items.get(name) {
                Some(record) if record.in_stock() => {}
                _ => return Err(DomainError::item_not_found(name)),
            }
        }

        for name in items {
            let name = name.as_ref();
            if let Some(record) = self.items.get_mut(name) {
                if record.quantity == 0 {
                    tracing::warn!(order_id, item = name, "order lists more units than on hand; stock stays at zero");
                }
                record.quantity = record.quantity.saturating_sub(1);
            }
        }

        Ok(OrderReceipt {
            order_id: order_id.to_string(),
            items: items.iter().map(|name| name.as_ref().to_string()).collect(),
            completed_at: Utc::now(),
        })
    }

    /// Takes `quantity` units of `name` off the shelf.
    pub fn try_remove_item(&mut self, name: &str, quantity: i64) -> DomainResult<String> {
        let record = self.record_mut(name)?;
        if quantity <= 0 {
            return Err(DomainError::invalid_quantity(quantity));
        }
        let requested = u64::try_from(quantity).map_err(|_| DomainError::invalid_quantity(quantity))?;
        if record.quantity < requested {
            return Err(DomainError::insufficient_stock(quantity, record.quantity));
        }
        record.quantity -= requested;
        tracing::debug!(item = name, removed = quantity, left = record.quantity, "stock removed");

        Ok(format!(
            "Удалено {quantity} шт. товара '{name}'. Осталось на складе: {} шт.",
            record.quantity
        ))
    }
}
