//! Operator-facing boundary over [`Inventory`].
//!
//! `add_item` and `calculate_total` hand their errors back to the caller.
//! Every other operation handles its own failures: it reports them to the
//! operator through the [`Notify`] sink and returns a fallback value (or
//! `None`), so callers must look at the return value instead of expecting an
//! error.

use warehouse_core::{DomainError, DomainResult};

use crate::notice::{CompletionNotice, ConsoleNotifier, Notify};
use crate::order::OrderReceipt;
use crate::record::StockRecord;
use crate::store::{DEFAULT_PRICE, DEFAULT_QUANTITY, Inventory, ItemUpdate};

/// `price × quantity`; errors propagate. Never looks at any store.
pub fn calculate_total(price: f64, quantity: i64) -> DomainResult<f64> {
    Inventory::calculate_total(price, quantity)
}

/// An inventory plus the operator it reports to.
#[derive(Debug)]
pub struct Warehouse<N: Notify = ConsoleNotifier> {
    inventory: Inventory,
    notifier: N,
}

impl Warehouse<ConsoleNotifier> {
    pub fn new() -> Self {
        Self::with_notifier(ConsoleNotifier)
    }
}

impl Default for Warehouse<ConsoleNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notify> Warehouse<N> {
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            inventory: Inventory::new(),
            notifier,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn get(&self, name: &str) -> Option<&StockRecord> {
        self.inventory.get(name)
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, &StockRecord)> {
        self.inventory.items()
    }

    fn report_failure(&self, line: String, err: &DomainError) {
        tracing::warn!(error = %err, "{line}");
        self.notifier.notify(&line);
    }

    fn report_unexpected(&self, line: String, err: &DomainError) {
        tracing::error!(error = ?err, "{line}");
        self.notifier.notify(&line);
    }

    /// Adds stock; errors propagate.
    pub fn add_item(&mut self, name: &str, quantity: i64, price: f64) -> DomainResult<String> {
        let confirmation = self
            .inventory
            .try_add_item(name, quantity, price)
            .inspect_err(|err| tracing::warn!(item = name, error = %err, "add rejected"))?;
        tracing::info!(item = name, quantity, price, "item added");
        Ok(confirmation)
    }

    /// [`DEFAULT_QUANTITY`] units at [`DEFAULT_PRICE`]; errors propagate.
    pub fn add_default(&mut self, name: &str) -> DomainResult<String> {
        self.add_item(name, DEFAULT_QUANTITY, DEFAULT_PRICE)
    }

    /// Value of everything on hand for `name`; errors propagate.
    pub fn item_total(&self, name: &str) -> DomainResult<f64> {
        self.inventory.item_total(name)
    }

    /// Shows and returns the item line, or a not-found message.
    pub fn display_item_details(&self, name: &str) -> String {
        match self.inventory.try_item_details(name) {
            Ok(details) => {
                tracing::info!(item = name, "item details shown");
                self.notifier.notify(&details);
                details
            }
            Err(err) => {
                self.report_failure(
                    format!("Ошибка при получении данных о товаре: {err}"),
                    &err,
                );
                format!("Товар '{name}' не найден.")
            }
        }
    }

    pub fn update_item(&mut self, name: &str, update: ItemUpdate) -> Option<String> {
        let _done = CompletionNotice::new(
            &self.notifier,
            format!("Завершено обновление информации о товаре '{name}'."),
        );

        match self.inventory.try_update_item(name, update) {
            Ok(summary) => {
                tracing::info!(item = name, "item updated");
                Some(summary)
            }
            Err(
                err @ (DomainError::ItemNotFound { .. }
                | DomainError::InvalidQuantity { .. }
                | DomainError::InvalidPrice { .. }),
            ) => {
                self.report_failure(
                    format!("Ошибка при обновлении товара '{name}': {err}"),
                    &err,
                );
                None
            }
            Err(err) => {
                self.report_unexpected(
                    format!("Непредвиденная ошибка при обновлении товара '{name}': {err}"),
                    &err,
                );
                None
            }
        }
    }

    pub fn apply_discount(&mut self, name: &str, percentage: f64) -> Option<String> {
        let _done = CompletionNotice::new(
            &self.notifier,
            format!("Процедура скидки завершена для товара '{name}'."),
        );

        match self.inventory.try_apply_discount(name, percentage) {
            Ok(message) => {
                tracing::info!(item = name, percentage, "discount applied");
                Some(message)
            }
            Err(err @ DomainError::ItemNotFound { .. }) => {
                self.report_failure(format!("Ошибка: {err}"), &err);
                None
            }
            Err(err @ DomainError::InvalidDiscount { .. }) => {
                self.report_failure(format!("Ошибка ввода: {err}"), &err);
                None
            }
            Err(err @ DomainError::NegativePriceResult { .. }) => {
                self.report_failure(format!("Ошибка вычисления: {err}"), &err);
                None
            }
            Err(err) => {
                self.report_unexpected(format!("Непредвиденная ошибка: {err}"), &err);
                None
            }
        }
    }

    /// Ships one unit per listed item, all or nothing.
    pub fn complete_order<S: AsRef<str>>(
        &mut self,
        order_id: &str,
        items: &[S],
    ) -> Option<OrderReceipt> {
        let _done = CompletionNotice::new(&self.notifier, "Процедура завершения заказа завершена.");

        match self.inventory.try_complete_order(order_id, items) {
            Ok(receipt) => {
                tracing::info!(order_id, units = receipt.units(), "order completed");
                self.notifier
                    .notify(&format!("Заказ {order_id} успешно обработан."));
                Some(receipt)
            }
            Err(err) if err.is_input_error() => {
                self.report_failure(format!("Ошибка ввода данных: {err}"), &err);
                None
            }
            Err(err @ DomainError::ItemNotFound { .. }) => {
                self.report_failure(format!("Ошибка: {err}"), &err);
                None
            }
            Err(err) => {
                self.report_unexpected(format!("Непредвиденная ошибка: {err}"), &err);
                None
            }
        }
    }

    pub fn remove_item(&mut self, name: &str, quantity: i64) -> Option<String> {
        let _done = CompletionNotice::new(
            &self.notifier,
            format!("Операция удаления товара '{name}' завершена."),
        );

        match self.inventory.try_remove_item(name, quantity) {
            Ok(message) => {
                tracing::info!(item = name, quantity, "stock removed");
                Some(message)
            }
            Err(err @ DomainError::ItemNotFound { .. }) => {
                self.report_failure(format!("Ошибка удаления товара: {err}"), &err);
                None
            }
            Err(err) if err.is_quantity_error() => {
                self.report_failure(format!("Ошибка удаления товара: {err}"), &err);
                None
            }
            Err(err) => {
                self.report_unexpected(format!("Непредвиденная ошибка: {err}"), &err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::RecordingNotifier;

    fn warehouse() -> Warehouse<RecordingNotifier> {
        let mut warehouse = Warehouse::with_notifier(RecordingNotifier::new());
        warehouse.add_item("Samsung S24", 10, 60000.0).unwrap();
        warehouse.notifier().take();
        warehouse
    }

    #[test]
    fn add_item_propagates_errors_and_leaves_store_alone() {
        let mut warehouse = warehouse();
        let err = warehouse.add_item("Nokia 3310", -5, 100.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_quantity(-5));
        assert!(warehouse.get("Nokia 3310").is_none());
        assert!(warehouse.notifier().lines().is_empty());
    }

    #[test]
    fn add_default_stocks_one_free_unit() {
        let mut warehouse = warehouse();
        let confirmation = warehouse.add_default("Nokia 3310").unwrap();
        assert_eq!(
            confirmation,
            "Товар 'Nokia 3310' добавлен на склад: 1 шт. по цене 0.0 за штуку."
        );
        let record = warehouse.get("Nokia 3310").unwrap();
        assert_eq!(record.quantity, 1);
        assert_eq!(record.price.value(), 0.0);

        warehouse.add_default("Samsung S24").unwrap();
        let record = warehouse.get("Samsung S24").unwrap();
        assert_eq!(record.quantity, 11);
        assert_eq!(record.price.value(), 0.0);
    }

    #[test]
    fn add_default_propagates_errors() {
        let mut warehouse = warehouse();
        assert!(matches!(
            warehouse.add_default("  "),
            Err(DomainError::InvalidItemName { .. })
        ));
        assert_eq!(warehouse.inventory().len(), 1);
    }

    #[test]
    fn calculate_total_propagates_errors() {
        assert_eq!(calculate_total(-10.0, 2), Err(DomainError::invalid_price(-10.0)));
        assert_eq!(calculate_total(150.0, 10), Ok(1500.0));
    }

    #[test]
    fn details_are_shown_and_returned() {
        let warehouse = warehouse();
        let details = warehouse.display_item_details("Samsung S24");
        assert_eq!(details, "Samsung S24: 10 шт. по 60000.0 за шт.");
        assert_eq!(warehouse.notifier().lines(), vec![details]);
    }

    #[test]
    fn details_of_missing_item_fall_back_to_a_message() {
        let warehouse = warehouse();
        let details = warehouse.display_item_details("missing");
        assert_eq!(details, "Товар 'missing' не найден.");
        let lines = warehouse.notifier().lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Ошибка при получении данных о товаре: Товар не найден: 'missing'"));
    }

    #[test]
    fn update_reports_completion_on_success() {
        let mut warehouse = warehouse();
        let summary = warehouse.update_item("Samsung S24", ItemUpdate::new(Some(20), Some(55000.0)));
        assert_eq!(summary.as_deref(), Some("Samsung S24: quantity=20, price=55000.0"));
        assert_eq!(
            warehouse.notifier().lines(),
            vec!["Завершено обновление информации о товаре 'Samsung S24'."]
        );
    }

    #[test]
    fn update_failure_returns_none_and_still_completes() {
        let mut warehouse = warehouse();
        assert!(warehouse.update_item("Samsung S24", ItemUpdate::quantity(-3)).is_none());
        assert_eq!(warehouse.get("Samsung S24").unwrap().quantity, 10);

        let lines = warehouse.notifier().lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Ошибка при обновлении товара 'Samsung S24': Недопустимое количество товара: -3"));
        assert_eq!(lines[1], "Завершено обновление информации о товаре 'Samsung S24'.");
    }

    #[test]
    fn discount_failures_are_reported_by_kind() {
        let mut warehouse = warehouse();

        assert!(warehouse.apply_discount("Samsung S24", 150.0).is_none());
        assert!(warehouse.apply_discount("ghost", 10.0).is_none());

        let lines = warehouse.notifier().lines();
        assert_eq!(
            lines,
            vec![
                "Ошибка ввода: Скидка должна быть в диапазоне от 0 до 100.".to_string(),
                "Процедура скидки завершена для товара 'Samsung S24'.".to_string(),
                "Ошибка: Товар не найден: 'ghost'. Проверьте правильность ввода или наличие товара."
                    .to_string(),
                "Процедура скидки завершена для товара 'ghost'.".to_string(),
            ]
        );
        assert_eq!(warehouse.get("Samsung S24").unwrap().price.value(), 60000.0);
    }

    #[test]
    fn discount_success_returns_new_price() {
        let mut warehouse = warehouse();
        let message = warehouse.apply_discount("Samsung S24", 25.0);
        assert_eq!(
            message.as_deref(),
            Some("Новая цена товара 'Samsung S24' со скидкой: 45000.0")
        );
        assert!(warehouse.notifier().contains("Процедура скидки завершена для товара 'Samsung S24'."));
    }

    #[test]
    fn order_success_is_announced_before_completion() {
        let mut warehouse = warehouse();
        let receipt = warehouse.complete_order("order_123", &["Samsung S24"]).unwrap();
        assert_eq!(receipt.order_id, "order_123");
        assert_eq!(
            warehouse.notifier().lines(),
            vec![
                "Заказ order_123 успешно обработан.",
                "Процедура завершения заказа завершена.",
            ]
        );
    }

    #[test]
    fn order_input_errors_are_reported() {
        let mut warehouse = warehouse();
        let none: [&str; 0] = [];
        assert!(warehouse.complete_order("order_1", &none).is_none());
        assert_eq!(
            warehouse.notifier().take(),
            vec![
                "Ошибка ввода данных: Список товаров не может быть пустым.",
                "Процедура завершения заказа завершена.",
            ]
        );

        assert!(warehouse.complete_order("   ", &["Samsung S24"]).is_none());
        assert_eq!(
            warehouse.notifier().take()[0],
            "Ошибка ввода данных: Неверный формат ID заказа."
        );
        assert_eq!(warehouse.get("Samsung S24").unwrap().quantity, 10);
    }

    #[test]
    fn remove_failures_keep_stock_and_complete() {
        let mut warehouse = warehouse();

        assert!(warehouse.remove_item("Samsung S24", 11).is_none());
        assert!(warehouse.remove_item("Samsung S24", 0).is_none());
        assert!(warehouse.remove_item("Xiaomi 14", 2).is_none());
        assert_eq!(warehouse.get("Samsung S24").unwrap().quantity, 10);

        let lines = warehouse.notifier().lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Ошибка удаления товара: Недостаточное количество на складе: 11"));
        assert!(lines[2].starts_with("Ошибка удаления товара: Недопустимое количество товара: 0"));
        assert!(lines[4].starts_with("Ошибка удаления товара: Товар не найден: 'Xiaomi 14'"));
        assert_eq!(lines[5], "Операция удаления товара 'Xiaomi 14' завершена.");
    }
}
