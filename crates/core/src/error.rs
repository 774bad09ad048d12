//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant carries the offending value so the operator-facing message
/// can name it. Messages are the ones shown to warehouse staff.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum DomainError {
    /// Quantity is zero or negative where a positive amount is required, or
    /// negative where a non-negative one is.
    #[error("Недопустимое количество товара: {quantity}. Количество должно быть больше нуля.")]
    InvalidQuantity { quantity: i64 },

    /// More units were requested than are on hand.
    ///
    /// Belongs to the quantity family (see [`DomainError::is_quantity_error`]).
    #[error("Недостаточное количество на складе: {requested}. Количество должно быть больше нуля.")]
    InsufficientStock { requested: i64, available: u64 },

    /// Price is negative (or not a finite number).
    #[error("Недопустимая цена товара: {price}. Цена должна быть неотрицательной.")]
    InvalidPrice { price: f64 },

    /// No item with this name exists, or it is out of stock where stock is required.
    #[error("Товар не найден: '{name}'. Проверьте правильность ввода или наличие товара.")]
    ItemNotFound { name: String },

    #[error("Скидка должна быть в диапазоне от 0 до 100.")]
    InvalidDiscount { percentage: f64 },

    #[error("Расчёт скидки привёл к отрицательной цене.")]
    NegativePriceResult { price: f64 },

    #[error("Неверный формат ID заказа.")]
    InvalidOrderId { order_id: String },

    #[error("Список товаров не может быть пустым.")]
    InvalidItemList,

    #[error("Название товара не может быть пустым.")]
    InvalidItemName { name: String },
}

impl DomainError {
    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity { quantity }
    }

    pub fn insufficient_stock(requested: i64, available: u64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn invalid_price(price: f64) -> Self {
        Self::InvalidPrice { price }
    }

    pub fn item_not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound { name: name.into() }
    }

    pub fn invalid_discount(percentage: f64) -> Self {
        Self::InvalidDiscount { percentage }
    }

    pub fn negative_price_result(price: f64) -> Self {
        Self::NegativePriceResult { price }
    }

    pub fn invalid_order_id(order_id: impl Into<String>) -> Self {
        Self::InvalidOrderId {
            order_id: order_id.into(),
        }
    }

    pub fn invalid_item_name(name: impl Into<String>) -> Self {
        Self::InvalidItemName { name: name.into() }
    }

    /// True for every error about a quantity, including insufficient stock.
    pub fn is_quantity_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity { .. } | Self::InsufficientStock { .. }
        )
    }

    /// True for malformed input that never reached the store (order id, item list, name).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrderId { .. } | Self::InvalidItemList | Self::InvalidItemName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_message_names_the_value() {
        let err = DomainError::invalid_quantity(-5);
        assert_eq!(
            err.to_string(),
            "Недопустимое количество товара: -5. Количество должно быть больше нуля."
        );
    }

    #[test]
    fn insufficient_stock_is_a_quantity_error_with_its_own_message() {
        let err = DomainError::insufficient_stock(10, 5);
        assert!(err.is_quantity_error());
        assert!(err.to_string().starts_with("Недостаточное количество на складе: 10"));
        assert_ne!(err, DomainError::invalid_quantity(10));
    }

    #[test]
    fn not_found_quotes_the_name() {
        let err = DomainError::item_not_found("Xiaomi 14");
        assert!(err.to_string().contains("'Xiaomi 14'"));
        assert!(!err.is_quantity_error());
    }

    #[test]
    fn input_errors_are_classified() {
        assert!(DomainError::InvalidItemList.is_input_error());
        assert!(DomainError::invalid_order_id("  ").is_input_error());
        assert!(!DomainError::invalid_price(-1.0).is_input_error());
    }
}
