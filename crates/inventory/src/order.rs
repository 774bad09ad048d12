use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, DomainResult};

/// Record of a completed order: the item occurrences the order requested.
///
/// Stock that ran out mid-order is not tracked here; see
/// [`Inventory::try_complete_order`](crate::Inventory::try_complete_order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub items: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

impl OrderReceipt {
    /// Number of units requested (repeated names count once per occurrence).
    pub fn units(&self) -> usize {
        self.items.len()
    }
}

/// Rejects malformed orders before the store is consulted.
pub(crate) fn validate_envelope<S: AsRef<str>>(order_id: &str, items: &[S]) -> DomainResult<()> {
    if order_id.trim().is_empty() {
        return Err(DomainError::invalid_order_id(order_id));
    }
    if items.is_empty() {
        return Err(DomainError::InvalidItemList);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_order_id_is_rejected() {
        let err = validate_envelope("   ", &["A"]).unwrap_err();
        assert_eq!(err, DomainError::invalid_order_id("   "));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let items: [&str; 0] = [];
        assert_eq!(
            validate_envelope("order_1", &items),
            Err(DomainError::InvalidItemList)
        );
    }

    #[test]
    fn order_id_is_checked_before_items() {
        let items: [&str; 0] = [];
        assert!(matches!(
            validate_envelope("", &items),
            Err(DomainError::InvalidOrderId { .. })
        ));
    }

    #[test]
    fn receipt_counts_every_occurrence() {
        let receipt = OrderReceipt {
            order_id: "order_1".to_string(),
            items: vec!["A".to_string(), "A".to_string(), "B".to_string()],
            completed_at: Utc::now(),
        };
        assert_eq!(receipt.units(), 3);
    }
}
