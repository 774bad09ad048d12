//! Inventory domain module.
//!
//! An in-memory mapping from item name to stock record, the validated
//! operations that change it, and the [`Warehouse`] boundary that reports to
//! the operator. No IO beyond operator notices, no persistence.

pub mod notice;
pub mod order;
pub mod record;
pub mod store;
pub mod warehouse;

pub use notice::{CompletionNotice, ConsoleNotifier, Notify, RecordingNotifier};
pub use order::OrderReceipt;
pub use record::StockRecord;
pub use store::{DEFAULT_PRICE, DEFAULT_QUANTITY, Inventory, ItemUpdate};
pub use warehouse::{Warehouse, calculate_total};
