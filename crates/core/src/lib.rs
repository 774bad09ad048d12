//! `warehouse-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging): the
//! error taxonomy shared by every warehouse operation and the validated value
//! objects item records are built from.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::{Discount, Price, ValueObject, fmt_amount};
