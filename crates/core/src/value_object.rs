//! Value objects: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two prices of
//! `100.0` are the same price, no matter which item they belong to.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (e.g. [`Price::discounted`] returns a fresh [`Price`]).
///
/// The constructors of the value objects in this module validate their input,
/// so holding one is proof that the domain invariant holds.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Unit price of an item: a finite decimal, never negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::invalid_price(value));
        }
        // Normalize -0.0 so it never prints with a sign.
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Cost of `quantity` units at this price.
    pub fn total(self, quantity: u64) -> f64 {
        self.0 * quantity as f64
    }

    /// Price after taking `discount` off.
    ///
    /// Fails with [`DomainError::NegativePriceResult`] if the result would be
    /// negative; a validated [`Discount`] never produces one.
    pub fn discounted(self, discount: Discount) -> DomainResult<Self> {
        let price = self.0 * (1.0 - discount.rate());
        if price < 0.0 {
            return Err(DomainError::negative_price_result(price));
        }
        Ok(Self(if price == 0.0 { 0.0 } else { price }))
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Formats a money amount with a fractional part always present:
/// `41250.0`, `0.5`. Non-finite amounts print as `inf` / `NaN`.
pub fn fmt_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&fmt_amount(self.0))
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Discount percentage in `[0, 100]`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Discount(f64);

impl ValueObject for Discount {}

impl Discount {
    pub const MAX_PERCENTAGE: f64 = 100.0;

    pub fn new(percentage: f64) -> DomainResult<Self> {
        // NaN fails both comparisons, so check containment rather than exclusion.
        if !(0.0..=Self::MAX_PERCENTAGE).contains(&percentage) {
            return Err(DomainError::invalid_discount(percentage));
        }
        Ok(Self(percentage))
    }

    /// Fraction of the price taken off (`0.25` for 25%).
    pub fn rate(self) -> f64 {
        self.0 / 100.0
    }
}

impl TryFrom<f64> for Discount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Discount> for f64 {
    fn from(value: Discount) -> Self {
        value.0
    }
}
