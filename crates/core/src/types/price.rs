//! Type-safe price representation.
//!
//! The storefront trades in a single currency (TWD), so a price is an
//! integer amount in the smallest currency unit. Arithmetic saturates
//! rather than wrapping; cart totals for a four-product catalog are
//! nowhere near `u64::MAX`, but an overflow must never corrupt a total.

use serde::{Deserialize, Serialize};

/// A monetary amount in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A zero amount, the total of an empty cart.
    pub const ZERO: Self = Self(0);

    /// Create a new price from an amount in the smallest currency unit.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The total for `quantity` units at this price.
    #[must_use]
    pub const fn line_total(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Saturating addition of two amounts.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NT$ {}", self.0)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}
