//! Type-safe price representation using integer arithmetic.
//!
//! The shop operates in a single fixed locale; every amount is a whole number
//! of rubles. Line totals and cart totals are computed with plain integer
//! multiplication and addition, never floating point.

use serde::{Deserialize, Serialize};

/// Currency suffix used for display.
const CURRENCY_SUFFIX: &str = "₽";

/// A price in whole rubles.
///
/// Displayed as `"220 ₽"` with no decimal places and no digit grouping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from a whole-ruble amount.
    #[must_use]
    pub const fn rub(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount in rubles.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Whether the price is zero.
    ///
    /// Catalogue items must carry a positive price; this is checked at
    /// catalogue construction.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Line total for `quantity` units, saturating on overflow.
    #[must_use]
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Sum of an iterator of prices, saturating on overflow.
    #[must_use]
    pub fn total(prices: impl IntoIterator<Item = Self>) -> Self {
        Self(
            prices
                .into_iter()
                .fold(0u64, |acc, p| acc.saturating_add(p.0)),
        )
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {CURRENCY_SUFFIX}", self.0)
    }
}
