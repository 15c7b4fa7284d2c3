//! Price type for catalog and basket amounts.
//!
//! The store trades in whole "synapses", so amounts are plain unsigned
//! integers with no fractional unit. A product without a price is modelled as
//! `Option<Price>::None` and rendered as priceless.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Unit suffix used when rendering an amount.
pub const CURRENCY_LABEL: &str = "синапсов";

/// Label shown for products that have no price.
pub const PRICELESS_LABEL: &str = "Бесценно";

/// An amount of synapses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from a whole amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Add without wrapping; saturates at `u64::MAX`.
    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }

    /// Sum a sequence of optional prices, counting a missing price as zero.
    pub fn total_of<I>(prices: I) -> Price
    where
        I: IntoIterator<Item = Option<Price>>,
    {
        prices.into_iter().flatten().sum()
    }

    /// Format as a display string (e.g., "750 синапсов").
    pub fn display(&self) -> String {
        format!("{} {}", self.0, CURRENCY_LABEL)
    }

    /// Format an optional price, using the priceless label for `None`.
    pub fn label(price: Option<Price>) -> String {
        match price {
            Some(p) => p.display(),
            None => PRICELESS_LABEL.to_string(),
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        self.saturating_add(other)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), Add::add)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
