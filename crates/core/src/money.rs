//! Monetary amounts in Bolivianos.

use serde::{Deserialize, Serialize};

/// An amount of money in centavos (smallest currency unit).
///
/// Amounts are unsigned, so a negative price is unrepresentable. Arithmetic
/// saturates at the numeric bounds instead of wrapping.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    /// Whole Bolivianos, no centavo part.
    pub fn from_bolivianos(bolivianos: u64) -> Self {
        Self(bolivianos.saturating_mul(100))
    }

    pub fn centavos(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Line total: unit price times quantity.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Integer percentage of this amount, floored to whole centavos.
    ///
    /// Used for tax computation (e.g. `percent(13)` for IVA), where the
    /// convention is to round in the payer's favor.
    pub fn percent(self, rate: u64) -> Money {
        let scaled = u128::from(self.0) * u128::from(rate) / 100;
        Money(u64::try_from(scaled).unwrap_or(u64::MAX))
    }
}

impl core::fmt::Display for Money {
    /// Renders as `Bs. <units>.<centavos>` with exactly two decimals.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Bs. {}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}
