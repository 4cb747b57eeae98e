use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Currency amount held in minor units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Decimal amount, e.g. 899 cents -> 8.99
    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    pub fn saturating_mul(self, factor: u64) -> Money {
        Money(self.0.saturating_mul(factor))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.saturating_add(rhs)
    }
}

impl Mul<u64> for Money {
    type Output = Money;

    fn mul(self, rhs: u64) -> Money {
        self.saturating_mul(rhs)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Money::from_cents(1848).to_string(), "$18.48");
        assert_eq!(Money::from_cents(50).to_string(), "$0.50");
        assert_eq!(Money::from_cents(2400).to_string(), "$24.00");
    }

    #[test]
    fn test_arithmetic() {
        let price = Money::from_cents(899);
        assert_eq!(price * 2 + Money::from_cents(50), Money::from_cents(1848));
        assert!((Money::from_cents(1848).as_decimal() - 18.48).abs() < 1e-9);
    }
}
