//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the currency. Catalog prices
//! never pass through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Iranian toman, the unit the storefront prices in.
    #[default]
    Toman,
    /// Iranian rial (ten to the toman).
    Rial,
    /// US dollar, in cents.
    Usd,
}

impl Currency {
    /// Get the currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Toman => "IRT",
            Currency::Rial => "IRR",
            Currency::Usd => "USD",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "IRT" => Some(Currency::Toman),
            "IRR" => Some(Currency::Rial),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a toman amount.
    pub fn toman(amount: i64) -> Self {
        Self::new(amount, Currency::Toman)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Try to add another Money value.
    ///
    /// Returns None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_add(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_sub(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None on currency mismatch or overflow.
    pub fn try_sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.fold(Some(Money::zero(currency)), |acc, m| acc?.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_addition() {
        let a = Money::toman(1000);
        let b = Money::toman(500);
        assert_eq!(a.try_add(&b), Some(Money::toman(1500)));
    }

    #[test]
    fn test_money_currency_mismatch() {
        let a = Money::toman(1000);
        let b = Money::new(1000, Currency::Usd);
        assert_eq!(a.try_add(&b), None);
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::toman(i64::MAX);
        assert_eq!(m.try_multiply(2), None);
        assert_eq!(Money::toman(250).try_multiply(4), Some(Money::toman(1000)));
    }

    #[test]
    fn test_money_sum() {
        let items = [Money::toman(100), Money::toman(250)];
        let total = Money::try_sum(items.iter(), Currency::Toman).unwrap();
        assert_eq!(total.amount, 350);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::toman(2990000).to_string(), "2990000 IRT");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("irt"), Some(Currency::Toman));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
