//! Price type for MYR amounts.
//!
//! Uses sen-based integer representation to avoid floating-point precision
//! issues, while (de)serializing as the decimal ringgit amount the catalog
//! JSON carries (`"price": 189`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A price in Malaysian ringgit, stored in sen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Price {
    sen: i64,
}

impl Price {
    /// Create a price from sen.
    pub fn from_sen(sen: i64) -> Self {
        Self { sen }
    }

    /// Create a price from a decimal ringgit amount.
    ///
    /// ```
    /// use rig_commerce::Price;
    /// assert_eq!(Price::from_ringgit(189.0).sen(), 18900);
    /// ```
    pub fn from_ringgit(amount: f64) -> Self {
        Self {
            sen: (amount * 100.0).round() as i64,
        }
    }

    /// A zero price.
    pub fn zero() -> Self {
        Self { sen: 0 }
    }

    /// Amount in sen.
    pub fn sen(&self) -> i64 {
        self.sen
    }

    /// Amount as decimal ringgit.
    pub fn to_ringgit(&self) -> f64 {
        self.sen as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.sen == 0
    }

    /// Add another price, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Price) -> Price {
        Price {
            sen: self.sen.saturating_add(other.sen),
        }
    }

    /// Sum an iterator of prices.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Price>) -> Price {
        iter.fold(Price::zero(), |acc, p| acc.saturating_add(*p))
    }

    /// Format as a display string without separator between symbol and
    /// amount (e.g. "RM1,234.56"). Locale-specific spacing is applied by
    /// the i18n layer.
    pub fn display(&self) -> String {
        let negative = self.sen < 0;
        let abs = self.sen.unsigned_abs();
        let whole = abs / 100;
        let cents = abs % 100;
        format!(
            "{}RM{}.{:02}",
            if negative { "-" } else { "" },
            group_thousands(whole),
            cents
        )
    }
}

/// Insert comma separators into a whole-number amount.
fn group_thousands(mut value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    let mut out = value.to_string();
    for group in groups.iter().rev() {
        out.push(',');
        out.push_str(group);
    }
    out
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price::from_ringgit(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.to_ringgit()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ringgit() {
        assert_eq!(Price::from_ringgit(189.0).sen(), 18900);
        assert_eq!(Price::from_ringgit(49.99).sen(), 4999);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_ringgit(189.0).display(), "RM189.00");
        assert_eq!(Price::from_ringgit(1234.5).display(), "RM1,234.50");
        assert_eq!(Price::from_sen(1_234_567_89).display(), "RM1,234,567.89");
        assert_eq!(Price::zero().display(), "RM0.00");
    }

    #[test]
    fn test_sum() {
        let prices = [Price::from_ringgit(10.0), Price::from_ringgit(2.5)];
        assert_eq!(Price::sum(prices.iter()).sen(), 1250);
    }

    #[test]
    fn test_serializes_as_decimal() {
        let json = serde_json::to_string(&Price::from_ringgit(189.0)).unwrap();
        assert_eq!(json, "189.0");

        let price: Price = serde_json::from_str("189").unwrap();
        assert_eq!(price.sen(), 18900);
    }
}
