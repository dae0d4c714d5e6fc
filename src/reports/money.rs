//! Monetary amount formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// An amount rendered with a currency prefix and exactly two decimal places.
///
/// Half-cent values round away from zero.
///
/// # Example
///
/// ```
/// use payroll_events::reports::Money;
/// use rust_decimal::Decimal;
///
/// let money = Money::new("$", Decimal::new(6000, 0));
/// assert_eq!(money.to_string(), "$6000.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money<'a> {
    currency: &'a str,
    amount: Decimal,
}

impl<'a> Money<'a> {
    /// Pairs an amount with its currency prefix.
    pub fn new(currency: &'a str, amount: Decimal) -> Self {
        Self { currency, amount }
    }
}

impl fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{}{:.2}", self.currency, rounded)
    }
}
