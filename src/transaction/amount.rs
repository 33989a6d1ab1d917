//! Monetary amounts with two fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::Error;

/// The number of fractional digits kept for money.
const SCALE: u32 = 2;

/// The largest amount accepted, 99,999,999.99, in cents.
///
/// Keeps sums over many transactions well within the range of SQLite's
/// 64-bit integers.
pub const MAX_AMOUNT_CENTS: i64 = 9_999_999_999;

/// A positive amount of money with exactly two fractional digits.
///
/// Amounts are stored in the database as an integer number of cents so that
/// sums computed by SQLite are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount, rounding half-up to two fractional digits.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::NonPositiveAmount] if `value` rounds to zero or less,
    /// - or [Error::AmountOutOfRange] if `value` rounds to more than
    ///   [MAX_AMOUNT_CENTS] cents.
    pub fn new(value: Decimal) -> Result<Self, Error> {
        let mut rounded = round_money(value);

        if rounded <= Decimal::ZERO {
            return Err(Error::NonPositiveAmount(value));
        }

        rounded.rescale(SCALE);
        match i64::try_from(rounded.mantissa()) {
            Ok(cents) if cents <= MAX_AMOUNT_CENTS => {}
            _ => return Err(Error::AmountOutOfRange(value)),
        }

        Ok(Self(rounded))
    }

    /// Create an amount from a number of cents read from the database.
    pub(crate) fn from_cents(cents: i64) -> Self {
        Self(cents_to_decimal(cents))
    }

    /// The amount as a whole number of cents.
    pub fn cents(&self) -> i64 {
        // The mantissa was checked against MAX_AMOUNT_CENTS on construction.
        self.0.mantissa() as i64
    }

    /// The amount as a decimal number.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// The amount of a single payment when split into `installment_count`
    /// equal payments, rounded half-up to two fractional digits.
    pub fn per_installment(&self, installment_count: u32) -> Decimal {
        let mut installment = round_money(self.0 / Decimal::from(installment_count.max(1)));
        installment.rescale(SCALE);

        installment
    }
}

/// Convert a number of cents into a decimal with two fractional digits.
pub(crate) fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, SCALE)
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod amount_tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use crate::{Error, transaction::Amount};

    use super::MAX_AMOUNT_CENTS;

    fn decimal(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn new_fails_on_zero() {
        assert_eq!(
            Amount::new(Decimal::ZERO),
            Err(Error::NonPositiveAmount(Decimal::ZERO))
        );
    }

    #[test]
    fn new_fails_on_negative() {
        let value = decimal("-10.00");

        assert_eq!(Amount::new(value), Err(Error::NonPositiveAmount(value)));
    }

    #[test]
    fn new_fails_when_rounding_to_zero() {
        let value = decimal("0.004");

        assert_eq!(Amount::new(value), Err(Error::NonPositiveAmount(value)));
    }

    #[test]
    fn new_accepts_largest_amount() {
        let amount = Amount::new(decimal("99999999.99")).unwrap();

        assert_eq!(amount.cents(), MAX_AMOUNT_CENTS);
    }

    #[test]
    fn new_fails_above_largest_amount() {
        let value = decimal("100000000.00");

        assert_eq!(Amount::new(value), Err(Error::AmountOutOfRange(value)));
    }

    #[test]
    fn new_fails_when_rounding_above_largest_amount() {
        let value = decimal("99999999.995");

        assert_eq!(Amount::new(value), Err(Error::AmountOutOfRange(value)));
    }

    #[test]
    fn new_fails_on_huge_amount() {
        let value = decimal("50000000000000000.00");

        assert_eq!(Amount::new(value), Err(Error::AmountOutOfRange(value)));
    }

    #[test]
    fn new_rounds_half_up() {
        let amount = Amount::new(decimal("10.005")).unwrap();

        assert_eq!(amount.cents(), 1001);
    }

    #[test]
    fn new_pads_to_two_digits() {
        let amount = Amount::new(decimal("39.9")).unwrap();

        assert_eq!(amount.cents(), 3990);
        assert_eq!(amount.as_decimal().to_string(), "39.90");
    }

    #[test]
    fn serializes_as_string_with_two_digits() {
        let amount = Amount::new(Decimal::from(5000)).unwrap();

        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"5000.00\"");
    }

    #[test]
    fn per_installment_divides_evenly() {
        let amount = Amount::new(decimal("3600.00")).unwrap();

        let installment = amount.per_installment(12);

        assert_eq!(installment, decimal("300.00"));
        assert_eq!(installment.to_string(), "300.00");
    }

    #[test]
    fn per_installment_rounds_half_up() {
        let amount = Amount::new(decimal("100.00")).unwrap();

        assert_eq!(amount.per_installment(3), decimal("33.33"));
        assert_eq!(
            Amount::new(decimal("0.05")).unwrap().per_installment(2),
            decimal("0.03")
        );
    }
}
