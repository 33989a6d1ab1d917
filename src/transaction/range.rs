//! Inclusive date ranges for filtering transactions.

use serde::Deserialize;
use time::{Date, Duration};
use utoipa::IntoParams;

use crate::{Error, transaction::TransactionType};

/// An inclusive range of dates where `start` is never after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range covering `start` through `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidDateRange] if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidDateRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// The range from the first day of the month containing `today` up to
    /// and including `today`.
    pub fn month_to_date(today: Date) -> Self {
        let start = today - Duration::days(i64::from(today.day()) - 1);

        Self { start, end: today }
    }

    /// The first day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last day of the range.
    pub fn end(&self) -> Date {
        self.end
    }
}

/// The query string for listing transactions in a period,
/// e.g. `?start=2026-02-01&end=2026-02-28&type=EXPENSE`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// The first day of the period.
    pub start: Date,
    /// The last day of the period.
    pub end: Date,
    /// Only list transactions of this type, if given.
    #[serde(default, rename = "type")]
    pub transaction_type: Option<TransactionType>,
}

#[cfg(test)]
mod date_range_tests {
    use time::macros::date;

    use crate::{Error, transaction::DateRange};

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::new(date!(2026 - 02 - 10), date!(2026 - 02 - 10)).unwrap();

        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn rejects_start_after_end() {
        let result = DateRange::new(date!(2026 - 03 - 01), date!(2026 - 02 - 01));

        assert_eq!(
            result,
            Err(Error::InvalidDateRange {
                start: date!(2026 - 03 - 01),
                end: date!(2026 - 02 - 01)
            })
        );
    }

    #[test]
    fn month_to_date_starts_on_first() {
        let range = DateRange::month_to_date(date!(2026 - 02 - 17));

        assert_eq!(range.start(), date!(2026 - 02 - 01));
        assert_eq!(range.end(), date!(2026 - 02 - 17));
    }

    #[test]
    fn month_to_date_on_first_day() {
        let range = DateRange::month_to_date(date!(2026 - 03 - 01));

        assert_eq!(range.start(), date!(2026 - 03 - 01));
        assert_eq!(range.end(), date!(2026 - 03 - 01));
    }
}
