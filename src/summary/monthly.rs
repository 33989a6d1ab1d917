//! Totals for the current calendar month.

use rusqlite::Connection;
use rust_decimal::Decimal;
use time::Date;

use crate::{
    Error,
    summary::db::{sum_by_type_in_range, sum_cents_by_type_in_range},
    transaction::{DateRange, TransactionType, cents_to_decimal},
};

/// The total expenses from the first of the month up to and including `today`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn monthly_expenses(today: Date, connection: &Connection) -> Result<Option<Decimal>, Error> {
    sum_by_type_in_range(
        TransactionType::Expense,
        DateRange::month_to_date(today),
        connection,
    )
}

/// The total income from the first of the month up to and including `today`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn monthly_income(today: Date, connection: &Connection) -> Result<Option<Decimal>, Error> {
    sum_by_type_in_range(
        TransactionType::Income,
        DateRange::month_to_date(today),
        connection,
    )
}

/// Income minus expenses for the month so far, where a month without income
/// or without expenses counts that side as zero.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn monthly_balance(today: Date, connection: &Connection) -> Result<Decimal, Error> {
    let range = DateRange::month_to_date(today);
    let income = sum_cents_by_type_in_range(TransactionType::Income, range, connection)?;
    let expenses = sum_cents_by_type_in_range(TransactionType::Expense, range, connection)?;

    Ok(cents_to_decimal(
        income.unwrap_or(0) - expenses.unwrap_or(0),
    ))
}
