//! Aggregate queries over the transaction table.
//!
//! Sums are computed in cents by SQLite and converted to decimals at the end.
//! A sum over no rows is `None` rather than zero.

use rusqlite::{Connection, named_params};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    Error,
    transaction::{DateRange, TransactionType, cents_to_decimal},
};

/// The total amount of a transaction type spent or earned in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryTotal {
    /// The category name.
    pub category: String,
    /// The sum of the full amounts of the category's transactions.
    #[schema(value_type = String, example = "4000.00")]
    pub total: Decimal,
}

/// The total in cents of the transactions of `transaction_type` dated within `range`.
pub(super) fn sum_cents_by_type_in_range(
    transaction_type: TransactionType,
    range: DateRange,
    connection: &Connection,
) -> Result<Option<i64>, Error> {
    connection
        .query_row(
            "SELECT SUM(amount_cents) FROM \"transaction\" \
            WHERE transaction_type = :type AND date BETWEEN :start AND :end",
            named_params! {
                ":type": transaction_type,
                ":start": range.start(),
                ":end": range.end(),
            },
            |row| row.get(0),
        )
        .map_err(Error::from)
}

/// Sum the transactions of `transaction_type` dated within `range`.
///
/// Installments count with their full amount.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn sum_by_type_in_range(
    transaction_type: TransactionType,
    range: DateRange,
    connection: &Connection,
) -> Result<Option<Decimal>, Error> {
    sum_cents_by_type_in_range(transaction_type, range, connection)
        .map(|cents| cents.map(cents_to_decimal))
}

/// Sum the recurring transactions of `transaction_type`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn sum_recurring_by_type(
    transaction_type: TransactionType,
    connection: &Connection,
) -> Result<Option<Decimal>, Error> {
    let cents: Option<i64> = connection.query_row(
        "SELECT SUM(amount_cents) FROM \"transaction\" \
        WHERE transaction_type = :type AND recurring = 1",
        named_params! {":type": transaction_type},
        |row| row.get(0),
    )?;

    Ok(cents.map(cents_to_decimal))
}

/// Sum the transactions of `transaction_type` whose category's essential
/// flag equals `essential`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn sum_by_essential_and_type(
    essential: bool,
    transaction_type: TransactionType,
    connection: &Connection,
) -> Result<Option<Decimal>, Error> {
    let cents: Option<i64> = connection.query_row(
        "SELECT SUM(t.amount_cents) FROM \"transaction\" t \
        INNER JOIN category c ON t.category_id = c.id \
        WHERE c.essential = :essential AND t.transaction_type = :type",
        named_params! {":essential": essential, ":type": transaction_type},
        |row| row.get(0),
    )?;

    Ok(cents.map(cents_to_decimal))
}

/// Total the transactions of `transaction_type` per category, largest total first.
///
/// Categories without any matching transactions are left out. Ties are
/// ordered by category name.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn totals_by_category(
    transaction_type: TransactionType,
    connection: &Connection,
) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT c.name, SUM(t.amount_cents) AS total FROM \"transaction\" t \
            INNER JOIN category c ON t.category_id = c.id \
            WHERE t.transaction_type = :type \
            GROUP BY c.name \
            ORDER BY total DESC, c.name ASC",
        )?
        .query_map(named_params! {":type": transaction_type}, |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: cents_to_decimal(row.get(1)?),
            })
        })?
        .map(|total_result| total_result.map_err(Error::from))
        .collect()
}
