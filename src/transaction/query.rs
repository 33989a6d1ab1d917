//! Database queries for listing and filtering transactions.

use rusqlite::{Connection, Params, named_params};

use crate::{
    Error,
    database_id::CategoryId,
    transaction::{
        DateRange, Transaction, TransactionType,
        core::{SELECT_TRANSACTION, map_transaction_row},
    },
};

/// Newest first, then by ID to keep the order stable after updates.
const ORDER_BY_DATE: &str = "ORDER BY t.date DESC, t.id ASC";

fn select_transactions<P: Params>(
    filter: &str,
    order: &str,
    params: P,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!("{SELECT_TRANSACTION} {filter} {order}"))?
        .query_map(params, map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(Error::from))
        .collect()
}

/// Retrieve every transaction, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    select_transactions("", ORDER_BY_DATE, [], connection)
}

/// Retrieve the income or the expenses, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions_by_type(
    transaction_type: TransactionType,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    select_transactions(
        "WHERE t.transaction_type = :type",
        ORDER_BY_DATE,
        named_params! {":type": transaction_type},
        connection,
    )
}

/// Retrieve the transactions whose recurring flag equals `recurring`, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions_by_recurring(
    recurring: bool,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    select_transactions(
        "WHERE t.recurring = :recurring",
        ORDER_BY_DATE,
        named_params! {":recurring": recurring},
        connection,
    )
}

/// Retrieve the transactions of a category, newest first.
///
/// An unknown category gives an empty list rather than an error.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions_by_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    select_transactions(
        "WHERE t.category_id = :category_id",
        ORDER_BY_DATE,
        named_params! {":category_id": category_id},
        connection,
    )
}

/// Retrieve the transactions dated within `range`, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions_in_range(
    range: DateRange,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    select_transactions(
        "WHERE t.date BETWEEN :start AND :end",
        ORDER_BY_DATE,
        named_params! {":start": range.start(), ":end": range.end()},
        connection,
    )
}

/// Retrieve the income or expenses dated within `range`, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions_by_type_in_range(
    transaction_type: TransactionType,
    range: DateRange,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    select_transactions(
        "WHERE t.transaction_type = :type AND t.date BETWEEN :start AND :end",
        ORDER_BY_DATE,
        named_params! {
            ":type": transaction_type,
            ":start": range.start(),
            ":end": range.end(),
        },
        connection,
    )
}

/// Retrieve the expenses marked as recurring, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_recurring_expenses(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    select_transactions(
        "WHERE t.transaction_type = :type AND t.recurring = 1",
        ORDER_BY_DATE,
        named_params! {":type": TransactionType::Expense},
        connection,
    )
}

/// Retrieve the transactions in non-essential categories, largest amount first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_discretionary_transactions(
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    select_transactions(
        "WHERE c.essential = 0",
        "ORDER BY t.amount_cents DESC, t.id ASC",
        [],
        connection,
    )
}

/// Retrieve the transactions split into more than one installment, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_installment_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    select_transactions(
        "WHERE t.installment_count > 1",
        ORDER_BY_DATE,
        [],
        connection,
    )
}
