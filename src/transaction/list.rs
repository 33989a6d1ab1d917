//! Endpoints for listing and filtering transactions.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use rusqlite::Connection;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    Error,
    database_id::CategoryId,
    db::lock_connection,
    openapi::ErrorResponse,
    transaction::{
        DateRange, PeriodQuery, Transaction, TransactionResponse, TransactionState,
        TransactionType,
        get_all_transactions, get_discretionary_transactions, get_installment_transactions,
        get_recurring_expenses, get_transactions_by_category, get_transactions_by_recurring,
        get_transactions_by_type, get_transactions_by_type_in_range, get_transactions_in_range,
    },
};

fn query_transactions<F>(
    state: &TransactionState,
    query: F,
) -> Result<Json<Vec<Transaction>>, Error>
where
    F: FnOnce(&Connection) -> Result<Vec<Transaction>, Error>,
{
    let connection = lock_connection(&state.db_connection)?;

    query(&connection).map(Json)
}

/// The optional query string for the full transaction list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only list transactions whose recurring flag matches.
    pub recurring: Option<bool>,
}

/// List every transaction, newest first.
///
/// `?recurring=true` or `?recurring=false` narrows the list by the recurring flag.
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "transactions",
    params(ListQuery),
    responses(
        (status = 200, description = "All transactions, newest first", body = Vec<TransactionResponse>),
        (status = 400, description = "The query string is invalid", body = ErrorResponse),
    )
)]
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let Query(query) = query?;

    query_transactions(&state, |connection| match query.recurring {
        Some(recurring) => get_transactions_by_recurring(recurring, connection),
        None => get_all_transactions(connection),
    })
}

/// List the expenses, newest first.
#[utoipa::path(
    get,
    path = "/transactions/expenses",
    tag = "transactions",
    responses((status = 200, description = "The expenses, newest first", body = Vec<TransactionResponse>))
)]
pub async fn get_expenses_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    query_transactions(&state, |connection| {
        get_transactions_by_type(TransactionType::Expense, connection)
    })
}

/// List the income, newest first.
#[utoipa::path(
    get,
    path = "/transactions/income",
    tag = "transactions",
    responses((status = 200, description = "The income, newest first", body = Vec<TransactionResponse>))
)]
pub async fn get_income_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    query_transactions(&state, |connection| {
        get_transactions_by_type(TransactionType::Income, connection)
    })
}

/// List the recurring expenses, newest first.
#[utoipa::path(
    get,
    path = "/transactions/recurring",
    tag = "transactions",
    responses((status = 200, description = "The recurring expenses, newest first", body = Vec<TransactionResponse>))
)]
pub async fn get_recurring_expenses_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    query_transactions(&state, get_recurring_expenses)
}

/// List the transactions in non-essential categories, largest first.
#[utoipa::path(
    get,
    path = "/transactions/discretionary",
    tag = "transactions",
    responses((status = 200, description = "The transactions in non-essential categories, largest first", body = Vec<TransactionResponse>))
)]
pub async fn get_discretionary_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    query_transactions(&state, get_discretionary_transactions)
}

/// List the transactions paid in more than one installment, newest first.
#[utoipa::path(
    get,
    path = "/transactions/installments",
    tag = "transactions",
    responses((status = 200, description = "The transactions paid in installments, newest first", body = Vec<TransactionResponse>))
)]
pub async fn get_installment_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    query_transactions(&state, get_installment_transactions)
}

/// List the transactions between two dates (inclusive), optionally of one type.
///
/// Responds with 400 if a date is missing or malformed or if `start` is after `end`.
#[utoipa::path(
    get,
    path = "/transactions/period",
    tag = "transactions",
    params(PeriodQuery),
    responses(
        (status = 200, description = "The transactions in the period, newest first", body = Vec<TransactionResponse>),
        (status = 400, description = "A date is missing or malformed or the start is after the end", body = ErrorResponse),
    )
)]
pub async fn get_transactions_in_period_endpoint(
    State(state): State<TransactionState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let Query(query) = query?;
    let range = DateRange::new(query.start, query.end)?;

    query_transactions(&state, |connection| match query.transaction_type {
        Some(transaction_type) => {
            get_transactions_by_type_in_range(transaction_type, range, connection)
        }
        None => get_transactions_in_range(range, connection),
    })
}

/// List the transactions of one category, newest first.
///
/// An unknown category gives an empty list.
#[utoipa::path(
    get,
    path = "/transactions/category/{category_id}",
    tag = "transactions",
    params(("category_id" = i64, Path, description = "The ID of the category")),
    responses((status = 200, description = "The transactions of the category, newest first", body = Vec<TransactionResponse>))
)]
pub async fn get_transactions_by_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    query_transactions(&state, |connection| {
        get_transactions_by_category(category_id, connection)
    })
}
