//! The `/transactions/summary` endpoints.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State, rejection::QueryRejection},
};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    AppState, Error,
    db::lock_connection,
    openapi::ErrorResponse,
    summary::{
        CategoryTotal, monthly_balance, monthly_expenses, monthly_income,
        sum_by_essential_and_type, sum_recurring_by_type, totals_by_category,
    },
    timezone::today_in,
    transaction::TransactionType,
};

/// The state needed by the summary endpoints.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The connection to the application's database.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The total expenses for the current month, or `null` if there are none.
#[utoipa::path(
    get,
    path = "/transactions/summary/expenses",
    tag = "summary",
    responses(
        (status = 200, description = "The total expenses so far this month, or null if there are none", body = Option<String>),
        (status = 500, description = "The configured timezone is not valid"),
    )
)]
pub async fn get_monthly_expenses_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Option<Decimal>>, Error> {
    let today = today_in(&state.local_timezone)?;
    let connection = lock_connection(&state.db_connection)?;

    monthly_expenses(today, &connection).map(Json)
}

/// The total income for the current month, or `null` if there is none.
#[utoipa::path(
    get,
    path = "/transactions/summary/income",
    tag = "summary",
    responses(
        (status = 200, description = "The total income so far this month, or null if there is none", body = Option<String>),
        (status = 500, description = "The configured timezone is not valid"),
    )
)]
pub async fn get_monthly_income_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Option<Decimal>>, Error> {
    let today = today_in(&state.local_timezone)?;
    let connection = lock_connection(&state.db_connection)?;

    monthly_income(today, &connection).map(Json)
}

/// Income minus expenses for the current month.
#[utoipa::path(
    get,
    path = "/transactions/summary/balance",
    tag = "summary",
    responses(
        (status = 200, description = "Income minus expenses so far this month", body = String),
        (status = 500, description = "The configured timezone is not valid"),
    )
)]
pub async fn get_monthly_balance_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Decimal>, Error> {
    let today = today_in(&state.local_timezone)?;
    let connection = lock_connection(&state.db_connection)?;

    monthly_balance(today, &connection).map(Json)
}

/// The total of all recurring expenses.
#[utoipa::path(
    get,
    path = "/transactions/summary/recurring",
    tag = "summary",
    responses((status = 200, description = "The total of the recurring expenses, or null if there are none", body = Option<String>))
)]
pub async fn get_recurring_total_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Option<Decimal>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    sum_recurring_by_type(TransactionType::Expense, &connection).map(Json)
}

/// The total of all expenses in essential categories.
#[utoipa::path(
    get,
    path = "/transactions/summary/essential",
    tag = "summary",
    responses((status = 200, description = "The total of the expenses in essential categories, or null if there are none", body = Option<String>))
)]
pub async fn get_essential_total_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Option<Decimal>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    sum_by_essential_and_type(true, TransactionType::Expense, &connection).map(Json)
}

/// The total of all expenses in non-essential categories.
#[utoipa::path(
    get,
    path = "/transactions/summary/discretionary",
    tag = "summary",
    responses((status = 200, description = "The total of the expenses in non-essential categories, or null if there are none", body = Option<String>))
)]
pub async fn get_discretionary_total_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Option<Decimal>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    sum_by_essential_and_type(false, TransactionType::Expense, &connection).map(Json)
}

/// The query string for [get_totals_by_category_endpoint], e.g. `?type=EXPENSE`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TotalsQuery {
    /// The transaction type to total.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// The totals per category for one transaction type, largest first.
#[utoipa::path(
    get,
    path = "/transactions/summary/by-category",
    tag = "summary",
    params(TotalsQuery),
    responses(
        (status = 200, description = "The totals per category, largest first", body = Vec<CategoryTotal>),
        (status = 400, description = "The type is missing or unknown", body = ErrorResponse),
    )
)]
pub async fn get_totals_by_category_endpoint(
    State(state): State<SummaryState>,
    query: Result<Query<TotalsQuery>, QueryRejection>,
) -> Result<Json<Vec<CategoryTotal>>, Error> {
    let Query(query) = query?;
    let connection = lock_connection(&state.db_connection)?;

    totals_by_category(query.transaction_type, &connection).map(Json)
}
