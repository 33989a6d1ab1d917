//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header::LOCATION},
};

use crate::{
    Error,
    db::lock_connection,
    endpoints::{self, format_endpoint},
    openapi::ErrorResponse,
    transaction::{
        Transaction, TransactionData, TransactionResponse, TransactionState, create_transaction,
    },
};

/// A route handler for creating a new transaction.
///
/// Responds with 201 and the stored transaction, or 400 if the body is
/// invalid or names a category that does not exist.
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "transactions",
    request_body = TransactionData,
    responses(
        (status = 201, description = "The transaction was created", body = TransactionResponse,
            headers(("location" = String, description = "The URL of the new transaction"))),
        (status = 400, description = "The request is invalid or names an unknown category", body = ErrorResponse),
    )
)]
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionData>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Transaction>), Error> {
    let Json(data) = payload?;
    let builder = data.into_builder()?;

    let connection = lock_connection(&state.db_connection)?;
    let transaction = create_transaction(builder, &connection)?;

    tracing::info!(
        "Created transaction {} for {} in category {}",
        transaction.id,
        transaction.amount.as_decimal(),
        transaction.category.id
    );

    let location = format_endpoint(endpoints::TRANSACTION, transaction.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(transaction)))
}
