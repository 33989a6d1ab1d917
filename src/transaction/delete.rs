use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    database_id::TransactionId,
    db::lock_connection,
    transaction::{TransactionState, delete_transaction},
};

/// A route handler for deleting a transaction.
///
/// Responds with 204 on success and 404 if the transaction does not exist.
#[utoipa::path(
    delete,
    path = "/transactions/{transaction_id}",
    tag = "transactions",
    params(("transaction_id" = i64, Path, description = "The ID of the transaction")),
    responses(
        (status = 204, description = "The transaction was deleted"),
        (status = 404, description = "The transaction does not exist"),
    )
)]
pub async fn delete_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<TransactionState>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    delete_transaction(transaction_id, &connection)?;
    tracing::info!("Deleted transaction {transaction_id}");

    Ok(StatusCode::NO_CONTENT)
}
