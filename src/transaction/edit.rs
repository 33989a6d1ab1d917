//! Endpoints for reading and replacing a single transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    Error,
    database_id::TransactionId,
    db::lock_connection,
    openapi::ErrorResponse,
    transaction::{
        Transaction, TransactionData, TransactionResponse, TransactionState, get_transaction,
        update_transaction,
    },
};

/// Get a transaction by its ID, or 404 if it does not exist.
#[utoipa::path(
    get,
    path = "/transactions/{transaction_id}",
    tag = "transactions",
    params(("transaction_id" = i64, Path, description = "The ID of the transaction")),
    responses(
        (status = 200, description = "The transaction", body = TransactionResponse),
        (status = 404, description = "The transaction does not exist"),
    )
)]
pub async fn get_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<TransactionState>,
) -> Result<Json<Transaction>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_transaction(transaction_id, &connection).map(Json)
}

/// Replace every field of a transaction.
///
/// Fields left out of the body take their defaults, so e.g. omitting
/// `recurring` clears the flag.
#[utoipa::path(
    put,
    path = "/transactions/{transaction_id}",
    tag = "transactions",
    params(("transaction_id" = i64, Path, description = "The ID of the transaction")),
    request_body = TransactionData,
    responses(
        (status = 200, description = "The updated transaction", body = TransactionResponse),
        (status = 400, description = "The request is invalid or names an unknown category", body = ErrorResponse),
        (status = 404, description = "The transaction does not exist"),
    )
)]
pub async fn update_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionData>, JsonRejection>,
) -> Result<Json<Transaction>, Error> {
    let Json(data) = payload?;
    let builder = data.into_builder()?;

    let connection = lock_connection(&state.db_connection)?;
    let transaction = update_transaction(transaction_id, builder, &connection)?;

    tracing::info!("Updated transaction {transaction_id}");

    Ok(Json(transaction))
}

#[cfg(test)]
mod edit_transaction_endpoint_tests {
    use axum::{
        Json,
        extract::{Path, State},
    };
    use serde_json::json;
    use time::macros::date;

    use crate::{
        Error,
        category::CategoryType,
        test_utils::{amount, create_test_category, get_test_connection, into_shared},
        transaction::{
            Transaction, TransactionState, TransactionType, create_transaction,
            get_transaction_endpoint, update_transaction_endpoint,
        },
    };

    fn get_state_with_transaction() -> (TransactionState, Transaction) {
        let connection = get_test_connection();
        let category =
            create_test_category("Alimentação", true, CategoryType::EssentialExpense, &connection);
        let transaction = create_transaction(
            Transaction::build(
                "Supermercado",
                amount("400.00"),
                date!(2026 - 02 - 10),
                TransactionType::Expense,
                category.id,
            )
            .recurring(true),
            &connection,
        )
        .unwrap();

        (
            TransactionState {
                db_connection: into_shared(connection),
            },
            transaction,
        )
    }

    #[tokio::test]
    async fn get_returns_transaction() {
        let (state, transaction) = get_state_with_transaction();

        let Json(got) = get_transaction_endpoint(Path(transaction.id), State(state))
            .await
            .unwrap();

        assert_eq!(got, transaction);
    }

    #[tokio::test]
    async fn get_missing_transaction_is_not_found() {
        let (state, _) = get_state_with_transaction();

        let result = get_transaction_endpoint(Path(999), State(state)).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn update_replaces_transaction() {
        let (state, transaction) = get_state_with_transaction();
        let data = serde_json::from_value(json!({
            "description": "Feira",
            "amount": "55.5",
            "date": "2026-02-11",
            "type": "EXPENSE",
            "category_id": transaction.category.id
        }))
        .unwrap();

        let Json(got) =
            update_transaction_endpoint(Path(transaction.id), State(state), Ok(Json(data)))
                .await
                .unwrap();

        assert_eq!(got.id, transaction.id);
        assert_eq!(got.description, "Feira");
        assert_eq!(got.amount, amount("55.50"));
        assert_eq!(got.date, date!(2026 - 02 - 11));
        assert!(!got.recurring);
    }

    #[tokio::test]
    async fn update_missing_transaction_is_not_found() {
        let (state, transaction) = get_state_with_transaction();
        let data = serde_json::from_value(json!({
            "description": "Feira",
            "amount": "55.50",
            "date": "2026-02-11",
            "type": "EXPENSE",
            "category_id": transaction.category.id
        }))
        .unwrap();

        let result = update_transaction_endpoint(Path(999), State(state), Ok(Json(data))).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }
}
