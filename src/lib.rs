//! A backend for tracking personal finances.
//!
//! Spending and income are recorded as transactions, each of which belongs to
//! a category. This library provides a JSON REST API for managing categories
//! and transactions and for summarising them (totals by type, by category, by
//! period, recurring vs. discretionary spending).

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use rust_decimal::Decimal;
use time::Date;
use tokio::signal;

use crate::openapi::ErrorResponse;

mod app_state;
mod category;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod not_found;
mod openapi;
mod routing;
mod seed;
mod summary;
#[cfg(test)]
mod test_utils;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use category::{Category, CategoryName, CategoryType};
pub use database_id::{CategoryId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use openapi::api_doc;
pub use routing::build_router;
pub use seed::{SampleDataCounts, load_sample_data};
pub use timezone::get_local_offset;
pub use transaction::{Amount, Transaction, TransactionType};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A category with the same name already exists.
    ///
    /// Category names are unique, the client should pick another name or
    /// update the existing category.
    #[error("a category with that name already exists")]
    DuplicateCategoryName,

    /// An empty string was used as a transaction description.
    #[error("Transaction description cannot be empty")]
    EmptyDescription,

    /// A transaction amount was zero or negative.
    #[error("{0} is not a positive amount")]
    NonPositiveAmount(Decimal),

    /// A transaction amount was too large to be stored.
    #[error("{0} is too large to be stored as an amount")]
    AmountOutOfRange(Decimal),

    /// The number of installments was zero.
    #[error("the installment count must be at least 1, got {0}")]
    InvalidInstallmentCount(u32),

    /// The current installment was zero or past the last installment.
    #[error("installment {current} is not within 1 and {count}")]
    InvalidCurrentInstallment {
        /// The installment that was given.
        current: u32,
        /// The total number of installments.
        count: u32,
    },

    /// The notes attached to a transaction were longer than the 500 character limit.
    #[error("notes must be at most {max} characters, got {0}", max = transaction::MAX_NOTES_LENGTH)]
    NotesTooLong(usize),

    /// The category ID used to create or update a transaction did not match a
    /// valid category.
    #[error("the category ID {0} does not refer to a valid category")]
    InvalidCategory(CategoryId),

    /// A date range where the start comes after the end.
    #[error("the start date {start} is after the end date {end}")]
    InvalidDateRange {
        /// The first day of the range.
        start: Date,
        /// The last day of the range.
        end: Date,
    },

    /// The request body or query string could not be parsed.
    ///
    /// The string is the description of the parsing error.
    #[error("invalid request: {0}")]
    InvalidPayload(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    && desc.ends_with("category.name") =>
            {
                Error::DuplicateCategoryName
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidPayload(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidPayload(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND.into_response(),
            Error::DuplicateCategoryName => StatusCode::CONFLICT.into_response(),
            Error::EmptyCategoryName
            | Error::EmptyDescription
            | Error::NonPositiveAmount(_)
            | Error::AmountOutOfRange(_)
            | Error::InvalidInstallmentCount(_)
            | Error::InvalidCurrentInstallment { .. }
            | Error::NotesTooLong(_)
            | Error::InvalidCategory(_)
            | Error::InvalidDateRange { .. }
            | Error::InvalidPayload(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
