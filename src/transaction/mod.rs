//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing, querying, and managing transactions
//! - JSON handlers for the `/transactions` endpoints

mod amount;
mod core;
mod create;
mod delete;
mod edit;
mod form;
mod list;
mod query;
mod range;
mod state;

use utoipa::OpenApi;

pub(crate) use amount::cents_to_decimal;
pub use amount::Amount;
pub use core::{
    Transaction, TransactionBuilder, TransactionResponse, TransactionType, create_transaction,
    create_transaction_table, delete_transaction, get_transaction, map_transaction_row,
    update_transaction,
};
pub use create::create_transaction_endpoint;
pub use delete::delete_transaction_endpoint;
pub use edit::{get_transaction_endpoint, update_transaction_endpoint};
pub use form::{MAX_NOTES_LENGTH, TransactionData};
pub use list::{
    ListQuery, get_discretionary_transactions_endpoint, get_expenses_endpoint,
    get_income_endpoint, get_installment_transactions_endpoint,
    get_recurring_expenses_endpoint, get_transactions_by_category_endpoint,
    get_transactions_endpoint, get_transactions_in_period_endpoint,
};
pub use query::{
    get_all_transactions, get_discretionary_transactions, get_installment_transactions,
    get_recurring_expenses, get_transactions_by_category, get_transactions_by_recurring,
    get_transactions_by_type, get_transactions_by_type_in_range, get_transactions_in_range,
};
pub use range::{DateRange, PeriodQuery};
pub use state::TransactionState;

#[cfg(test)]
pub use core::count_transactions;

/// The OpenAPI description of the `/transactions` endpoints, excluding the summaries.
#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_transaction_endpoint,
        edit::get_transaction_endpoint,
        edit::update_transaction_endpoint,
        delete::delete_transaction_endpoint,
        list::get_transactions_endpoint,
        list::get_expenses_endpoint,
        list::get_income_endpoint,
        list::get_recurring_expenses_endpoint,
        list::get_discretionary_transactions_endpoint,
        list::get_installment_transactions_endpoint,
        list::get_transactions_in_period_endpoint,
        list::get_transactions_by_category_endpoint,
    ),
    components(schemas(TransactionData, TransactionResponse, TransactionType))
)]
pub struct TransactionApi;
