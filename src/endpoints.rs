//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/categories/{category_id}', use [format_endpoint].

use std::fmt::Display;

/// The route to list and create categories.
pub const CATEGORIES: &str = "/categories";
/// The route to access a single category.
pub const CATEGORY: &str = "/categories/{category_id}";
/// The route for listing the categories of one type, e.g. `/categories/type/FIXED_INCOME`.
pub const CATEGORIES_BY_TYPE: &str = "/categories/type/{category_type}";
/// The route for listing essential or non-essential categories.
pub const CATEGORIES_BY_ESSENTIAL: &str = "/categories/essential/{essential}";
/// The route for listing fixed income categories.
pub const FIXED_INCOME_CATEGORIES: &str = "/categories/fixed-income";
/// The route for listing variable income categories.
pub const VARIABLE_INCOME_CATEGORIES: &str = "/categories/variable-income";
/// The route for listing essential expense categories.
pub const ESSENTIAL_EXPENSE_CATEGORIES: &str = "/categories/essential-expenses";
/// The route for listing discretionary expense categories.
pub const DISCRETIONARY_EXPENSE_CATEGORIES: &str = "/categories/discretionary-expenses";
/// The route for listing invisible expense categories.
pub const INVISIBLE_EXPENSE_CATEGORIES: &str = "/categories/invisible-expenses";
/// The route for counting essential and non-essential categories.
pub const CATEGORY_COUNT: &str = "/categories/count";

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route for listing expenses.
pub const EXPENSES: &str = "/transactions/expenses";
/// The route for listing income.
pub const INCOME: &str = "/transactions/income";
/// The route for listing recurring expenses.
pub const RECURRING_EXPENSES: &str = "/transactions/recurring";
/// The route for listing transactions in non-essential categories.
pub const DISCRETIONARY_TRANSACTIONS: &str = "/transactions/discretionary";
/// The route for listing transactions paid in installments.
pub const INSTALLMENT_TRANSACTIONS: &str = "/transactions/installments";
/// The route for listing transactions between two dates.
pub const TRANSACTIONS_IN_PERIOD: &str = "/transactions/period";
/// The route for listing the transactions of a category.
pub const TRANSACTIONS_BY_CATEGORY: &str = "/transactions/category/{category_id}";

/// The route for this month's total expenses.
pub const SUMMARY_EXPENSES: &str = "/transactions/summary/expenses";
/// The route for this month's total income.
pub const SUMMARY_INCOME: &str = "/transactions/summary/income";
/// The route for the total of recurring expenses.
pub const SUMMARY_RECURRING: &str = "/transactions/summary/recurring";
/// The route for the total of essential expenses.
pub const SUMMARY_ESSENTIAL: &str = "/transactions/summary/essential";
/// The route for the total of discretionary expenses.
pub const SUMMARY_DISCRETIONARY: &str = "/transactions/summary/discretionary";
/// The route for this month's balance.
pub const SUMMARY_BALANCE: &str = "/transactions/summary/balance";
/// The route for totals grouped by category.
pub const SUMMARY_BY_CATEGORY: &str = "/transactions/summary/by-category";

/// The route for the OpenAPI description of the API.
pub const OPENAPI: &str = "/openapi.json";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/categories/{category_id}', '{category_id}' is the parameter.
///
/// This function assumes that an endpoint path contains a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
