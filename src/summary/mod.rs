//! Aggregate totals over transactions: by type and period, by recurrence, by
//! essential flag and per category, plus the monthly summary.

mod db;
mod handlers;
mod monthly;

use utoipa::OpenApi;

pub use db::{
    CategoryTotal, sum_by_essential_and_type, sum_by_type_in_range, sum_recurring_by_type,
    totals_by_category,
};
pub use handlers::{
    SummaryState, TotalsQuery, get_discretionary_total_endpoint, get_essential_total_endpoint,
    get_monthly_balance_endpoint, get_monthly_expenses_endpoint, get_monthly_income_endpoint,
    get_recurring_total_endpoint, get_totals_by_category_endpoint,
};
pub use monthly::{monthly_balance, monthly_expenses, monthly_income};

/// The OpenAPI description of the `/transactions/summary` endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_monthly_expenses_endpoint,
        handlers::get_monthly_income_endpoint,
        handlers::get_monthly_balance_endpoint,
        handlers::get_recurring_total_endpoint,
        handlers::get_essential_total_endpoint,
        handlers::get_discretionary_total_endpoint,
        handlers::get_totals_by_category_endpoint,
    ),
    components(schemas(CategoryTotal))
)]
pub struct SummaryApi;
