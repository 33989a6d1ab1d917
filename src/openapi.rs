//! The OpenAPI description of the REST API.

use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema, openapi};

use crate::{category::CategoryApi, summary::SummaryApi, transaction::TransactionApi};

/// The body of a 400 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// What was wrong with the request.
    #[schema(example = "Transaction description cannot be empty")]
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Finance Tracker API",
        description = "Track income and expenses by category and summarise them."
    ),
    components(schemas(ErrorResponse)),
    tags(
        (name = "categories", description = "Categories that group transactions"),
        (name = "transactions", description = "Income and expenses"),
        (name = "summary", description = "Totals over transactions"),
    )
)]
struct ApiDoc;

/// Build the OpenAPI document covering every endpoint.
pub fn api_doc() -> openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(CategoryApi::openapi());
    doc.merge(TransactionApi::openapi());
    doc.merge(SummaryApi::openapi());

    doc
}

/// Serve the OpenAPI document as JSON.
pub async fn get_openapi_endpoint() -> Json<openapi::OpenApi> {
    Json(api_doc())
}

#[cfg(test)]
mod openapi_tests {
    use crate::endpoints;

    use super::api_doc;

    #[test]
    fn documents_every_route() {
        let doc = api_doc();

        for route in [
            endpoints::CATEGORIES,
            endpoints::CATEGORY,
            endpoints::CATEGORIES_BY_TYPE,
            endpoints::CATEGORIES_BY_ESSENTIAL,
            endpoints::FIXED_INCOME_CATEGORIES,
            endpoints::VARIABLE_INCOME_CATEGORIES,
            endpoints::ESSENTIAL_EXPENSE_CATEGORIES,
            endpoints::DISCRETIONARY_EXPENSE_CATEGORIES,
            endpoints::INVISIBLE_EXPENSE_CATEGORIES,
            endpoints::CATEGORY_COUNT,
            endpoints::TRANSACTIONS,
            endpoints::TRANSACTION,
            endpoints::EXPENSES,
            endpoints::INCOME,
            endpoints::RECURRING_EXPENSES,
            endpoints::DISCRETIONARY_TRANSACTIONS,
            endpoints::INSTALLMENT_TRANSACTIONS,
            endpoints::TRANSACTIONS_IN_PERIOD,
            endpoints::TRANSACTIONS_BY_CATEGORY,
            endpoints::SUMMARY_EXPENSES,
            endpoints::SUMMARY_INCOME,
            endpoints::SUMMARY_RECURRING,
            endpoints::SUMMARY_ESSENTIAL,
            endpoints::SUMMARY_DISCRETIONARY,
            endpoints::SUMMARY_BALANCE,
            endpoints::SUMMARY_BY_CATEGORY,
        ] {
            assert!(
                doc.paths.paths.contains_key(route),
                "{route} is missing from the OpenAPI document"
            );
        }
    }

    #[test]
    fn includes_schemas() {
        let doc = api_doc();
        let schemas = doc
            .components
            .expect("The OpenAPI document should have components")
            .schemas;

        for name in [
            "Category",
            "CategoryData",
            "CategoryType",
            "EssentialCount",
            "TransactionData",
            "TransactionResponse",
            "TransactionType",
            "CategoryTotal",
            "ErrorResponse",
        ] {
            assert!(schemas.contains_key(name), "{name} is missing");
        }
    }
}
