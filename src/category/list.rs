//! Endpoints for listing and filtering categories.

use axum::{
    Json,
    extract::{Path, State},
};
use rusqlite::Connection;

use crate::{
    Error,
    category::{
        Category, CategoryState, CategoryType, EssentialCount, count_categories_by_essential,
        get_all_categories, get_categories_by_essential, get_categories_by_type,
        get_categories_by_type_and_essential,
    },
    db::lock_connection,
};

fn query_categories<F>(state: &CategoryState, query: F) -> Result<Json<Vec<Category>>, Error>
where
    F: FnOnce(&Connection) -> Result<Vec<Category>, Error>,
{
    let connection = lock_connection(&state.db_connection)?;

    query(&connection).map(Json)
}

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses((status = 200, description = "All categories, ordered by ID", body = Vec<Category>))
)]
pub async fn get_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    query_categories(&state, get_all_categories)
}

/// List the categories of a single type, e.g. `/categories/type/INVESTMENT`.
#[utoipa::path(
    get,
    path = "/categories/type/{category_type}",
    tag = "categories",
    params(("category_type" = CategoryType, Path, description = "The category type")),
    responses((status = 200, description = "The categories of the given type", body = Vec<Category>))
)]
pub async fn get_categories_by_type_endpoint(
    Path(category_type): Path<CategoryType>,
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    query_categories(&state, |connection| {
        get_categories_by_type(category_type, connection)
    })
}

/// List the essential (`true`) or non-essential (`false`) categories.
#[utoipa::path(
    get,
    path = "/categories/essential/{essential}",
    tag = "categories",
    params(("essential" = bool, Path, description = "Whether to list essential categories")),
    responses((status = 200, description = "The categories with the given essential flag", body = Vec<Category>))
)]
pub async fn get_categories_by_essential_endpoint(
    Path(essential): Path<bool>,
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    query_categories(&state, |connection| {
        get_categories_by_essential(essential, connection)
    })
}

/// List the fixed income categories.
#[utoipa::path(
    get,
    path = "/categories/fixed-income",
    tag = "categories",
    responses((status = 200, description = "The fixed income categories", body = Vec<Category>))
)]
pub async fn get_fixed_income_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    query_categories(&state, |connection| {
        get_categories_by_type(CategoryType::FixedIncome, connection)
    })
}

/// List the variable income categories.
#[utoipa::path(
    get,
    path = "/categories/variable-income",
    tag = "categories",
    responses((status = 200, description = "The variable income categories", body = Vec<Category>))
)]
pub async fn get_variable_income_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    query_categories(&state, |connection| {
        get_categories_by_type(CategoryType::VariableIncome, connection)
    })
}

/// List the essential expense categories that are also flagged as essential.
#[utoipa::path(
    get,
    path = "/categories/essential-expenses",
    tag = "categories",
    responses((status = 200, description = "The essential expense categories", body = Vec<Category>))
)]
pub async fn get_essential_expense_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    query_categories(&state, |connection| {
        get_categories_by_type_and_essential(CategoryType::EssentialExpense, true, connection)
    })
}

/// List the discretionary expense categories that are not flagged as essential.
#[utoipa::path(
    get,
    path = "/categories/discretionary-expenses",
    tag = "categories",
    responses((status = 200, description = "The discretionary expense categories", body = Vec<Category>))
)]
pub async fn get_discretionary_expense_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    query_categories(&state, |connection| {
        get_categories_by_type_and_essential(CategoryType::DiscretionaryExpense, false, connection)
    })
}

/// List the invisible expense categories.
#[utoipa::path(
    get,
    path = "/categories/invisible-expenses",
    tag = "categories",
    responses((status = 200, description = "The invisible expense categories", body = Vec<Category>))
)]
pub async fn get_invisible_expense_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    query_categories(&state, |connection| {
        get_categories_by_type(CategoryType::InvisibleExpense, connection)
    })
}

/// Count the essential and non-essential categories.
#[utoipa::path(
    get,
    path = "/categories/count",
    tag = "categories",
    responses((status = 200, description = "The number of essential and non-essential categories", body = EssentialCount))
)]
pub async fn get_category_count_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<EssentialCount>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    count_categories_by_essential(&connection).map(Json)
}
