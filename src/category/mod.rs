//! Category management for grouping transactions.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod list;

use utoipa::OpenApi;

pub use create::create_category_endpoint;
pub use db::{
    count_categories_by_essential, create_category, create_category_table, delete_category,
    get_all_categories, get_categories_by_essential, get_categories_by_type,
    get_categories_by_type_and_essential, get_category, get_category_by_name, update_category,
};
pub(crate) use db::map_category_row_at;
pub use delete::delete_category_endpoint;
pub use domain::{
    Category, CategoryData, CategoryName, CategoryState, CategoryType, EssentialCount,
    NewCategory,
};
pub use edit::{get_category_endpoint, update_category_endpoint};
pub use list::{
    get_categories_by_essential_endpoint, get_categories_by_type_endpoint,
    get_categories_endpoint, get_category_count_endpoint,
    get_discretionary_expense_categories_endpoint, get_essential_expense_categories_endpoint,
    get_fixed_income_categories_endpoint, get_invisible_expense_categories_endpoint,
    get_variable_income_categories_endpoint,
};

/// The OpenAPI description of the `/categories` endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_category_endpoint,
        edit::get_category_endpoint,
        edit::update_category_endpoint,
        delete::delete_category_endpoint,
        list::get_categories_endpoint,
        list::get_categories_by_type_endpoint,
        list::get_categories_by_essential_endpoint,
        list::get_fixed_income_categories_endpoint,
        list::get_variable_income_categories_endpoint,
        list::get_essential_expense_categories_endpoint,
        list::get_discretionary_expense_categories_endpoint,
        list::get_invisible_expense_categories_endpoint,
        list::get_category_count_endpoint,
    ),
    components(schemas(Category, CategoryData, CategoryName, CategoryType, EssentialCount))
)]
pub struct CategoryApi;
