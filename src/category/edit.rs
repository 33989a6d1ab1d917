//! Endpoints for reading and updating a single category.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    Error,
    category::{Category, CategoryData, CategoryState, get_category, update_category},
    database_id::CategoryId,
    db::lock_connection,
    openapi::ErrorResponse,
};

/// Get a category by its ID, or 404 if it does not exist.
#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = i64, Path, description = "The ID of the category")),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 404, description = "The category does not exist"),
    )
)]
pub async fn get_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryState>,
) -> Result<Json<Category>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_category(category_id, &connection).map(Json)
}

/// Replace a category's name, essential flag and type.
///
/// Responds with 404 if the category does not exist and 409 if another
/// category already uses the new name.
#[utoipa::path(
    put,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = i64, Path, description = "The ID of the category")),
    request_body = CategoryData,
    responses(
        (status = 200, description = "The updated category", body = Category),
        (status = 400, description = "The request is invalid", body = ErrorResponse),
        (status = 404, description = "The category does not exist"),
        (status = 409, description = "Another category already uses the name"),
    )
)]
pub async fn update_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryState>,
    payload: Result<Json<CategoryData>, JsonRejection>,
) -> Result<Json<Category>, Error> {
    let Json(data) = payload?;
    let category = data.validate()?;

    let connection = lock_connection(&state.db_connection)?;
    let category = update_category(category_id, category, &connection)?;

    tracing::info!("Updated category {category_id}");

    Ok(Json(category))
}
