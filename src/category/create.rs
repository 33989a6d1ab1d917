//! Category creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header::LOCATION},
};

use crate::{
    Error,
    category::{Category, CategoryData, CategoryState, create_category},
    db::lock_connection,
    endpoints::{self, format_endpoint},
    openapi::ErrorResponse,
};

/// Handle a request to create a category.
///
/// Responds with 201 and the new category, 409 if the name is taken or 400 if
/// the body is invalid.
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CategoryData,
    responses(
        (status = 201, description = "The category was created", body = Category,
            headers(("location" = String, description = "The URL of the new category"))),
        (status = 400, description = "The request is invalid", body = ErrorResponse),
        (status = 409, description = "A category with the same name already exists"),
    )
)]
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    payload: Result<Json<CategoryData>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Category>), Error> {
    let Json(data) = payload?;
    let new_category = data.validate()?;

    let connection = lock_connection(&state.db_connection)?;
    let category = create_category(new_category, &connection)?;

    tracing::info!(
        "Created category {} \"{}\" ({})",
        category.id,
        category.name,
        category.category_type
    );

    let location = format_endpoint(endpoints::CATEGORY, category.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(category)))
}
