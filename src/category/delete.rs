//! Category deletion endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    category::{CategoryState, db::delete_category},
    database_id::CategoryId,
    db::lock_connection,
};

/// Delete a category along with its transactions.
///
/// Responds with 204 on success or 404 if the category does not exist.
#[utoipa::path(
    delete,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = i64, Path, description = "The ID of the category")),
    responses(
        (status = 204, description = "The category and its transactions were deleted"),
        (status = 404, description = "The category does not exist"),
    )
)]
pub async fn delete_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryState>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    delete_category(category_id, &connection)?;
    tracing::info!("Deleted category {category_id}");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod delete_category_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::{
        Error,
        category::{
            CategoryName, CategoryState, CategoryType, NewCategory, create_category,
            delete_category_endpoint, get_category,
        },
        db::initialize,
    };

    fn get_delete_category_state() -> CategoryState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        CategoryState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn delete_category_endpoint_succeeds() {
        let state = get_delete_category_state();
        let category = create_category(
            NewCategory {
                name: CategoryName::new_unchecked("Test Category"),
                essential: false,
                category_type: CategoryType::InvisibleExpense,
            },
            &state.db_connection.lock().unwrap(),
        )
        .expect("Could not create test category");

        let status = delete_category_endpoint(Path(category.id), State(state.clone()))
            .await
            .expect("Could not delete category");

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(
            get_category(category.id, &state.db_connection.lock().unwrap()),
            Err(Error::NotFound)
        );
    }

    #[tokio::test]
    async fn delete_category_endpoint_with_invalid_id_is_not_found() {
        let state = get_delete_category_state();

        let result = delete_category_endpoint(Path(999999), State(state)).await;

        assert_eq!(result, Err(Error::NotFound));
    }
}
