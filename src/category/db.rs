//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryName, CategoryType, EssentialCount, NewCategory},
    database_id::CategoryId,
};

const SELECT_CATEGORY: &str = "SELECT id, name, essential, category_type FROM category";

/// Create a category and return it with its generated ID.
///
/// # Errors
/// This function will return a:
/// - [Error::DuplicateCategoryName] if a category with the same name exists,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_category(category: NewCategory, connection: &Connection) -> Result<Category, Error> {
    match get_category_by_name(&category.name, connection) {
        Ok(_) => return Err(Error::DuplicateCategoryName),
        Err(Error::NotFound) => {}
        Err(error) => return Err(error),
    }

    connection
        .prepare(
            "INSERT INTO category (name, essential, category_type) VALUES (?1, ?2, ?3)
             RETURNING id, name, essential, category_type",
        )?
        .query_row(
            (
                category.name.as_ref(),
                category.essential,
                category.category_type,
            ),
            map_category_row,
        )
        .map_err(Error::from)
}

/// Retrieve a single category by ID.
///
/// # Errors
/// Returns [Error::NotFound] if `category_id` does not refer to a category.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare(&format!("{SELECT_CATEGORY} WHERE id = :id;"))?
        .query_row(&[(":id", &category_id)], map_category_row)
        .map_err(|error| error.into())
}

/// Retrieve a single category by its exact name.
///
/// # Errors
/// Returns [Error::NotFound] if no category has the name `name`.
pub fn get_category_by_name(name: &CategoryName, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare(&format!("{SELECT_CATEGORY} WHERE name = :name;"))?
        .query_row(&[(":name", name.as_ref())], map_category_row)
        .map_err(|error| error.into())
}

/// Retrieve all categories in the order they were created.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    select_categories("ORDER BY id ASC", [], connection)
}

/// Retrieve the categories of type `category_type`.
pub fn get_categories_by_type(
    category_type: CategoryType,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    select_categories(
        "WHERE category_type = ?1 ORDER BY id ASC",
        [category_type],
        connection,
    )
}

/// Retrieve the categories whose essential flag equals `essential`.
pub fn get_categories_by_essential(
    essential: bool,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    select_categories("WHERE essential = ?1 ORDER BY id ASC", [essential], connection)
}

/// Retrieve the categories matching both `category_type` and `essential`.
pub fn get_categories_by_type_and_essential(
    category_type: CategoryType,
    essential: bool,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    select_categories(
        "WHERE category_type = ?1 AND essential = ?2 ORDER BY id ASC",
        (category_type, essential),
        connection,
    )
}

/// Count the essential and non-essential categories.
pub fn count_categories_by_essential(connection: &Connection) -> Result<EssentialCount, Error> {
    connection
        .query_row(
            "SELECT
                COALESCE(SUM(CASE WHEN essential THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN essential THEN 0 ELSE 1 END), 0)
             FROM category;",
            [],
            |row| {
                Ok(EssentialCount {
                    essential: row.get(0)?,
                    non_essential: row.get(1)?,
                })
            },
        )
        .map_err(|error| error.into())
}

/// Replace the fields of the category `category_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `category_id` does not refer to a category,
/// - [Error::DuplicateCategoryName] if another category already has the new name,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_category(
    category_id: CategoryId,
    category: NewCategory,
    connection: &Connection,
) -> Result<Category, Error> {
    connection
        .prepare(
            "UPDATE category SET name = ?1, essential = ?2, category_type = ?3 WHERE id = ?4
             RETURNING id, name, essential, category_type",
        )?
        .query_row(
            (
                category.name.as_ref(),
                category.essential,
                category.category_type,
                category_id,
            ),
            map_category_row,
        )
        .map_err(Error::from)
}

/// Delete a category and its transactions by ID.
///
/// # Errors
/// Returns [Error::NotFound] if the category doesn't exist.
pub fn delete_category(category_id: CategoryId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM category WHERE id = ?1", [category_id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Initialize the category table and indexes.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            essential INTEGER NOT NULL,
            category_type TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_category_type_essential ON category(category_type, essential);",
    )?;

    Ok(())
}

fn select_categories<P: rusqlite::Params>(
    clause: &str,
    params: P,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    connection
        .prepare(&format!("{SELECT_CATEGORY} {clause};"))?
        .query_map(params, map_category_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

fn map_category_row(row: &Row) -> Result<Category, rusqlite::Error> {
    map_category_row_at(row, 0)
}

/// Map the four category columns starting at `offset` to a [Category].
///
/// The columns must be in the order id, name, essential, category_type.
pub(crate) fn map_category_row_at(row: &Row, offset: usize) -> Result<Category, rusqlite::Error> {
    let id = row.get(offset)?;
    let raw_name: String = row.get(offset + 1)?;
    let name = CategoryName::new_unchecked(&raw_name);
    let essential = row.get(offset + 2)?;
    let category_type = row.get(offset + 3)?;

    Ok(Category {
        id,
        name,
        essential,
        category_type,
    })
}
