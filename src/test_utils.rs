//! Helpers shared by the unit tests.

#![allow(missing_docs)]

use std::{
    str::FromStr,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::{
    category::{Category, CategoryName, CategoryType, NewCategory, create_category},
    db::initialize,
    transaction::Amount,
};

/// An in-memory database with the tables created.
#[track_caller]
pub(crate) fn get_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");
    connection
}

pub(crate) fn into_shared(connection: Connection) -> Arc<Mutex<Connection>> {
    Arc::new(Mutex::new(connection))
}

#[track_caller]
pub(crate) fn create_test_category(
    name: &str,
    essential: bool,
    category_type: CategoryType,
    connection: &Connection,
) -> Category {
    create_category(
        NewCategory {
            name: CategoryName::new_unchecked(name),
            essential,
            category_type,
        },
        connection,
    )
    .expect("Could not create test category")
}

/// Parse a decimal string such as `"39.90"` into an [Amount].
#[track_caller]
pub(crate) fn amount(value: &str) -> Amount {
    let value = Decimal::from_str(value).expect("Invalid decimal in test");
    Amount::new(value).expect("Invalid amount in test")
}
