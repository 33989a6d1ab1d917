//! Defines the core data models and database queries for transactions.

use rusqlite::{
    Connection, Row, ToSql, params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

use crate::{
    Error,
    category::{Category, map_category_row_at},
    database_id::{CategoryId, TransactionId},
    transaction::Amount,
};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money came in or went out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Expense,
}

impl TransactionType {
    /// The name used for this type in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
/// It is serialized as a [TransactionResponse].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "TransactionResponse")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The full amount of money spent or earned.
    pub amount: Amount,
    /// When the transaction happened.
    pub date: Date,
    /// Whether money was spent or earned.
    pub transaction_type: TransactionType,
    /// Whether the transaction repeats regularly, e.g. a monthly bill.
    pub recurring: bool,
    /// The number of monthly payments the amount is split over.
    pub installment_count: u32,
    /// Which of the payments this is, starting at 1.
    pub current_installment: u32,
    /// The category the transaction belongs to.
    pub category: Category,
    /// Optional free text.
    pub notes: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        description: &str,
        amount: Amount,
        date: Date,
        transaction_type: TransactionType,
        category_id: CategoryId,
    ) -> TransactionBuilder {
        TransactionBuilder {
            description: description.to_owned(),
            amount,
            date,
            transaction_type,
            category_id,
            recurring: false,
            installment_count: 1,
            current_installment: 1,
            notes: None,
        }
    }

    /// The amount charged each month.
    ///
    /// For a purchase split into installments this is the amount divided by
    /// the number of installments, rounded half-up to cents. Otherwise it is
    /// the full amount.
    pub fn monthly_amount(&self) -> Decimal {
        if self.installment_count > 1 {
            self.amount.per_installment(self.installment_count)
        } else {
            self.amount.as_decimal()
        }
    }
}

/// The JSON form of a [Transaction], which adds the amount charged each month.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionResponse {
    #[schema(value_type = i64)]
    id: TransactionId,
    description: String,
    #[schema(value_type = String, example = "3600.00")]
    amount: Amount,
    date: Date,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    recurring: bool,
    installment_count: u32,
    current_installment: u32,
    category: Category,
    notes: Option<String>,
    /// See [Transaction::monthly_amount].
    #[schema(value_type = String, example = "300.00")]
    monthly_amount: Decimal,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        let monthly_amount = transaction.monthly_amount();

        Self {
            id: transaction.id,
            description: transaction.description,
            amount: transaction.amount,
            date: transaction.date,
            transaction_type: transaction.transaction_type,
            recurring: transaction.recurring,
            installment_count: transaction.installment_count,
            current_installment: transaction.current_installment,
            category: transaction.category,
            notes: transaction.notes,
            monthly_amount,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The required fields are given to [Transaction::build], the rest default to
/// a one-off, single payment with no notes.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::transaction::{Amount, Transaction, TransactionType};
///
/// let notebook = Transaction::build(
///         "New notebook",
///         Amount::new(Decimal::from(3600))?,
///         date!(2026-02-01),
///         TransactionType::Expense,
///         shopping.id,
///     )
///     .installments(12, 1);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// A short, non-blank description of the transaction.
    pub description: String,
    /// The full amount of the transaction.
    pub amount: Amount,
    /// When the transaction happened.
    pub date: Date,
    /// Whether money came in or went out.
    pub transaction_type: TransactionType,
    /// The category of the transaction. Must refer to an existing category.
    pub category_id: CategoryId,
    /// Whether the transaction repeats regularly.
    pub recurring: bool,
    /// The number of monthly payments, at least 1.
    pub installment_count: u32,
    /// Which payment this is, between 1 and `installment_count`.
    pub current_installment: u32,
    /// Free text about the transaction.
    pub notes: Option<String>,
}

impl TransactionBuilder {
    /// Mark the transaction as repeating regularly.
    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    /// Split the transaction into `count` payments, of which this is payment `current`.
    pub fn installments(mut self, count: u32, current: u32) -> Self {
        self.installment_count = count;
        self.current_installment = current;
        self
    }

    /// Attach free text to the transaction.
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Selects the transaction columns followed by the columns of its category,
/// in the order expected by [map_transaction_row].
pub(super) const SELECT_TRANSACTION: &str = "SELECT \
        t.id, t.description, t.amount_cents, t.date, t.transaction_type, t.recurring, \
        t.installment_count, t.current_installment, t.notes, \
        c.id, c.name, c.essential, c.category_type \
    FROM \"transaction\" t \
    INNER JOIN category c ON t.category_id = c.id";

/// Create a new transaction in the database from a builder.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidCategory] if the category ID does not refer to a real category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let id: TransactionId = connection
        .prepare(
            "INSERT INTO \"transaction\" (description, amount_cents, date, transaction_type, \
                recurring, installment_count, current_installment, category_id, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             RETURNING id",
        )?
        .query_row(
            params![
                builder.description,
                builder.amount.cents(),
                builder.date,
                builder.transaction_type,
                builder.recurring,
                builder.installment_count,
                builder.current_installment,
                builder.category_id,
                builder.notes,
            ],
            |row| row.get(0),
        )
        .map_err(|error| map_foreign_key_error(error, builder.category_id))?;

    get_transaction(id, connection)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!("{SELECT_TRANSACTION} WHERE t.id = :id"))?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Replace every field of the transaction `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - [Error::InvalidCategory] if the category ID does not refer to a real category,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let rows_affected = connection
        .execute(
            "UPDATE \"transaction\"
            SET \
                description = ?1, \
                amount_cents = ?2, \
                date = ?3, \
                transaction_type = ?4, \
                recurring = ?5, \
                installment_count = ?6, \
                current_installment = ?7, \
                category_id = ?8, \
                notes = ?9 \
            WHERE id = ?10;",
            params![
                builder.description,
                builder.amount.cents(),
                builder.date,
                builder.transaction_type,
                builder.recurring,
                builder.installment_count,
                builder.current_installment,
                builder.category_id,
                builder.notes,
                id,
            ],
        )
        .map_err(|error| map_foreign_key_error(error, builder.category_id))?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    get_transaction(id, connection)
}

/// Delete a transaction by ID.
///
/// # Errors
/// Returns [Error::NotFound] if the transaction doesn't exist.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// The amount is stored in cents.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            amount_cents INTEGER NOT NULL CHECK (amount_cents > 0),
            date TEXT NOT NULL,
            transaction_type TEXT NOT NULL,
            recurring INTEGER NOT NULL DEFAULT 0,
            installment_count INTEGER NOT NULL DEFAULT 1 CHECK (installment_count >= 1),
            current_installment INTEGER NOT NULL DEFAULT 1,
            category_id INTEGER NOT NULL,
            notes TEXT,
            FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_type_date ON \"transaction\"(transaction_type, date);
        CREATE INDEX IF NOT EXISTS idx_transaction_category ON \"transaction\"(category_id);",
    )?;

    Ok(())
}

/// Map a database row selected with [SELECT_TRANSACTION] to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = Amount::from_cents(row.get(2)?);
    let date = row.get(3)?;
    let transaction_type = row.get(4)?;
    let recurring = row.get(5)?;
    let installment_count = row.get(6)?;
    let current_installment = row.get(7)?;
    let notes = row.get(8)?;
    let category = map_category_row_at(row, 9)?;

    Ok(Transaction {
        id,
        description,
        amount,
        date,
        transaction_type,
        recurring,
        installment_count,
        current_installment,
        category,
        notes,
    })
}

fn map_foreign_key_error(error: rusqlite::Error, category_id: CategoryId) -> Error {
    match error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: _,
                extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            },
            _,
        ) => Error::InvalidCategory(category_id),
        error => error.into(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
