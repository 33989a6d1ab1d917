//! The request body for creating and updating transactions.

use rust_decimal::Decimal;
use serde::Deserialize;
use time::Date;
use utoipa::ToSchema;

use crate::{
    Error,
    database_id::CategoryId,
    transaction::{Amount, Transaction, TransactionBuilder, TransactionType},
};

/// The most characters allowed in a transaction's notes.
pub const MAX_NOTES_LENGTH: usize = 500;

/// The JSON body for creating or replacing a transaction.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransactionData {
    /// A short description, must not be blank.
    pub description: String,
    /// The full amount, either a JSON number or a string such as `"39.90"`.
    #[schema(value_type = String, example = "39.90")]
    pub amount: Decimal,
    /// The date as `YYYY-MM-DD`.
    pub date: Date,
    /// `INCOME` or `EXPENSE`.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Whether the transaction repeats regularly, defaults to `false`.
    #[serde(default)]
    pub recurring: bool,
    /// The number of monthly payments, defaults to 1.
    #[serde(default = "one")]
    pub installment_count: u32,
    /// Which payment this is, defaults to 1.
    #[serde(default = "one")]
    pub current_installment: u32,
    /// The ID of an existing category.
    #[schema(value_type = i64)]
    pub category_id: CategoryId,
    /// Optional free text, at most [MAX_NOTES_LENGTH] characters.
    #[serde(default)]
    pub notes: Option<String>,
}

fn one() -> u32 {
    1
}

impl TransactionData {
    /// Check the request body and turn it into a [TransactionBuilder].
    ///
    /// Whether the category exists is checked when the transaction is written
    /// to the database.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::EmptyDescription] if the description is blank,
    /// - [Error::NonPositiveAmount] or [Error::AmountOutOfRange] for a bad amount,
    /// - [Error::InvalidInstallmentCount] if there are zero installments,
    /// - [Error::InvalidCurrentInstallment] if the current installment is not
    ///   between 1 and the installment count,
    /// - or [Error::NotesTooLong] if the notes exceed [MAX_NOTES_LENGTH] characters.
    pub fn into_builder(self) -> Result<TransactionBuilder, Error> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let amount = Amount::new(self.amount)?;

        if self.installment_count == 0 {
            return Err(Error::InvalidInstallmentCount(self.installment_count));
        }

        if self.current_installment == 0 || self.current_installment > self.installment_count {
            return Err(Error::InvalidCurrentInstallment {
                current: self.current_installment,
                count: self.installment_count,
            });
        }

        if let Some(notes) = &self.notes {
            let length = notes.chars().count();
            if length > MAX_NOTES_LENGTH {
                return Err(Error::NotesTooLong(length));
            }
        }

        Ok(Transaction::build(
            description,
            amount,
            self.date,
            self.transaction_type,
            self.category_id,
        )
        .recurring(self.recurring)
        .installments(self.installment_count, self.current_installment)
        .notes(self.notes))
    }
}
