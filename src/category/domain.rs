//! Core category domain types.

use std::{
    fmt::Display,
    sync::{Arc, Mutex},
};

use axum::extract::FromRef;
use rusqlite::{
    Connection, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{AppState, Error, database_id::CategoryId};

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
#[schema(value_type = String, example = "Alimentação")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of money a category tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    /// Regular income such as a salary.
    FixedIncome,
    /// Irregular income such as freelance work.
    VariableIncome,
    /// Spending that cannot be avoided, e.g. rent or groceries.
    EssentialExpense,
    /// Spending that could be cut, e.g. streaming services.
    DiscretionaryExpense,
    /// Small purchases that add up without being noticed, e.g. coffee.
    InvisibleExpense,
    /// Money put aside to grow.
    Investment,
}

impl CategoryType {
    /// Every category type, in declaration order.
    pub const ALL: [CategoryType; 6] = [
        CategoryType::FixedIncome,
        CategoryType::VariableIncome,
        CategoryType::EssentialExpense,
        CategoryType::DiscretionaryExpense,
        CategoryType::InvisibleExpense,
        CategoryType::Investment,
    ];

    /// The name used for this type in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::FixedIncome => "FIXED_INCOME",
            CategoryType::VariableIncome => "VARIABLE_INCOME",
            CategoryType::EssentialExpense => "ESSENTIAL_EXPENSE",
            CategoryType::DiscretionaryExpense => "DISCRETIONARY_EXPENSE",
            CategoryType::InvisibleExpense => "INVISIBLE_EXPENSE",
            CategoryType::Investment => "INVESTMENT",
        }
    }

    /// A human readable label, e.g. "Fixed Income".
    pub fn label(&self) -> &'static str {
        match self {
            CategoryType::FixedIncome => "Fixed Income",
            CategoryType::VariableIncome => "Variable Income",
            CategoryType::EssentialExpense => "Essential Expense",
            CategoryType::DiscretionaryExpense => "Discretionary Expense",
            CategoryType::InvisibleExpense => "Invisible Expense",
            CategoryType::Investment => "Investment",
        }
    }
}

impl Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ToSql for CategoryType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for CategoryType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;

        CategoryType::ALL
            .into_iter()
            .find(|category_type| category_type.as_str() == text)
            .ok_or(FromSqlError::InvalidType)
    }
}

/// A grouping for transactions (e.g., 'Rent', 'Salary').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
pub struct Category {
    /// The ID of the category.
    #[schema(value_type = i64)]
    pub id: CategoryId,
    /// The unique name of the category.
    pub name: CategoryName,
    /// Whether the category is a necessity rather than a choice.
    pub essential: bool,
    /// What kind of money the category tracks.
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

/// A validated category that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    /// The name of the category.
    pub name: CategoryName,
    /// Whether the category is a necessity rather than a choice.
    pub essential: bool,
    /// What kind of money the category tracks.
    pub category_type: CategoryType,
}

/// Request body for creating and updating categories.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryData {
    /// The category name, must not be blank.
    pub name: String,
    /// Whether the category covers essential spending or income.
    pub essential: bool,
    /// What kind of category this is.
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

impl CategoryData {
    /// Check the request body and turn it into a [NewCategory].
    ///
    /// # Errors
    ///
    /// Returns an [Error::EmptyCategoryName] if the name is blank.
    pub fn validate(self) -> Result<NewCategory, Error> {
        Ok(NewCategory {
            name: CategoryName::new(&self.name)?,
            essential: self.essential,
            category_type: self.category_type,
        })
    }
}

/// The number of essential and non-essential categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EssentialCount {
    /// The number of categories flagged as essential.
    pub essential: u32,
    /// The number of categories not flagged as essential.
    pub non_essential: u32,
}

/// The state needed by the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryState {
    /// The connection to the application's database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}


#[cfg(test)]
mod category_type_tests {
    use crate::category::CategoryType;

    #[test]
    fn serializes_as_screaming_snake_case() {
        for category_type in CategoryType::ALL {
            let json = serde_json::to_string(&category_type).unwrap();

            assert_eq!(json, format!("\"{}\"", category_type.as_str()));
        }
    }

    #[test]
    fn deserializes_from_screaming_snake_case() {
        let category_type: CategoryType =
            serde_json::from_str("\"DISCRETIONARY_EXPENSE\"").unwrap();

        assert_eq!(category_type, CategoryType::DiscretionaryExpense);
    }

    #[test]
    fn displays_label() {
        assert_eq!(CategoryType::InvisibleExpense.to_string(), "Invisible Expense");
    }
}
