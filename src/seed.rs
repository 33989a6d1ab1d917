//! Sample categories and transactions for trying out the API.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};
use rust_decimal::Decimal;
use time::{Date, macros::date};

use crate::{
    Error,
    category::{CategoryName, CategoryType, NewCategory, create_category, get_category_by_name},
    transaction::{Amount, Transaction, TransactionType, create_transaction},
};

/// The number of records created by [load_sample_data].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDataCounts {
    /// The number of categories created.
    pub categories: usize,
    /// The number of transactions created.
    pub transactions: usize,
}

const SAMPLE_CATEGORIES: [(&str, bool, CategoryType); 15] = [
    ("Salário", true, CategoryType::FixedIncome),
    ("Freelancer", false, CategoryType::VariableIncome),
    ("Investimentos", false, CategoryType::VariableIncome),
    ("Aluguel", true, CategoryType::EssentialExpense),
    ("Alimentação", true, CategoryType::EssentialExpense),
    ("Transporte", true, CategoryType::EssentialExpense),
    ("Saúde", true, CategoryType::EssentialExpense),
    ("Contas (Água/Luz/Telefone)", true, CategoryType::EssentialExpense),
    ("Streaming", false, CategoryType::DiscretionaryExpense),
    ("Restaurantes", false, CategoryType::DiscretionaryExpense),
    ("Compras", false, CategoryType::DiscretionaryExpense),
    ("Viagens", false, CategoryType::DiscretionaryExpense),
    ("Café", false, CategoryType::InvisibleExpense),
    ("Taxi/Uber", false, CategoryType::InvisibleExpense),
    ("Pequenas Compras", false, CategoryType::InvisibleExpense),
];

struct SampleTransaction {
    description: &'static str,
    cents: i64,
    date: Date,
    transaction_type: TransactionType,
    recurring: bool,
    category: &'static str,
    installment_count: u32,
}

const fn sample(
    description: &'static str,
    cents: i64,
    date: Date,
    transaction_type: TransactionType,
    recurring: bool,
    category: &'static str,
) -> SampleTransaction {
    SampleTransaction {
        description,
        cents,
        date,
        transaction_type,
        recurring,
        category,
        installment_count: 1,
    }
}

const SAMPLE_TRANSACTIONS: [SampleTransaction; 13] = [
    sample("Salário Fevereiro", 500000, date!(2026 - 02 - 05), TransactionType::Income, false, "Salário"),
    sample("Projeto Website", 150000, date!(2026 - 02 - 15), TransactionType::Income, false, "Freelancer"),
    sample("Aluguel Fevereiro", 150000, date!(2026 - 02 - 01), TransactionType::Expense, true, "Aluguel"),
    sample("Supermercado Semanal", 40000, date!(2026 - 02 - 10), TransactionType::Expense, true, "Alimentação"),
    sample("Combustível", 20000, date!(2026 - 02 - 08), TransactionType::Expense, true, "Transporte"),
    sample("Plano de Saúde", 30000, date!(2026 - 02 - 05), TransactionType::Expense, true, "Saúde"),
    sample("Conta de Luz", 15000, date!(2026 - 02 - 06), TransactionType::Expense, true, "Contas (Água/Luz/Telefone)"),
    sample("Netflix", 3990, date!(2026 - 02 - 10), TransactionType::Expense, true, "Streaming"),
    sample("Jantar Restaurante", 12000, date!(2026 - 02 - 12), TransactionType::Expense, false, "Restaurantes"),
    sample("Roupas", 25000, date!(2026 - 02 - 14), TransactionType::Expense, false, "Compras"),
    sample("Café da Manhã", 1500, date!(2026 - 02 - 13), TransactionType::Expense, false, "Café"),
    sample("Corrida Uber", 3500, date!(2026 - 02 - 11), TransactionType::Expense, false, "Taxi/Uber"),
    SampleTransaction {
        installment_count: 12,
        ..sample("Notebook Novo", 360000, date!(2026 - 02 - 01), TransactionType::Expense, false, "Compras")
    },
];

/// Fill an empty database with a set of sample categories and a month of
/// transactions, all inside one SQL transaction.
///
/// # Errors
/// Returns [Error::DuplicateCategoryName] if the sample categories already
/// exist, or an [Error::SqlError] if there is some other SQL error.
pub fn load_sample_data(connection: &Connection) -> Result<SampleDataCounts, Error> {
    let sql_transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    for (name, essential, category_type) in SAMPLE_CATEGORIES {
        create_category(
            NewCategory {
                name: CategoryName::new(name)?,
                essential,
                category_type,
            },
            &sql_transaction,
        )?;
    }

    for sample in &SAMPLE_TRANSACTIONS {
        let category =
            get_category_by_name(&CategoryName::new_unchecked(sample.category), &sql_transaction)?;

        create_transaction(
            Transaction::build(
                sample.description,
                Amount::new(Decimal::new(sample.cents, 2))?,
                sample.date,
                sample.transaction_type,
                category.id,
            )
            .recurring(sample.recurring)
            .installments(sample.installment_count, 1),
            &sql_transaction,
        )?;
    }

    sql_transaction.commit()?;

    let counts = SampleDataCounts {
        categories: SAMPLE_CATEGORIES.len(),
        transactions: SAMPLE_TRANSACTIONS.len(),
    };
    tracing::info!(
        "Loaded {} sample categories and {} sample transactions",
        counts.categories,
        counts.transactions
    );

    Ok(counts)
}
