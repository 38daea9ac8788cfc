use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::fx::currency;
use crate::transactions::transactions_errors::{Result, TransactionError};
use crate::users::User;

/// Fixed set of transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Other,
    Salary,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
            Category::Salary => "Salary",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Food" => Ok(Category::Food),
            "Transport" => Ok(Category::Transport),
            "Entertainment" => Ok(Category::Entertainment),
            "Utilities" => Ok(Category::Utilities),
            "Other" => Ok(Category::Other),
            "Salary" => Ok(Category::Salary),
            other => Err(TransactionError::InvalidData(format!(
                "Unknown category: {}",
                other
            ))),
        }
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(TransactionError::InvalidData(format!(
                "Unknown transaction type: {}",
                other
            ))),
        }
    }
}

/// Domain model for a ledger transaction.
///
/// `amount` is always expressed in the owning user's base currency; the
/// currency submitted by the client is kept in `original_currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub original_currency: String,
    pub category: Category,
    pub transaction_type: TransactionType,
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for transactions
#[derive(
    Queryable, Selectable, Identifiable, Associations, Insertable, AsChangeset, PartialEq, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(User))]
#[diesel(treat_none_as_null = true)]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub amount: String,
    pub original_currency: String,
    pub category: String,
    pub transaction_type: String,
    pub tags: String,
    pub transaction_date: NaiveDateTime,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Transaction {
            id: db.id,
            user_id: db.user_id,
            amount: db.amount.parse().unwrap_or(Decimal::ZERO),
            original_currency: db.original_currency,
            category: db.category.parse().unwrap_or(Category::Other),
            transaction_type: db
                .transaction_type
                .parse()
                .unwrap_or(TransactionType::Expense),
            tags: serde_json::from_str(&db.tags).unwrap_or_default(),
            date: DateTime::from_naive_utc_and_offset(db.transaction_date, Utc),
            description: db.description,
            created_at: DateTime::from_naive_utc_and_offset(db.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(db.updated_at, Utc),
        }
    }
}

impl From<&Transaction> for TransactionDB {
    fn from(t: &Transaction) -> Self {
        TransactionDB {
            id: t.id.clone(),
            user_id: t.user_id.clone(),
            amount: t.amount.to_string(),
            original_currency: t.original_currency.clone(),
            category: t.category.as_str().to_string(),
            transaction_type: t.transaction_type.as_str().to_string(),
            tags: serde_json::to_string(&t.tags).unwrap_or_else(|_| "[]".to_string()),
            transaction_date: t.date.naive_utc(),
            description: t.description.clone(),
            created_at: t.created_at.naive_utc(),
            updated_at: t.updated_at.naive_utc(),
        }
    }
}

/// Input model for creating a new transaction. `amount` is in `currency`,
/// which may differ from the owner's base currency.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub category: Category,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl NewTransaction {
    /// Validates the new transaction data before any conversion is attempted
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(TransactionError::InvalidData(
                "User ID cannot be empty".to_string(),
            ));
        }
        if self.amount.is_sign_negative() {
            return Err(TransactionError::InvalidAmount(format!(
                "Amount must be non-negative, got {}",
                self.amount
            )));
        }
        if !currency::is_valid_code(&self.currency) {
            return Err(TransactionError::InvalidData(format!(
                "Invalid currency code: {}",
                self.currency
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing transaction. An `amount` given here
/// is taken as already expressed in the owner's base currency; updates never
/// re-run currency conversion.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub amount: Option<Decimal>,
    pub category: Option<Category>,
    pub transaction_type: Option<TransactionType>,
    pub tags: Option<Vec<String>>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl TransactionUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TransactionError::InvalidData(
                "Transaction ID cannot be empty".to_string(),
            ));
        }
        if let Some(amount) = self.amount {
            if amount.is_sign_negative() {
                return Err(TransactionError::InvalidAmount(format!(
                    "Amount must be non-negative, got {}",
                    amount
                )));
            }
        }
        Ok(())
    }

    /// Applies the requested changes to an existing transaction
    pub fn apply_to(&self, mut transaction: Transaction) -> Transaction {
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(category) = self.category {
            transaction.category = category;
        }
        if let Some(transaction_type) = self.transaction_type {
            transaction.transaction_type = transaction_type;
        }
        if let Some(tags) = &self.tags {
            transaction.tags = tags.clone();
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(description) = &self.description {
            transaction.description = Some(description.clone());
        }
        transaction.updated_at = Utc::now();
        transaction
    }
}
