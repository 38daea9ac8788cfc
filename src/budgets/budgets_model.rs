use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::budgets_errors::{BudgetError, Result};
use crate::transactions::Category;
use crate::users::User;

/// A per-category spending target for one user
#[derive(
    Queryable, Identifiable, Associations, AsChangeset, Selectable, Insertable, PartialEq,
    Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(User))]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount: String,
    pub description: Option<String>,
    pub notifications: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Budget {
    pub fn amount_decimal(&self) -> Decimal {
        self.amount.parse().unwrap_or(Decimal::ZERO)
    }
}

/// Input for creating a budget entry
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub user_id: String,
    pub category: Category,
    pub amount: Decimal,
    pub description: Option<String>,
    pub notifications: Option<bool>,
}

impl NewBudget {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(BudgetError::InvalidData(
                "User ID cannot be empty".to_string(),
            ));
        }
        if self.amount.is_sign_negative() {
            return Err(BudgetError::InvalidData(format!(
                "Amount must be non-negative, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Partial update for a budget entry
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub id: String,
    pub category: Option<Category>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub notifications: Option<bool>,
}

impl BudgetUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            if amount.is_sign_negative() {
                return Err(BudgetError::InvalidData(format!(
                    "Amount must be non-negative, got {}",
                    amount
                )));
            }
        }
        Ok(())
    }
}
