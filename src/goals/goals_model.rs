use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::goals_errors::{GoalError, Result};
use crate::users::User;

/// A savings goal with a deadline and accumulated progress
#[derive(
    Queryable, Identifiable, Associations, AsChangeset, Selectable, Insertable, PartialEq,
    Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(User))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: NaiveDate,
    pub auto_save: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Goal {
    pub fn target_amount_decimal(&self) -> Decimal {
        self.target_amount.parse().unwrap_or(Decimal::ZERO)
    }

    pub fn current_amount_decimal(&self) -> Decimal {
        self.current_amount.parse().unwrap_or(Decimal::ZERO)
    }

    pub fn is_achieved(&self) -> bool {
        self.current_amount_decimal() >= self.target_amount_decimal()
    }
}

/// Input for creating a savings goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub user_id: String,
    pub title: String,
    pub target_amount: Decimal,
    pub deadline: NaiveDate,
    pub description: Option<String>,
    pub auto_save: Option<bool>,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(GoalError::InvalidData("User ID cannot be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(GoalError::InvalidData("Title cannot be empty".to_string()));
        }
        if self.target_amount.is_sign_negative() {
            return Err(GoalError::InvalidData(format!(
                "Target amount must be non-negative, got {}",
                self.target_amount
            )));
        }
        Ok(())
    }
}

/// Partial update for a savings goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub title: Option<String>,
    pub target_amount: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub description: Option<String>,
    pub auto_save: Option<bool>,
}

impl GoalUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(target) = self.target_amount {
            if target.is_sign_negative() {
                return Err(GoalError::InvalidData(format!(
                    "Target amount must be non-negative, got {}",
                    target
                )));
            }
        }
        Ok(())
    }
}
