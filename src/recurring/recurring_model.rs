use chrono::{Days, Months, NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::recurring::recurring_errors::{RecurringError, Result};
use crate::users::User;

/// How often a recurring transaction falls due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }

    /// The due date following `current` for this recurrence
    pub fn next_occurrence(&self, current: NaiveDate) -> NaiveDate {
        match self {
            Recurrence::Daily => current.checked_add_days(Days::new(1)).unwrap_or(current),
            Recurrence::Weekly => current.checked_add_days(Days::new(7)).unwrap_or(current),
            Recurrence::Monthly => current
                .checked_add_months(Months::new(1))
                .unwrap_or(current),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = RecurringError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            other => Err(RecurringError::InvalidData(format!(
                "Unknown recurrence: {}",
                other
            ))),
        }
    }
}

/// A scheduled transaction template that falls due on a cadence
#[derive(
    Queryable, Identifiable, Associations, AsChangeset, Selectable, Insertable, PartialEq,
    Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::recurring_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(User))]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransaction {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount: String,
    pub recurrence: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub next_due_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl RecurringTransaction {
    pub fn amount_decimal(&self) -> Decimal {
        self.amount.parse().unwrap_or(Decimal::ZERO)
    }

    pub fn recurrence_kind(&self) -> Recurrence {
        self.recurrence.parse().unwrap_or(Recurrence::Monthly)
    }
}

/// Input for scheduling a recurring transaction
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringTransaction {
    pub user_id: String,
    pub title: String,
    pub amount: Decimal,
    pub recurrence: Recurrence,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl NewRecurringTransaction {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(RecurringError::InvalidData(
                "User ID cannot be empty".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(RecurringError::InvalidData(
                "Title cannot be empty".to_string(),
            ));
        }
        if self.amount.is_sign_negative() {
            return Err(RecurringError::InvalidData(format!(
                "Amount must be non-negative, got {}",
                self.amount
            )));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(RecurringError::InvalidData(
                    "End date cannot precede start date".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_occurrence_daily_and_weekly() {
        assert_eq!(
            Recurrence::Daily.next_occurrence(date(2026, 8, 20)),
            date(2026, 8, 21)
        );
        assert_eq!(
            Recurrence::Weekly.next_occurrence(date(2026, 8, 20)),
            date(2026, 8, 27)
        );
    }

    #[test]
    fn test_next_occurrence_monthly_clamps_short_months() {
        assert_eq!(
            Recurrence::Monthly.next_occurrence(date(2026, 1, 31)),
            date(2026, 2, 28)
        );
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let recurring = NewRecurringTransaction {
            user_id: "u1".to_string(),
            title: "Rent".to_string(),
            amount: rust_decimal_macros::dec!(1500),
            recurrence: Recurrence::Monthly,
            start_date: date(2026, 9, 1),
            end_date: Some(date(2026, 8, 1)),
        };
        assert!(recurring.validate().is_err());
    }
}
