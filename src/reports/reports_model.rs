use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::transactions::Category;

/// Financial summary derived from a user's transaction history.
///
/// Never persisted: recomputed from scratch on every request. All amounts are
/// in the user's base currency since stored transactions are pre-normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_balance: Decimal,
    /// Expense totals per category; categories without expenses are absent.
    /// Income is deliberately not broken down.
    pub category_breakdown: HashMap<Category, Decimal>,
}

impl Report {
    pub fn empty() -> Self {
        Report {
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            net_balance: Decimal::ZERO,
            category_breakdown: HashMap::new(),
        }
    }
}
