use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// Admin overview: registered-user count plus all transactions, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub transactions: Vec<Transaction>,
}
