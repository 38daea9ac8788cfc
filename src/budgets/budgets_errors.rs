use diesel::result::Error as DieselError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Custom error type for budget-related operations
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Budget not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for BudgetError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => BudgetError::NotFound("Record not found".to_string()),
            _ => BudgetError::DatabaseError(err.to_string()),
        }
    }
}
