use diesel::result::Error as DieselError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecurringError>;

/// Custom error type for recurring-transaction operations
#[derive(Debug, Error)]
pub enum RecurringError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Recurring transaction not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Recurring transaction {0} has passed its end date")]
    Expired(String),
}

impl From<DieselError> for RecurringError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RecurringError::NotFound("Record not found".to_string()),
            _ => RecurringError::DatabaseError(err.to_string()),
        }
    }
}
