use thiserror::Error;

pub type Result<T> = std::result::Result<T, FxError>;

/// Custom error type for currency conversion operations
#[derive(Debug, Error)]
pub enum FxError {
    #[error("Exchange rate unavailable for {0}")]
    RateUnavailable(String),
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Rate provider error: {0}")]
    ProviderError(String),
}

impl From<FxError> for String {
    fn from(error: FxError) -> Self {
        error.to_string()
    }
}
