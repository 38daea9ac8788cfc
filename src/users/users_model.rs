use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::fx::currency;
use crate::users::users_errors::{Result, UserError};

/// A registered user. `currency` is the account base currency: every stored
/// transaction amount for this user is expressed in it.
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, Insertable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub currency: String,
    pub is_verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a user
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub currency: Option<String>,
}

impl NewUser {
    /// Validates the registration data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(UserError::InvalidData("Name cannot be empty".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(UserError::InvalidData("Email cannot be empty".to_string()));
        }
        if !self.email.contains('@') || self.email.starts_with('@') || self.email.ends_with('@') {
            return Err(UserError::InvalidData(format!(
                "Invalid email address: {}",
                self.email
            )));
        }
        if self.password.is_empty() {
            return Err(UserError::InvalidData(
                "Password cannot be empty".to_string(),
            ));
        }
        if let Some(code) = &self.currency {
            if !currency::is_valid_code(code) {
                return Err(UserError::InvalidData(format!(
                    "Invalid currency code: {}",
                    code
                )));
            }
        }
        Ok(())
    }

    /// Base currency to assign, falling back to the application default.
    pub fn base_currency(&self) -> String {
        self.currency
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> NewUser {
        NewUser {
            name: "Amara".to_string(),
            email: "amara@example.com".to_string(),
            password: "hunter2!".to_string(),
            currency: Some("USD".to_string()),
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(valid_user().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_email() {
        let mut user = valid_user();
        user.email = "not-an-email".to_string();
        assert!(matches!(
            user.validate().unwrap_err(),
            UserError::InvalidData(_)
        ));
    }

    #[test]
    fn test_rejects_bad_currency_code() {
        let mut user = valid_user();
        user.currency = Some("DOLLARS".to_string());
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_default_currency_applied_when_unset() {
        let mut user = valid_user();
        user.currency = None;
        assert_eq!(user.base_currency(), DEFAULT_BASE_CURRENCY);
    }
}
