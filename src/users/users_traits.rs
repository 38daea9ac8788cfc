use async_trait::async_trait;

use super::users_errors::Result;
use super::users_model::{NewUser, User};

/// Trait for user repository operations
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn get_by_email(&self, email: &str) -> Result<Option<User>>;
    fn create(&self, new_user: &NewUser, password_hash: &str) -> Result<User>;
    fn count(&self) -> Result<i64>;
}

/// Trait for password hashing, kept behind a seam so the scheme can change
/// without touching the service.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, new_user: NewUser) -> Result<User>;
    fn verify_credentials(&self, email: &str, password: &str) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn count_users(&self) -> Result<i64>;
}
