use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::users_errors::{Result, UserError};
use super::users_model::{NewUser, User};
use super::users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};

/// Service for registering users and verifying credentials
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    hasher: Arc<dyn PasswordHasherTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        hasher: Arc<dyn PasswordHasherTrait>,
    ) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;

        if self.repository.get_by_email(&new_user.email)?.is_some() {
            return Err(UserError::AlreadyExists(new_user.email));
        }

        let password_hash = self.hasher.hash(&new_user.password)?;
        let user = self.repository.create(&new_user, &password_hash)?;

        debug!("Registered user {} with base currency {}", user.id, user.currency);
        Ok(user)
    }

    fn verify_credentials(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .repository
            .get_by_email(email)?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn count_users(&self) -> Result<i64> {
        self.repository.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryUserRepository {
        users: Mutex<HashMap<String, User>>,
    }

    impl InMemoryUserRepository {
        fn new() -> Self {
            InMemoryUserRepository {
                users: Mutex::new(HashMap::new()),
            }
        }
    }

    impl UserRepositoryTrait for InMemoryUserRepository {
        fn get_by_id(&self, user_id: &str) -> Result<User> {
            self.users
                .lock()
                .unwrap()
                .get(user_id)
                .cloned()
                .ok_or_else(|| UserError::NotFound(user_id.to_string()))
        }

        fn get_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned())
        }

        fn create(&self, new_user: &NewUser, password_hash: &str) -> Result<User> {
            let now = Utc::now().naive_utc();
            let user = User {
                id: format!("user-{}", self.users.lock().unwrap().len() + 1),
                name: new_user.name.clone(),
                email: new_user.email.clone(),
                password_hash: password_hash.to_string(),
                currency: new_user.base_currency(),
                is_verified: false,
                created_at: now,
                updated_at: now,
            };
            self.users
                .lock()
                .unwrap()
                .insert(user.id.clone(), user.clone());
            Ok(user)
        }

        fn count(&self) -> Result<i64> {
            Ok(self.users.lock().unwrap().len() as i64)
        }
    }

    /// Plain-text "hasher" so tests are not slowed down by argon2
    struct PlainHasher;

    impl PasswordHasherTrait for PlainHasher {
        fn hash(&self, password: &str) -> Result<String> {
            Ok(format!("plain:{}", password))
        }

        fn verify(&self, password: &str, password_hash: &str) -> Result<bool> {
            Ok(password_hash == format!("plain:{}", password))
        }
    }

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(PlainHasher))
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            currency: Some("USD".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let service = service();
        let user = service.register(new_user("a@b.com")).await.unwrap();
        assert_eq!(user.currency, "USD");

        let logged_in = service.verify_credentials("a@b.com", "secret").unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let service = service();
        service.register(new_user("a@b.com")).await.unwrap();

        let err = service.register(new_user("a@b.com")).await.unwrap_err();
        assert!(matches!(err, UserError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let service = service();
        service.register(new_user("a@b.com")).await.unwrap();

        let err = service.verify_credentials("a@b.com", "nope").unwrap_err();
        assert!(matches!(err, UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user_lookup_fails() {
        let service = service();
        assert!(matches!(
            service.get_user("missing").unwrap_err(),
            UserError::NotFound(_)
        ));
    }
}
