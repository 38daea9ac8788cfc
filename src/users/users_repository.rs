use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::schema::users;
use crate::users::users_errors::{Result, UserError};
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::UserRepositoryTrait;

/// Repository for managing user records in the database
pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        users::table
            .find(user_id)
            .first::<User>(&mut conn)
            .optional()?
            .ok_or_else(|| UserError::NotFound(user_id.to_string()))
    }

    fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(users::table
            .filter(users::email.eq(email))
            .first::<User>(&mut conn)
            .optional()?)
    }

    fn create(&self, new_user: &NewUser, password_hash: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let now = Utc::now().naive_utc();
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password_hash: password_hash.to_string(),
            currency: new_user.base_currency(),
            is_verified: false,
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(users::table)
            .values(&user)
            .execute(&mut conn)?;

        Ok(user)
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(users::table.count().get_result(&mut conn)?)
    }
}
