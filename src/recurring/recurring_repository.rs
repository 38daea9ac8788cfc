use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::recurring::recurring_errors::{RecurringError, Result};
use crate::recurring::recurring_model::{NewRecurringTransaction, RecurringTransaction};
use crate::recurring::recurring_traits::RecurringRepositoryTrait;
use crate::schema::recurring_transactions;

/// Repository for managing recurring transactions in the database
pub struct RecurringRepository {
    pool: Arc<DbPool>,
}

impl RecurringRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl RecurringRepositoryTrait for RecurringRepository {
    fn get_by_id(&self, recurring_id: &str) -> Result<RecurringTransaction> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RecurringError::DatabaseError(e.to_string()))?;

        recurring_transactions::table
            .find(recurring_id)
            .first::<RecurringTransaction>(&mut conn)
            .optional()?
            .ok_or_else(|| RecurringError::NotFound(recurring_id.to_string()))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<RecurringTransaction>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RecurringError::DatabaseError(e.to_string()))?;

        Ok(recurring_transactions::table
            .filter(recurring_transactions::user_id.eq(user_id))
            .order(recurring_transactions::next_due_date.asc())
            .load::<RecurringTransaction>(&mut conn)?)
    }

    fn insert(&self, new_recurring: &NewRecurringTransaction) -> Result<RecurringTransaction> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RecurringError::DatabaseError(e.to_string()))?;

        let recurring = RecurringTransaction {
            id: Uuid::new_v4().to_string(),
            user_id: new_recurring.user_id.clone(),
            title: new_recurring.title.clone(),
            amount: new_recurring.amount.to_string(),
            recurrence: new_recurring.recurrence.as_str().to_string(),
            start_date: new_recurring.start_date,
            end_date: new_recurring.end_date,
            // First occurrence falls due on the start date itself
            next_due_date: new_recurring.start_date,
            created_at: Utc::now().naive_utc(),
        };

        diesel::insert_into(recurring_transactions::table)
            .values(&recurring)
            .execute(&mut conn)?;

        Ok(recurring)
    }

    fn update(&self, recurring: RecurringTransaction) -> Result<RecurringTransaction> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RecurringError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(recurring_transactions::table.find(&recurring.id))
            .set(&recurring)
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RecurringError::NotFound(recurring.id));
        }

        Ok(recurring)
    }

    fn delete(&self, recurring_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RecurringError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(recurring_transactions::table.find(recurring_id))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RecurringError::NotFound(recurring_id.to_string()));
        }

        Ok(affected)
    }
}
