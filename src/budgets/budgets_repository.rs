use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::budgets::budgets_errors::{BudgetError, Result};
use crate::budgets::budgets_model::{Budget, NewBudget};
use crate::budgets::budgets_traits::BudgetRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::schema::budgets;

/// Repository for managing budget entries in the database
pub struct BudgetRepository {
    pool: Arc<DbPool>,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl BudgetRepositoryTrait for BudgetRepository {
    fn get_by_id(&self, budget_id: &str) -> Result<Budget> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| BudgetError::DatabaseError(e.to_string()))?;

        budgets::table
            .find(budget_id)
            .first::<Budget>(&mut conn)
            .optional()?
            .ok_or_else(|| BudgetError::NotFound(budget_id.to_string()))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| BudgetError::DatabaseError(e.to_string()))?;

        Ok(budgets::table
            .filter(budgets::user_id.eq(user_id))
            .order(budgets::created_at.desc())
            .load::<Budget>(&mut conn)?)
    }

    fn insert(&self, new_budget: &NewBudget) -> Result<Budget> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| BudgetError::DatabaseError(e.to_string()))?;

        let now = Utc::now().naive_utc();
        let budget = Budget {
            id: Uuid::new_v4().to_string(),
            user_id: new_budget.user_id.clone(),
            category: new_budget.category.as_str().to_string(),
            amount: new_budget.amount.to_string(),
            description: new_budget.description.clone(),
            notifications: new_budget.notifications.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(budgets::table)
            .values(&budget)
            .execute(&mut conn)?;

        Ok(budget)
    }

    fn update(&self, budget: Budget) -> Result<Budget> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| BudgetError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(budgets::table.find(&budget.id))
            .set(&budget)
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(BudgetError::NotFound(budget.id));
        }

        Ok(budget)
    }

    fn delete(&self, budget_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| BudgetError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(budgets::table.find(budget_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(BudgetError::NotFound(budget_id.to_string()));
        }

        Ok(affected)
    }
}
