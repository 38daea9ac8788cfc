use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::goals::goals_errors::{GoalError, Result};
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::goals;

/// Repository for managing savings goals in the database
pub struct GoalRepository {
    pool: Arc<DbPool>,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        goals::table
            .find(goal_id)
            .first::<Goal>(&mut conn)
            .optional()?
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        Ok(goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::deadline.asc())
            .load::<Goal>(&mut conn)?)
    }

    fn insert(&self, new_goal: &NewGoal) -> Result<Goal> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        let now = Utc::now().naive_utc();
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            user_id: new_goal.user_id.clone(),
            title: new_goal.title.clone(),
            description: new_goal.description.clone(),
            target_amount: new_goal.target_amount.to_string(),
            current_amount: "0".to_string(),
            deadline: new_goal.deadline,
            auto_save: new_goal.auto_save.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(goals::table)
            .values(&goal)
            .execute(&mut conn)?;

        Ok(goal)
    }

    fn update(&self, goal: Goal) -> Result<Goal> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(goals::table.find(&goal.id))
            .set(&goal)
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(GoalError::NotFound(goal.id));
        }

        Ok(goal)
    }

    fn delete(&self, goal_id: &str) -> Result<usize> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(goals::table.find(goal_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(GoalError::NotFound(goal_id.to_string()));
        }

        Ok(affected)
    }
}
