use async_trait::async_trait;
use rust_decimal::Decimal;

use super::goals_errors::Result;
use super::goals_model::{Goal, GoalUpdate, NewGoal};

/// Trait for goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    fn get_by_id(&self, goal_id: &str) -> Result<Goal>;
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn insert(&self, new_goal: &NewGoal) -> Result<Goal>;
    fn update(&self, goal: Goal) -> Result<Goal>;
    fn delete(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn update_goal(&self, update: GoalUpdate) -> Result<Goal>;
    /// Adds a strictly positive amount to the goal's accumulated progress
    async fn add_progress(&self, goal_id: &str, amount: Decimal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
}
