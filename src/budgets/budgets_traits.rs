use async_trait::async_trait;

use super::budgets_errors::Result;
use super::budgets_model::{Budget, BudgetUpdate, NewBudget};

/// Trait for budget repository operations
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_by_id(&self, budget_id: &str) -> Result<Budget>;
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Budget>>;
    fn insert(&self, new_budget: &NewBudget) -> Result<Budget>;
    fn update(&self, budget: Budget) -> Result<Budget>;
    fn delete(&self, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    async fn update_budget(&self, update: BudgetUpdate) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: &str) -> Result<usize>;
}
