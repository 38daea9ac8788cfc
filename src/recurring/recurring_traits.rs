use async_trait::async_trait;

use super::recurring_errors::Result;
use super::recurring_model::{NewRecurringTransaction, RecurringTransaction};

/// Trait for recurring-transaction repository operations
pub trait RecurringRepositoryTrait: Send + Sync {
    fn get_by_id(&self, recurring_id: &str) -> Result<RecurringTransaction>;
    fn list_by_user(&self, user_id: &str) -> Result<Vec<RecurringTransaction>>;
    fn insert(&self, new_recurring: &NewRecurringTransaction) -> Result<RecurringTransaction>;
    fn update(&self, recurring: RecurringTransaction) -> Result<RecurringTransaction>;
    fn delete(&self, recurring_id: &str) -> Result<usize>;
}

/// Trait for recurring-transaction service operations
#[async_trait]
pub trait RecurringServiceTrait: Send + Sync {
    async fn create_recurring(
        &self,
        new_recurring: NewRecurringTransaction,
    ) -> Result<RecurringTransaction>;
    fn get_recurring_transactions(&self, user_id: &str) -> Result<Vec<RecurringTransaction>>;
    /// Moves `next_due_date` forward one recurrence period; fails with
    /// `Expired` when the next occurrence would pass the end date.
    async fn advance(&self, recurring_id: &str) -> Result<RecurringTransaction>;
    async fn delete_recurring(&self, recurring_id: &str) -> Result<usize>;
}
