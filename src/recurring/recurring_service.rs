use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::recurring_errors::{RecurringError, Result};
use super::recurring_model::{NewRecurringTransaction, RecurringTransaction};
use super::recurring_traits::{RecurringRepositoryTrait, RecurringServiceTrait};

/// Service for managing recurring transactions
pub struct RecurringService {
    repository: Arc<dyn RecurringRepositoryTrait>,
}

impl RecurringService {
    pub fn new(repository: Arc<dyn RecurringRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RecurringServiceTrait for RecurringService {
    async fn create_recurring(
        &self,
        new_recurring: NewRecurringTransaction,
    ) -> Result<RecurringTransaction> {
        new_recurring.validate()?;
        self.repository.insert(&new_recurring)
    }

    fn get_recurring_transactions(&self, user_id: &str) -> Result<Vec<RecurringTransaction>> {
        self.repository.list_by_user(user_id)
    }

    async fn advance(&self, recurring_id: &str) -> Result<RecurringTransaction> {
        let mut recurring = self.repository.get_by_id(recurring_id)?;

        let next = recurring
            .recurrence_kind()
            .next_occurrence(recurring.next_due_date);

        if let Some(end) = recurring.end_date {
            if next > end {
                return Err(RecurringError::Expired(recurring.id));
            }
        }

        debug!(
            "Advancing recurring transaction {} from {} to {}",
            recurring.id, recurring.next_due_date, next
        );

        recurring.next_due_date = next;
        self.repository.update(recurring)
    }

    async fn delete_recurring(&self, recurring_id: &str) -> Result<usize> {
        self.repository.delete(recurring_id)
    }
}
