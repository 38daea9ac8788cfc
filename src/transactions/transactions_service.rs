use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::fx::FxServiceTrait;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};
use crate::users::UserRepositoryTrait;
use crate::Result;

/// Service for managing transactions.
///
/// Creation is: validate input, resolve the owning user, normalize the amount
/// into the user's base currency, persist. A failure anywhere aborts the
/// whole operation; no partially-converted amount ever reaches the store.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    fx_service: Arc<dyn FxServiceTrait>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        fx_service: Arc<dyn FxServiceTrait>,
    ) -> Self {
        Self {
            repository,
            user_repository,
            fx_service,
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        let user = self.user_repository.get_by_id(&new_transaction.user_id)?;

        let amount = self
            .fx_service
            .normalize(new_transaction.amount, &new_transaction.currency, &user.currency)
            .await?;

        debug!(
            "Creating transaction for user {}: {} {} stored as {} {}",
            user.id, new_transaction.amount, new_transaction.currency, amount, user.currency
        );

        let now = Utc::now();
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: user.id,
            amount,
            original_currency: new_transaction.currency,
            category: new_transaction.category,
            transaction_type: new_transaction.transaction_type,
            tags: new_transaction.tags,
            date: new_transaction.date.unwrap_or(now),
            description: new_transaction.description,
            created_at: now,
            updated_at: now,
        };

        Ok(self.repository.insert(transaction)?)
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        Ok(self.repository.get_transaction(transaction_id)?)
    }

    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        Ok(self.repository.get_transactions_by_user(user_id)?)
    }

    fn get_transactions_by_tag(&self, user_id: &str, tag: &str) -> Result<Vec<Transaction>> {
        Ok(self.repository.get_transactions_by_tag(user_id, tag)?)
    }

    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction> {
        update.validate()?;

        let existing = self.repository.get_transaction(&update.id)?;
        let updated = update.apply_to(existing);

        Ok(self.repository.update(updated)?)
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<usize> {
        Ok(self.repository.delete(transaction_id)?)
    }
}
