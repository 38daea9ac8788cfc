use async_trait::async_trait;

use super::transactions_errors::Result;
use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};

/// Trait for transaction repository operations
pub trait TransactionRepositoryTrait: Send + Sync {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;
    /// All transactions for one user, newest first
    fn get_transactions_by_user(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn get_transactions_by_tag(&self, user_id: &str, tag: &str) -> Result<Vec<Transaction>>;
    /// Every stored transaction, newest first (admin dashboard)
    fn get_all_transactions(&self) -> Result<Vec<Transaction>>;
    fn insert(&self, transaction: Transaction) -> Result<Transaction>;
    fn update(&self, transaction: Transaction) -> Result<Transaction>;
    fn delete(&self, transaction_id: &str) -> Result<usize>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Validates, normalizes the amount into the owner's base currency and
    /// persists the transaction. Nothing is stored when any step fails.
    async fn create_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> crate::Result<Transaction>;
    fn get_transaction(&self, transaction_id: &str) -> crate::Result<Transaction>;
    fn get_transactions(&self, user_id: &str) -> crate::Result<Vec<Transaction>>;
    fn get_transactions_by_tag(&self, user_id: &str, tag: &str)
        -> crate::Result<Vec<Transaction>>;
    async fn update_transaction(&self, update: TransactionUpdate) -> crate::Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: &str) -> crate::Result<usize>;
}
