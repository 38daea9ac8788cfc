use std::sync::Arc;

use super::dashboard_model::DashboardStats;
use crate::transactions::TransactionRepositoryTrait;
use crate::users::UserRepositoryTrait;
use crate::Result;

/// Trait defining the contract for the dashboard service
pub trait DashboardServiceTrait: Send + Sync {
    fn stats(&self) -> Result<DashboardStats>;
}

pub struct DashboardService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            transaction_repository,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn stats(&self) -> Result<DashboardStats> {
        let total_users = self.user_repository.count()?;
        let transactions = self.transaction_repository.get_all_transactions()?;

        Ok(DashboardStats {
            total_users,
            transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::transactions::transactions_errors::TransactionError;
    use crate::transactions::{Category, Transaction, TransactionType};
    use crate::users::users_errors::UserError;
    use crate::users::{NewUser, User};

    struct MockUserRepository {
        user_count: i64,
    }

    impl UserRepositoryTrait for MockUserRepository {
        fn get_by_id(&self, user_id: &str) -> crate::users::users_errors::Result<User> {
            Err(UserError::NotFound(user_id.to_string()))
        }

        fn get_by_email(&self, _email: &str) -> crate::users::users_errors::Result<Option<User>> {
            Ok(None)
        }

        fn create(
            &self,
            _new_user: &NewUser,
            _password_hash: &str,
        ) -> crate::users::users_errors::Result<User> {
            Err(UserError::InvalidData("not supported".to_string()))
        }

        fn count(&self) -> crate::users::users_errors::Result<i64> {
            Ok(self.user_count)
        }
    }

    struct MockTransactionRepository {
        transactions: Vec<Transaction>,
    }

    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn get_transaction(
            &self,
            transaction_id: &str,
        ) -> crate::transactions::transactions_errors::Result<Transaction> {
            Err(TransactionError::NotFound(transaction_id.to_string()))
        }

        fn get_transactions_by_user(
            &self,
            user_id: &str,
        ) -> crate::transactions::transactions_errors::Result<Vec<Transaction>> {
            Ok(self
                .transactions
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_transactions_by_tag(
            &self,
            _user_id: &str,
            _tag: &str,
        ) -> crate::transactions::transactions_errors::Result<Vec<Transaction>> {
            Ok(Vec::new())
        }

        fn get_all_transactions(
            &self,
        ) -> crate::transactions::transactions_errors::Result<Vec<Transaction>> {
            Ok(self.transactions.clone())
        }

        fn insert(
            &self,
            transaction: Transaction,
        ) -> crate::transactions::transactions_errors::Result<Transaction> {
            Ok(transaction)
        }

        fn update(
            &self,
            transaction: Transaction,
        ) -> crate::transactions::transactions_errors::Result<Transaction> {
            Ok(transaction)
        }

        fn delete(
            &self,
            _transaction_id: &str,
        ) -> crate::transactions::transactions_errors::Result<usize> {
            Ok(0)
        }
    }

    fn sample_transaction(id: &str, user_id: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            user_id: user_id.to_string(),
            amount: dec!(100),
            original_currency: "LKR".to_string(),
            category: Category::Food,
            transaction_type: TransactionType::Expense,
            tags: Vec::new(),
            date: Utc::now(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_stats_reports_users_and_all_transactions() {
        let service = DashboardService::new(
            Arc::new(MockUserRepository { user_count: 3 }),
            Arc::new(MockTransactionRepository {
                transactions: vec![
                    sample_transaction("t1", "u1"),
                    sample_transaction("t2", "u2"),
                ],
            }),
        );

        let stats = service.stats().unwrap();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.transactions.len(), 2);
        assert_eq!(stats.transactions[0].id, "t1");
    }

    #[test]
    fn test_stats_with_no_data() {
        let service = DashboardService::new(
            Arc::new(MockUserRepository { user_count: 0 }),
            Arc::new(MockTransactionRepository {
                transactions: Vec::new(),
            }),
        );

        let stats = service.stats().unwrap();
        assert_eq!(stats.total_users, 0);
        assert!(stats.transactions.is_empty());
    }
}
