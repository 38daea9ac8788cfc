use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::budgets_errors::Result;
use super::budgets_model::{Budget, BudgetUpdate, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};

/// Service for managing budget entries
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        self.repository.insert(&new_budget)
    }

    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.repository.list_by_user(user_id)
    }

    async fn update_budget(&self, update: BudgetUpdate) -> Result<Budget> {
        update.validate()?;

        let mut budget = self.repository.get_by_id(&update.id)?;
        if let Some(category) = update.category {
            budget.category = category.as_str().to_string();
        }
        if let Some(amount) = update.amount {
            budget.amount = amount.to_string();
        }
        if let Some(description) = update.description {
            budget.description = Some(description);
        }
        if let Some(notifications) = update.notifications {
            budget.notifications = notifications;
        }
        budget.updated_at = Utc::now().naive_utc();

        self.repository.update(budget)
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<usize> {
        self.repository.delete(budget_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::budgets_errors::BudgetError;
    use crate::transactions::Category;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct InMemoryBudgetRepository {
        budgets: Mutex<HashMap<String, Budget>>,
    }

    impl InMemoryBudgetRepository {
        fn new() -> Self {
            InMemoryBudgetRepository {
                budgets: Mutex::new(HashMap::new()),
            }
        }
    }

    impl BudgetRepositoryTrait for InMemoryBudgetRepository {
        fn get_by_id(&self, budget_id: &str) -> Result<Budget> {
            self.budgets
                .lock()
                .unwrap()
                .get(budget_id)
                .cloned()
                .ok_or_else(|| BudgetError::NotFound(budget_id.to_string()))
        }

        fn list_by_user(&self, user_id: &str) -> Result<Vec<Budget>> {
            Ok(self
                .budgets
                .lock()
                .unwrap()
                .values()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect())
        }

        fn insert(&self, new_budget: &NewBudget) -> Result<Budget> {
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
            self.budgets
                .lock()
                .unwrap()
                .insert(budget.id.clone(), budget.clone());
            Ok(budget)
        }

        fn update(&self, budget: Budget) -> Result<Budget> {
            self.budgets
                .lock()
                .unwrap()
                .insert(budget.id.clone(), budget.clone());
            Ok(budget)
        }

        fn delete(&self, budget_id: &str) -> Result<usize> {
            match self.budgets.lock().unwrap().remove(budget_id) {
                Some(_) => Ok(1),
                None => Err(BudgetError::NotFound(budget_id.to_string())),
            }
        }
    }

    fn new_budget() -> NewBudget {
        NewBudget {
            user_id: "u1".to_string(),
            category: Category::Food,
            amount: dec!(20000),
            description: None,
            notifications: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_notifications_on() {
        let service = BudgetService::new(Arc::new(InMemoryBudgetRepository::new()));
        let budget = service.create_budget(new_budget()).await.unwrap();

        assert!(budget.notifications);
        assert_eq!(budget.amount_decimal(), dec!(20000));
    }

    #[tokio::test]
    async fn test_update_merges_only_given_fields() {
        let service = BudgetService::new(Arc::new(InMemoryBudgetRepository::new()));
        let budget = service.create_budget(new_budget()).await.unwrap();

        let updated = service
            .update_budget(BudgetUpdate {
                id: budget.id.clone(),
                category: None,
                amount: Some(dec!(25000)),
                description: None,
                notifications: Some(false),
            })
            .await
            .unwrap();

        assert_eq!(updated.amount_decimal(), dec!(25000));
        assert_eq!(updated.category, "Food");
        assert!(!updated.notifications);
    }

    #[tokio::test]
    async fn test_negative_amount_rejected() {
        let service = BudgetService::new(Arc::new(InMemoryBudgetRepository::new()));
        let mut budget = new_budget();
        budget.amount = dec!(-1);

        assert!(matches!(
            service.create_budget(budget).await.unwrap_err(),
            BudgetError::InvalidData(_)
        ));
    }
}
