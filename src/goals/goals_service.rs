use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::goals_errors::{GoalError, Result};
use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

/// Service for managing savings goals
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.repository.insert(&new_goal)
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.repository.get_by_id(goal_id)
    }

    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.repository.list_by_user(user_id)
    }

    async fn update_goal(&self, update: GoalUpdate) -> Result<Goal> {
        update.validate()?;

        let mut goal = self.repository.get_by_id(&update.id)?;
        if let Some(title) = update.title {
            goal.title = title;
        }
        if let Some(target) = update.target_amount {
            goal.target_amount = target.to_string();
        }
        if let Some(deadline) = update.deadline {
            goal.deadline = deadline;
        }
        if let Some(description) = update.description {
            goal.description = Some(description);
        }
        if let Some(auto_save) = update.auto_save {
            goal.auto_save = auto_save;
        }
        goal.updated_at = Utc::now().naive_utc();

        self.repository.update(goal)
    }

    async fn add_progress(&self, goal_id: &str, amount: Decimal) -> Result<Goal> {
        if amount <= Decimal::zero() {
            return Err(GoalError::InvalidData(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let mut goal = self.repository.get_by_id(goal_id)?;
        let current = goal.current_amount_decimal() + amount;
        goal.current_amount = current.to_string();
        goal.updated_at = Utc::now().naive_utc();

        debug!("Goal {} progress now {} of {}", goal.id, goal.current_amount, goal.target_amount);

        self.repository.update(goal)
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        self.repository.delete(goal_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct InMemoryGoalRepository {
        goals: Mutex<HashMap<String, Goal>>,
    }

    impl InMemoryGoalRepository {
        fn new() -> Self {
            InMemoryGoalRepository {
                goals: Mutex::new(HashMap::new()),
            }
        }
    }

    impl GoalRepositoryTrait for InMemoryGoalRepository {
        fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
            self.goals
                .lock()
                .unwrap()
                .get(goal_id)
                .cloned()
                .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))
        }

        fn list_by_user(&self, user_id: &str) -> Result<Vec<Goal>> {
            Ok(self
                .goals
                .lock()
                .unwrap()
                .values()
                .filter(|g| g.user_id == user_id)
                .cloned()
                .collect())
        }

        fn insert(&self, new_goal: &NewGoal) -> Result<Goal> {
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
            self.goals
                .lock()
                .unwrap()
                .insert(goal.id.clone(), goal.clone());
            Ok(goal)
        }

        fn update(&self, goal: Goal) -> Result<Goal> {
            self.goals
                .lock()
                .unwrap()
                .insert(goal.id.clone(), goal.clone());
            Ok(goal)
        }

        fn delete(&self, goal_id: &str) -> Result<usize> {
            match self.goals.lock().unwrap().remove(goal_id) {
                Some(_) => Ok(1),
                None => Err(GoalError::NotFound(goal_id.to_string())),
            }
        }
    }

    fn new_goal() -> NewGoal {
        NewGoal {
            user_id: "u1".to_string(),
            title: "Emergency fund".to_string(),
            target_amount: dec!(1000),
            deadline: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            description: None,
            auto_save: None,
        }
    }

    #[tokio::test]
    async fn test_add_progress_accumulates() {
        let service = GoalService::new(Arc::new(InMemoryGoalRepository::new()));
        let goal = service.create_goal(new_goal()).await.unwrap();

        service.add_progress(&goal.id, dec!(300)).await.unwrap();
        let goal = service.add_progress(&goal.id, dec!(700.50)).await.unwrap();

        assert_eq!(goal.current_amount_decimal(), dec!(1000.50));
        assert!(goal.is_achieved());
    }

    #[tokio::test]
    async fn test_add_progress_rejects_non_positive_amount() {
        let service = GoalService::new(Arc::new(InMemoryGoalRepository::new()));
        let goal = service.create_goal(new_goal()).await.unwrap();

        assert!(service.add_progress(&goal.id, dec!(0)).await.is_err());
        assert!(service.add_progress(&goal.id, dec!(-5)).await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_negative_target() {
        let service = GoalService::new(Arc::new(InMemoryGoalRepository::new()));
        let mut goal = new_goal();
        goal.target_amount = dec!(-1);

        assert!(matches!(
            service.create_goal(goal).await.unwrap_err(),
            GoalError::InvalidData(_)
        ));
    }
}
