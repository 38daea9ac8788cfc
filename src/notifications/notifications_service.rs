use async_trait::async_trait;
use std::sync::Arc;

use super::notifications_errors::Result;
use super::notifications_model::{NewNotification, Notification};
use super::notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};

/// Service for managing user notifications
pub struct NotificationService {
    repository: Arc<dyn NotificationRepositoryTrait>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn create_notification(
        &self,
        new_notification: NewNotification,
    ) -> Result<Notification> {
        new_notification.validate()?;
        self.repository.insert(&new_notification)
    }

    fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.repository.list_by_user(user_id)
    }

    async fn mark_as_read(&self, notification_id: &str) -> Result<Notification> {
        self.repository.mark_as_read(notification_id)
    }
}
