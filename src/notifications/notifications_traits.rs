use async_trait::async_trait;

use super::notifications_errors::Result;
use super::notifications_model::{NewNotification, Notification};

/// Trait for notification repository operations
pub trait NotificationRepositoryTrait: Send + Sync {
    fn insert(&self, new_notification: &NewNotification) -> Result<Notification>;
    /// A user's notifications, newest first
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>>;
    fn mark_as_read(&self, notification_id: &str) -> Result<Notification>;
}

/// Trait for notification service operations
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    async fn create_notification(&self, new_notification: NewNotification)
        -> Result<Notification>;
    fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;
    async fn mark_as_read(&self, notification_id: &str) -> Result<Notification>;
}
