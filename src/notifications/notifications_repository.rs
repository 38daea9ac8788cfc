use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::notifications::notifications_errors::{NotificationError, Result};
use crate::notifications::notifications_model::{NewNotification, Notification};
use crate::notifications::notifications_traits::NotificationRepositoryTrait;
use crate::schema::notifications;

/// Repository for managing notifications in the database
pub struct NotificationRepository {
    pool: Arc<DbPool>,
}

impl NotificationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl NotificationRepositoryTrait for NotificationRepository {
    fn insert(&self, new_notification: &NewNotification) -> Result<Notification> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| NotificationError::DatabaseError(e.to_string()))?;

        let now = Utc::now().naive_utc();
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            user_id: new_notification.user_id.clone(),
            message: new_notification.message.clone(),
            notification_type: new_notification.notification_type.as_str().to_string(),
            is_read: false,
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(notifications::table)
            .values(&notification)
            .execute(&mut conn)?;

        Ok(notification)
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| NotificationError::DatabaseError(e.to_string()))?;

        Ok(notifications::table
            .filter(notifications::user_id.eq(user_id))
            .order(notifications::created_at.desc())
            .load::<Notification>(&mut conn)?)
    }

    fn mark_as_read(&self, notification_id: &str) -> Result<Notification> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| NotificationError::DatabaseError(e.to_string()))?;

        let affected = diesel::update(notifications::table.find(notification_id))
            .set((
                notifications::is_read.eq(true),
                notifications::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(NotificationError::NotFound(notification_id.to_string()));
        }

        Ok(notifications::table
            .find(notification_id)
            .first::<Notification>(&mut conn)?)
    }
}
