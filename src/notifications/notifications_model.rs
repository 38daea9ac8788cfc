use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::notifications::notifications_errors::{NotificationError, Result};
use crate::users::User;

/// Kinds of notifications delivered to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    #[serde(rename = "Spending Alert")]
    SpendingAlert,
    #[serde(rename = "Bill Reminder")]
    BillReminder,
    #[serde(rename = "Goal Reminder")]
    GoalReminder,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::SpendingAlert => "Spending Alert",
            NotificationType::BillReminder => "Bill Reminder",
            NotificationType::GoalReminder => "Goal Reminder",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Spending Alert" => Ok(NotificationType::SpendingAlert),
            "Bill Reminder" => Ok(NotificationType::BillReminder),
            "Goal Reminder" => Ok(NotificationType::GoalReminder),
            other => Err(NotificationError::InvalidData(format!(
                "Unknown notification type: {}",
                other
            ))),
        }
    }
}

/// A message delivered to a user's in-app inbox
#[derive(
    Queryable, Identifiable, Associations, AsChangeset, Selectable, Insertable, PartialEq,
    Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(User))]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub notification_type: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Notification {
    pub fn kind(&self) -> NotificationType {
        self.notification_type
            .parse()
            .unwrap_or(NotificationType::SpendingAlert)
    }
}

/// Input for creating a notification
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub user_id: String,
    pub message: String,
    pub notification_type: NotificationType,
}

impl NewNotification {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(NotificationError::InvalidData(
                "User ID cannot be empty".to_string(),
            ));
        }
        if self.message.trim().is_empty() {
            return Err(NotificationError::InvalidData(
                "Message cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
