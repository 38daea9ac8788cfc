pub mod notifications_errors;
pub mod notifications_model;
pub mod notifications_repository;
pub mod notifications_service;
pub mod notifications_traits;

pub use notifications_errors::NotificationError;
pub use notifications_model::{NewNotification, Notification, NotificationType};
pub use notifications_repository::NotificationRepository;
pub use notifications_service::NotificationService;
pub use notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
