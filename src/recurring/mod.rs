pub mod recurring_errors;
pub mod recurring_model;
pub mod recurring_repository;
pub mod recurring_service;
pub mod recurring_traits;

pub use recurring_errors::RecurringError;
pub use recurring_model::{NewRecurringTransaction, Recurrence, RecurringTransaction};
pub use recurring_repository::RecurringRepository;
pub use recurring_service::RecurringService;
pub use recurring_traits::{RecurringRepositoryTrait, RecurringServiceTrait};
