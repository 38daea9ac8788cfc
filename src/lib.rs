pub mod db;

pub mod budgets;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod fx;
pub mod goals;
pub mod notifications;
pub mod recurring;
pub mod reports;
pub mod schema;
pub mod transactions;
pub mod users;

pub use errors::{Error, Result};
