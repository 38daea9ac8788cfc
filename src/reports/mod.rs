pub mod reports_model;
pub mod reports_service;

pub use reports_model::Report;
pub use reports_service::{aggregate, ReportService, ReportServiceTrait};
