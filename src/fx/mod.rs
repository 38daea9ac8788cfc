pub mod currency;
pub mod fx_errors;
pub mod fx_service;
pub mod fx_traits;
pub mod providers;

pub use fx_errors::FxError;
pub use fx_service::FxService;
pub use fx_traits::{FxServiceTrait, RateProviderTrait};
