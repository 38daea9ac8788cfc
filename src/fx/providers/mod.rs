pub mod frankfurter_provider;

pub use frankfurter_provider::FrankfurterProvider;
