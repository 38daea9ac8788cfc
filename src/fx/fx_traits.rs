use async_trait::async_trait;
use rust_decimal::Decimal;

use super::fx_errors::Result;

/// Trait defining the contract for an external exchange-rate source.
#[async_trait]
pub trait RateProviderTrait: Send + Sync {
    /// Returns the rate to convert one unit of `from_currency` into `to_currency`.
    async fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal>;
}

/// Trait defining the contract for currency normalization.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    async fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal>;

    /// Converts `amount` from `from_currency` into `to_currency`, rounded to
    /// the target currency's minor-unit precision. Identity conversions are
    /// returned unchanged without a rate lookup.
    async fn normalize(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal>;
}
