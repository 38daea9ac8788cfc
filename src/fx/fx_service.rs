use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::currency;
use super::fx_errors::{FxError, Result};
use super::fx_traits::{FxServiceTrait, RateProviderTrait};

/// Service that normalizes amounts into a target currency using an external
/// rate source. Stateless: one rate lookup per conversion, no retries.
pub struct FxService {
    provider: Arc<dyn RateProviderTrait>,
}

impl FxService {
    pub fn new(provider: Arc<dyn RateProviderTrait>) -> Self {
        Self { provider }
    }

    fn validate_code(code: &str) -> Result<()> {
        if !currency::is_valid_code(code) {
            return Err(FxError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(Decimal::ONE);
        }

        Self::validate_code(from_currency)?;
        Self::validate_code(to_currency)?;

        self.provider.get_rate(from_currency, to_currency).await
    }

    async fn normalize(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal> {
        if amount.is_sign_negative() {
            return Err(FxError::InvalidAmount(format!(
                "Amount must be non-negative, got {}",
                amount
            )));
        }

        // Identity fast path: no lookup, no rounding drift
        if from_currency == to_currency {
            return Ok(amount);
        }

        Self::validate_code(from_currency)?;
        Self::validate_code(to_currency)?;

        let rate = self.provider.get_rate(from_currency, to_currency).await?;
        let converted = currency::round_to_minor_units(amount * rate, to_currency);

        debug!(
            "Normalized {} {} -> {} {} at rate {}",
            amount, from_currency, converted, to_currency, rate
        );

        Ok(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    struct MockRateProvider {
        rates: HashMap<(String, String), Decimal>,
    }

    impl MockRateProvider {
        fn new() -> Self {
            MockRateProvider {
                rates: HashMap::new(),
            }
        }

        fn with_rate(mut self, from: &str, to: &str, rate: Decimal) -> Self {
            self.rates.insert((from.to_string(), to.to_string()), rate);
            self
        }
    }

    #[async_trait]
    impl RateProviderTrait for MockRateProvider {
        async fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
            self.rates
                .get(&(from_currency.to_string(), to_currency.to_string()))
                .copied()
                .ok_or_else(|| {
                    FxError::RateUnavailable(format!("{}/{}", from_currency, to_currency))
                })
        }
    }

    #[tokio::test]
    async fn test_identity_conversion_returns_amount_unchanged() {
        let service = FxService::new(Arc::new(MockRateProvider::new()));

        // No rate registered for USD/USD: the fast path must not consult the provider
        let result = service.normalize(dec!(123.456), "USD", "USD").await.unwrap();
        assert_eq!(result, dec!(123.456));
    }

    #[tokio::test]
    async fn test_conversion_applies_rate_and_rounds() {
        let provider = MockRateProvider::new().with_rate("EUR", "USD", dec!(1.1));
        let service = FxService::new(Arc::new(provider));

        let result = service.normalize(dec!(100), "EUR", "USD").await.unwrap();
        assert_eq!(result, dec!(110.00));
    }

    #[tokio::test]
    async fn test_conversion_rounds_half_to_even() {
        let provider = MockRateProvider::new().with_rate("EUR", "USD", dec!(1));
        let service = FxService::new(Arc::new(provider));

        let result = service.normalize(dec!(2.345), "EUR", "USD").await.unwrap();
        assert_eq!(result, dec!(2.34));
    }

    #[tokio::test]
    async fn test_conversion_respects_target_minor_units() {
        let provider = MockRateProvider::new().with_rate("USD", "JPY", dec!(147.3));
        let service = FxService::new(Arc::new(provider));

        let result = service.normalize(dec!(10), "USD", "JPY").await.unwrap();
        assert_eq!(result, dec!(1473));
        assert_eq!(result.scale(), 0);
    }

    #[tokio::test]
    async fn test_negative_amount_is_rejected_before_lookup() {
        let service = FxService::new(Arc::new(MockRateProvider::new()));

        let err = service.normalize(dec!(-1), "EUR", "USD").await.unwrap_err();
        assert!(matches!(err, FxError::InvalidAmount(_)));
    }

    #[tokio::test]
    async fn test_missing_rate_propagates() {
        let service = FxService::new(Arc::new(MockRateProvider::new()));

        let err = service.normalize(dec!(100), "XYZ", "USD").await.unwrap_err();
        assert!(matches!(err, FxError::RateUnavailable(_)));
    }

    #[tokio::test]
    async fn test_invalid_currency_code_is_rejected() {
        let service = FxService::new(Arc::new(MockRateProvider::new()));

        let err = service.normalize(dec!(100), "EURO", "USD").await.unwrap_err();
        assert!(matches!(err, FxError::InvalidCurrencyCode(_)));
    }
}
