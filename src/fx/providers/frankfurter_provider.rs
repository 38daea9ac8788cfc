use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::fx::fx_errors::{FxError, Result};
use crate::fx::fx_traits::RateProviderTrait;

const BASE_URL: &str = "https://api.frankfurter.dev/v1/latest";

/// Exchange-rate source backed by the Frankfurter API.
pub struct FrankfurterProvider {
    client: Client,
}

impl FrankfurterProvider {
    pub fn new() -> Self {
        FrankfurterProvider {
            client: Client::new(),
        }
    }
}

impl Default for FrankfurterProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[allow(dead_code)]
    base: String,
    rates: HashMap<String, Decimal>,
}

#[async_trait]
impl RateProviderTrait for FrankfurterProvider {
    async fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(Decimal::ONE);
        }

        let url = reqwest::Url::parse_with_params(
            BASE_URL,
            &[("base", from_currency), ("symbols", to_currency)],
        )
        .map_err(|e| FxError::ProviderError(format!("Failed to build URL: {}", e)))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FxError::ProviderError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FxError::RateUnavailable(format!(
                "{}/{}: rate source returned {}",
                from_currency,
                to_currency,
                response.status()
            )));
        }

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| FxError::ProviderError(e.to_string()))?;

        body.rates
            .get(to_currency)
            .copied()
            .ok_or_else(|| FxError::RateUnavailable(format!("{}/{}", from_currency, to_currency)))
    }
}
