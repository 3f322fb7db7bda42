//! Currency exchange rate endpoint

use crate::transport::Transport;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use vantage_core::{FuncType, Result};
use vantage_models::ExchangeRate;

/// Currency exchange endpoints
pub struct ForexEndpoints {
    transport: Arc<Transport>,
}

impl ForexEndpoints {
    /// Create a new forex endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get the realtime exchange rate for a currency pair.
    ///
    /// Both physical currencies ("USD", "EUR") and digital currencies
    /// ("BTC") are accepted on either side of the pair.
    #[instrument(skip(self), fields(from_currency, to_currency))]
    pub async fn exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ExchangeRate> {
        let mut params = HashMap::new();
        params.insert("from_currency".to_string(), from_currency.to_string());
        params.insert("to_currency".to_string(), to_currency.to_string());

        let body = self.transport.get_raw(FuncType::CurrencyExchangeRate.as_str(), params).await?;
        ExchangeRate::from_json(body.as_bytes())
    }
}
