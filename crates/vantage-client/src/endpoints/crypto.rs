//! Cryptocurrency series endpoints

use crate::transport::Transport;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use vantage_core::{FuncType, Result};
use vantage_models::CryptoSeries;

/// Cryptocurrency endpoints for intraday, daily, weekly and monthly series
pub struct CryptoEndpoints {
    transport: Arc<Transport>,
}

impl CryptoEndpoints {
    /// Create a new crypto endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get intraday cryptocurrency data
    ///
    /// # Arguments
    ///
    /// * `symbol` - The digital currency code (e.g., "BTC")
    /// * `market` - The exchange market (e.g., "USD")
    /// * `interval` - Time interval: "1min", "5min", "15min", "30min", "60min"
    #[instrument(skip(self), fields(symbol, market, interval))]
    pub async fn intraday(
        &self,
        symbol: &str,
        market: &str,
        interval: &str,
    ) -> Result<CryptoSeries> {
        self.fetch(FuncType::CryptoIntraday, symbol, market, Some(interval)).await
    }

    /// Get daily cryptocurrency data
    #[instrument(skip(self), fields(symbol, market))]
    pub async fn daily(&self, symbol: &str, market: &str) -> Result<CryptoSeries> {
        self.fetch(FuncType::CryptoDaily, symbol, market, None).await
    }

    /// Get weekly cryptocurrency data
    #[instrument(skip(self), fields(symbol, market))]
    pub async fn weekly(&self, symbol: &str, market: &str) -> Result<CryptoSeries> {
        self.fetch(FuncType::CryptoWeekly, symbol, market, None).await
    }

    /// Get monthly cryptocurrency data
    #[instrument(skip(self), fields(symbol, market))]
    pub async fn monthly(&self, symbol: &str, market: &str) -> Result<CryptoSeries> {
        self.fetch(FuncType::CryptoMonthly, symbol, market, None).await
    }

    async fn fetch(
        &self,
        function: FuncType,
        symbol: &str,
        market: &str,
        interval: Option<&str>,
    ) -> Result<CryptoSeries> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("market".to_string(), market.to_string());
        if let Some(interval) = interval {
            params.insert("interval".to_string(), interval.to_string());
        }

        let body = self.transport.get_raw(function.as_str(), params).await?;
        CryptoSeries::from_json(body.as_bytes())
    }
}
