//! Time series and quote endpoints for stock prices
//!
//! This module provides access to AlphaVantage's time series data:
//! - Intraday prices (1min, 5min, 15min, 30min, 60min)
//! - Daily prices with full/compact output, plain and adjusted
//! - Weekly and monthly prices, plain and adjusted
//! - The global quote snapshot

use crate::transport::Transport;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use vantage_core::{FuncType, Result};
use vantage_models::{AdjustedOhlcv, Ohlcv, Quote, TimeSeries};

/// Time series endpoints for historical and intraday price data
pub struct TimeSeriesEndpoints {
    transport: Arc<Transport>,
}

/// Optional query parameters for the intraday endpoint.
///
/// Every field is a genuine option: `None` means "let the API use its
/// default", `Some` is forwarded verbatim.
#[derive(Debug, Clone, Default)]
pub struct IntradayOptions {
    /// Whether to adjust for splits and dividends
    pub adjusted: Option<bool>,

    /// Whether to include extended trading hours
    pub extended_hours: Option<bool>,

    /// Month filter in YYYY-MM format for historical windows
    pub month: Option<String>,

    /// Output size: "compact" or "full"
    pub output_size: Option<String>,
}

impl TimeSeriesEndpoints {
    /// Create a new time series endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get intraday time series data with default options
    ///
    /// # Arguments
    ///
    /// * `symbol` - The stock symbol (e.g., "AAPL", "MSFT")
    /// * `interval` - Time interval: "1min", "5min", "15min", "30min", "60min"
    #[instrument(skip(self), fields(symbol, interval))]
    pub async fn intraday(&self, symbol: &str, interval: &str) -> Result<TimeSeries<Ohlcv>> {
        self.intraday_with(symbol, interval, IntradayOptions::default()).await
    }

    /// Get intraday time series data with explicit options
    #[instrument(skip(self, options), fields(symbol, interval))]
    pub async fn intraday_with(
        &self,
        symbol: &str,
        interval: &str,
        options: IntradayOptions,
    ) -> Result<TimeSeries<Ohlcv>> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("interval".to_string(), interval.to_string());

        if let Some(adjusted) = options.adjusted {
            params.insert("adjusted".to_string(), adjusted.to_string());
        }
        if let Some(extended_hours) = options.extended_hours {
            params.insert("extended_hours".to_string(), extended_hours.to_string());
        }
        if let Some(month) = options.month {
            params.insert("month".to_string(), month);
        }
        if let Some(output_size) = options.output_size {
            params.insert("outputsize".to_string(), output_size);
        }

        let body = self.transport.get_raw(FuncType::TimeSeriesIntraday.as_str(), params).await?;
        TimeSeries::intraday_from_json(body.as_bytes())
    }

    /// Get daily time series data (latest 100 data points)
    #[instrument(skip(self), fields(symbol))]
    pub async fn daily(&self, symbol: &str) -> Result<TimeSeries<Ohlcv>> {
        self.daily_with_size(symbol, "compact").await
    }

    /// Get full daily time series data (up to 20 years)
    #[instrument(skip(self), fields(symbol))]
    pub async fn daily_full(&self, symbol: &str) -> Result<TimeSeries<Ohlcv>> {
        self.daily_with_size(symbol, "full").await
    }

    /// Get daily time series data with a specific output size
    #[instrument(skip(self), fields(symbol, output_size))]
    pub async fn daily_with_size(
        &self,
        symbol: &str,
        output_size: &str,
    ) -> Result<TimeSeries<Ohlcv>> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("outputsize".to_string(), output_size.to_string());

        let body = self.transport.get_raw(FuncType::TimeSeriesDaily.as_str(), params).await?;
        TimeSeries::daily_from_json(body.as_bytes())
    }

    /// Get daily adjusted time series data (includes dividends)
    ///
    /// # Arguments
    ///
    /// * `symbol` - The stock symbol
    /// * `output_size` - "compact" or "full"
    #[instrument(skip(self), fields(symbol, output_size))]
    pub async fn daily_adjusted(
        &self,
        symbol: &str,
        output_size: &str,
    ) -> Result<TimeSeries<AdjustedOhlcv>> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("outputsize".to_string(), output_size.to_string());

        let body =
            self.transport.get_raw(FuncType::TimeSeriesDailyAdjusted.as_str(), params).await?;
        TimeSeries::daily_adjusted_from_json(body.as_bytes())
    }

    /// Get weekly time series data
    #[instrument(skip(self), fields(symbol))]
    pub async fn weekly(&self, symbol: &str) -> Result<TimeSeries<Ohlcv>> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());

        let body = self.transport.get_raw(FuncType::TimeSeriesWeekly.as_str(), params).await?;
        TimeSeries::weekly_from_json(body.as_bytes())
    }

    /// Get weekly adjusted time series data
    #[instrument(skip(self), fields(symbol))]
    pub async fn weekly_adjusted(&self, symbol: &str) -> Result<TimeSeries<AdjustedOhlcv>> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());

        let body =
            self.transport.get_raw(FuncType::TimeSeriesWeeklyAdjusted.as_str(), params).await?;
        TimeSeries::weekly_adjusted_from_json(body.as_bytes())
    }

    /// Get monthly time series data
    #[instrument(skip(self), fields(symbol))]
    pub async fn monthly(&self, symbol: &str) -> Result<TimeSeries<Ohlcv>> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());

        let body = self.transport.get_raw(FuncType::TimeSeriesMonthly.as_str(), params).await?;
        TimeSeries::monthly_from_json(body.as_bytes())
    }

    /// Get monthly adjusted time series data
    #[instrument(skip(self), fields(symbol))]
    pub async fn monthly_adjusted(&self, symbol: &str) -> Result<TimeSeries<AdjustedOhlcv>> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());

        let body =
            self.transport.get_raw(FuncType::TimeSeriesMonthlyAdjusted.as_str(), params).await?;
        TimeSeries::monthly_adjusted_from_json(body.as_bytes())
    }

    /// Get the latest quote snapshot for a symbol
    #[instrument(skip(self), fields(symbol))]
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), symbol.to_string());

        let body = self.transport.get_raw(FuncType::GlobalQuote.as_str(), params).await?;
        Quote::from_json(body.as_bytes())
    }
}
