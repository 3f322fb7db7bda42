//! Technical indicator endpoints
//!
//! All ~50 indicator functions share one request shape, so there is a
//! single generic fetch path; the [`Indicator`] catalog in `vantage-core`
//! supplies the function name, which doubles as the suffix of the
//! `"Technical Analysis: <name>"` key the decoder looks for.

use crate::transport::Transport;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use vantage_core::{Indicator, Result};
use vantage_models::IndicatorResponse;

/// Technical indicator endpoints
pub struct IndicatorEndpoints {
    transport: Arc<Transport>,
}

/// Query parameters shared by the indicator functions.
///
/// `interval` is required by every indicator; the rest are genuine
/// options — `None` is simply not sent. Which options an indicator
/// accepts (or requires) is upstream's business; the API reports misuse
/// through its error message, which surfaces as `Error::Api`.
#[derive(Debug, Clone, Default)]
pub struct IndicatorParams {
    /// Interval between data points: "1min" ... "60min", "daily",
    /// "weekly", "monthly"
    pub interval: String,

    /// Number of data points in each window (e.g. 10 for a 10-bar SMA)
    pub time_period: Option<u32>,

    /// Price series to compute over: "close", "open", "high", "low"
    pub series_type: Option<String>,

    /// Month filter in YYYY-MM format for intraday intervals
    pub month: Option<String>,

    /// Output size: "compact" or "full"
    pub output_size: Option<String>,
}

impl IndicatorParams {
    /// Create params with the given interval and no options set.
    pub fn new(interval: impl Into<String>) -> Self {
        Self { interval: interval.into(), ..Self::default() }
    }
}

impl IndicatorEndpoints {
    /// Create a new indicator endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Fetch one indicator for a symbol.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// # use vantage_core::Indicator;
    /// # use vantage_client::IndicatorParams;
    /// let mut params = IndicatorParams::new("weekly");
    /// params.time_period = Some(10);
    /// params.series_type = Some("close".to_string());
    ///
    /// let sma = client.indicators().fetch(Indicator::Sma, "IBM", &params).await?;
    /// println!("{} observations", sma.len());
    /// # Ok::<(), vantage_core::Error>(())
    /// ```
    #[instrument(skip(self, params), fields(indicator = %indicator, symbol))]
    pub async fn fetch(
        &self,
        indicator: Indicator,
        symbol: &str,
        params: &IndicatorParams,
    ) -> Result<IndicatorResponse> {
        let mut query = HashMap::new();
        query.insert("symbol".to_string(), symbol.to_string());
        query.insert("interval".to_string(), params.interval.clone());

        if let Some(time_period) = params.time_period {
            query.insert("time_period".to_string(), time_period.to_string());
        }
        if let Some(series_type) = &params.series_type {
            query.insert("series_type".to_string(), series_type.clone());
        }
        if let Some(month) = &params.month {
            query.insert("month".to_string(), month.clone());
        }
        if let Some(output_size) = &params.output_size {
            query.insert("outputsize".to_string(), output_size.clone());
        }

        let body = self.transport.get_raw(indicator.as_str(), query).await?;
        IndicatorResponse::from_json(body.as_bytes(), indicator.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Config;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SMA_BODY: &str = r#"{
        "Meta Data": {
            "1: Symbol": "IBM",
            "2: Indicator": "Simple Moving Average (SMA)",
            "3: Last Refreshed": "2023-09-08 16:00",
            "4: Interval": "60min",
            "5: Time Period": 10,
            "6: Series Type": "close",
            "7: Time Zone": "US/Eastern"
        },
        "Technical Analysis: SMA": {
            "2023-09-08 16:00": {"SMA": "148.0817"}
        }
    }"#;

    #[tokio::test]
    async fn test_fetch_sma() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "SMA"))
            .and(query_param("symbol", "IBM"))
            .and(query_param("interval", "60min"))
            .and(query_param("time_period", "10"))
            .and(query_param("series_type", "close"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SMA_BODY))
            .mount(&server)
            .await;

        let mut config = Config::default_with_key("test_key".to_string());
        config.base_url = server.uri();
        let endpoints = IndicatorEndpoints::new(Arc::new(Transport::new(&config).unwrap()));

        let mut params = IndicatorParams::new("60min");
        params.time_period = Some(10);
        params.series_type = Some("close".to_string());

        let response = endpoints.fetch(Indicator::Sma, "IBM", &params).await.unwrap();
        assert_eq!(response.len(), 1);
        assert_eq!(response.meta_data.symbol, "IBM");
        assert!(response.values[0].values.contains_key("SMA"));
    }
}
