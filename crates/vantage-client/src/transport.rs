//! HTTP transport layer for AlphaVantage API requests

use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;
use vantage_core::{Config, Error, Result};

/// HTTP transport layer for making requests to the AlphaVantage API
///
/// Executes one GET per call and hands the raw body back to the caller;
/// the decoders in `vantage-models` take it from there. The transport
/// recognizes the API's soft errors (error messages and rate-limit notes
/// delivered inside a 200 response) before any decoding happens. It does
/// not retry, cache, or rate-limit.
pub struct Transport {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("vantage-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://mock.alphavantage.co".to_string(),
            api_key: "test_key".to_string(),
        }
    }

    /// Fetch the raw response body for an API function.
    ///
    /// # Arguments
    ///
    /// * `function` - The AlphaVantage API function to call
    /// * `params` - Additional query parameters for the request
    ///
    /// # Returns
    ///
    /// The response body, after HTTP status and API soft-error checks.
    #[instrument(skip(self, params), fields(function = %function))]
    pub async fn get_raw(
        &self,
        function: &str,
        params: HashMap<String, String>,
    ) -> Result<String> {
        let url = self.build_url(function, params)?;
        debug!("Making request to: {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            error!("Request failed with status: {status}");
            return Err(Error::Http(format!("HTTP error: {status}")));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

        debug!("Response body length: {} bytes", text.len());
        self.check_api_error(&text)?;

        Ok(text)
    }

    /// Build the full URL for an API request
    fn build_url(&self, function: &str, params: HashMap<String, String>) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/query", self.base_url))
            .map_err(|e| Error::Http(format!("Invalid base URL: {e}")))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs.append_pair("function", function);
            for (key, value) in &params {
                query_pairs.append_pair(key, value);
            }
            query_pairs.append_pair("apikey", &self.api_key);
        }

        Ok(url)
    }

    /// Check for AlphaVantage API error messages in the response
    ///
    /// The API reports most problems inside a 200 body rather than through
    /// HTTP status codes.
    fn check_api_error(&self, response_text: &str) -> Result<()> {
        if response_text.contains("Error Message") {
            if let Ok(error_response) =
                serde_json::from_str::<HashMap<String, String>>(response_text)
            {
                if let Some(error_msg) = error_response.get("Error Message") {
                    return Err(Error::Api(error_msg.clone()));
                }
            }
        }

        if response_text.contains("API call frequency")
            || response_text.contains("higher API call frequency")
        {
            return Err(Error::RateLimit("API call frequency limit exceeded".to_string()));
        }

        if response_text.contains("Invalid API key") {
            return Err(Error::ApiKey("Invalid API key or unauthorized request".to_string()));
        }

        Ok(())
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").field("base_url", &self.base_url).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let transport = Transport::new_mock();
        let mut params = HashMap::new();
        params.insert("symbol".to_string(), "AAPL".to_string());

        let url = transport.build_url("TIME_SERIES_DAILY", params).unwrap().to_string();

        assert!(url.contains("function=TIME_SERIES_DAILY"));
        assert!(url.contains("symbol=AAPL"));
        assert!(url.contains("apikey=test_key"));
        assert!(url.starts_with("https://mock.alphavantage.co/query"));
    }

    #[test]
    fn test_check_api_error_rate_limit() {
        let transport = Transport::new_mock();
        let response = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute and 500 calls per day."}"#;

        let result = transport.check_api_error(response);
        assert!(matches!(result, Err(Error::RateLimit(_))));
    }

    #[test]
    fn test_check_api_error_message() {
        let transport = Transport::new_mock();
        let response = r#"{"Error Message": "Invalid API call. Please retry or visit the documentation"}"#;

        let result = transport.check_api_error(response);
        assert!(matches!(result, Err(Error::Api(_))));
    }

    #[test]
    fn test_check_api_error_success() {
        let transport = Transport::new_mock();
        let response = r#"{"Time Series (Daily)": {}}"#;

        assert!(transport.check_api_error(response).is_ok());
    }
}
