//! Configuration management for the vantage client

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use dotenvy::dotenv;

/// Main configuration struct for the vantage client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// AlphaVantage API key
  pub api_key: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for AlphaVantage API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {

    dotenv().ok();

    let api_key = env::var("ALPHA_VANTAGE_API_KEY")
      .map_err(|_| Error::ApiKey("ALPHA_VANTAGE_API_KEY not set".to_string()))?;

    let timeout_secs = env::var("AV_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid AV_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("AV_BASE_URL").unwrap_or_else(|_| crate::ALPHA_VANTAGE_BASE_URL.to_string());

    Ok(Config { api_key, timeout_secs, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      timeout_secs: 30,
      base_url: crate::ALPHA_VANTAGE_BASE_URL.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("test_key".to_string());
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.base_url, crate::ALPHA_VANTAGE_BASE_URL);
  }
}
