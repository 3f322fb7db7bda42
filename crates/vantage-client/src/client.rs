/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top-level client facade owning the shared transport

use crate::endpoints::{
  crypto::CryptoEndpoints, forex::ForexEndpoints, indicators::IndicatorEndpoints,
  time_series::TimeSeriesEndpoints,
};

use crate::transport::Transport;
use std::sync::Arc;
use vantage_core::{Config, Result};

/// Main AlphaVantage API client
///
/// Provides access to the API through organized endpoint groups and owns
/// the shared transport. Each endpoint method performs one request and
/// returns a fully decoded record.
///
/// # Examples
///
/// ```ignore
/// use vantage_client::VantageClient;
/// use vantage_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = VantageClient::new(config)?;
///
///     // Get daily price data
///     let series = client.time_series().daily("AAPL").await?;
///     println!("{} bars, latest close {:.2}", series.len(),
///         series.series.last().map(|bar| bar.close).unwrap_or_default());
///
///     // Get the realtime quote
///     let quote = client.time_series().quote("AAPL").await?;
///     println!("{quote}");
///
///     Ok(())
/// }
/// ```
pub struct VantageClient {
  transport: Arc<Transport>,
}

impl VantageClient {
  /// Create a new AlphaVantage API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing API key and other settings
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Get access to time series endpoints
  ///
  /// Returns a `TimeSeriesEndpoints` instance for historical and intraday
  /// stock price data plus the quote snapshot.
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let daily = client.time_series().daily("AAPL").await?;
  /// let intraday = client.time_series().intraday("MSFT", "5min").await?;
  /// # Ok::<(), vantage_core::Error>(())
  /// ```
  pub fn time_series(&self) -> TimeSeriesEndpoints {
    TimeSeriesEndpoints::new(self.transport.clone())
  }

  /// Get access to technical indicator endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # use vantage_core::Indicator;
  /// # use vantage_client::IndicatorParams;
  /// let rsi = client.indicators()
  ///     .fetch(Indicator::Rsi, "AAPL", &IndicatorParams::new("daily"))
  ///     .await?;
  /// # Ok::<(), vantage_core::Error>(())
  /// ```
  pub fn indicators(&self) -> IndicatorEndpoints {
    IndicatorEndpoints::new(self.transport.clone())
  }

  /// Get access to cryptocurrency endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let btc = client.crypto().daily("BTC", "USD").await?;
  /// # Ok::<(), vantage_core::Error>(())
  /// ```
  pub fn crypto(&self) -> CryptoEndpoints {
    CryptoEndpoints::new(self.transport.clone())
  }

  /// Get access to currency exchange endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let rate = client.forex().exchange_rate("USD", "EUR").await?;
  /// # Ok::<(), vantage_core::Error>(())
  /// ```
  pub fn forex(&self) -> ForexEndpoints {
    ForexEndpoints::new(self.transport.clone())
  }
}

impl std::fmt::Debug for VantageClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("VantageClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    let client = VantageClient::new(config).expect("Failed to create client");

    // Endpoint groups share the same transport
    let _ = client.time_series();
    let _ = client.indicators();
    let _ = client.crypto();
    let _ = client.forex();
  }
}
