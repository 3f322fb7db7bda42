//! Daily Report Example
//!
//! This example demonstrates how to use vantage-client to:
//! - Load configuration from the environment
//! - Fetch a daily price series and the realtime quote for a symbol
//! - Fetch a technical indicator
//! - Print the canonical fixed-width renderings

use vantage_client::{IndicatorParams, VantageClient};
use vantage_core::{Config, Indicator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  // Load configuration from environment
  let config = Config::from_env().map_err(|e| {
    eprintln!("Failed to load configuration. Make sure ALPHA_VANTAGE_API_KEY is set.");
    eprintln!("Error: {}", e);
    e
  })?;

  let client = VantageClient::new(config)?;
  let symbol = std::env::args().nth(1).unwrap_or_else(|| "MSFT".to_string());

  // Daily price history (latest 100 bars)
  let series = client.time_series().daily(&symbol).await?;
  println!("{series}");

  // Realtime quote snapshot
  let quote = client.time_series().quote(&symbol).await?;
  println!("{quote}");

  // 10-bar simple moving average over daily closes
  let mut params = IndicatorParams::new("daily");
  params.time_period = Some(10);
  params.series_type = Some("close".to_string());

  let sma = client.indicators().fetch(Indicator::Sma, &symbol, &params).await?;
  println!("{sma}");

  Ok(())
}
