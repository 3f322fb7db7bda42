//! # vantage-client
//!
//! An async AlphaVantage API client built on the `vantage-models` decoders.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio
//! - **Type Safe**: Strongly typed, time-ordered responses via vantage-models
//! - **Configurable**: Environment-based configuration via vantage-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vantage_client::VantageClient;
//! use vantage_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = VantageClient::new(config)?;
//!
//!     // Get daily time series for a symbol
//!     let series = client.time_series().daily("AAPL").await?;
//!     println!("{} bars for {}", series.len(), series.meta_data.symbol);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, vantage_core::Error>`. The transport
//! surfaces the API's soft errors (error messages and rate-limit notes
//! delivered inside a 200 body) before decoding; the decoders fail hard on
//! any malformed payload — there is no partial success.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::VantageClient;
pub use vantage_core::{Config, Error, FuncType, Indicator, Result};

// Re-export endpoint types for direct access if needed
pub use endpoints::{
    crypto::CryptoEndpoints,
    forex::ForexEndpoints,
    indicators::{IndicatorEndpoints, IndicatorParams},
    time_series::{IntradayOptions, TimeSeriesEndpoints},
};
