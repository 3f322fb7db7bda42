//! # vantage-models
//!
//! Typed records and response decoders for AlphaVantage API payloads.
//!
//! The API returns heterogeneous, loosely-typed JSON: metadata objects
//! keyed by ordinal-prefixed strings, date-keyed time-series maps, and
//! numbers encoded as quoted strings. This crate turns those payloads into
//! canonical, strongly-typed records with parsed timestamps and
//! chronologically ascending series.
//!
//! Every decoder is a pure function from a byte buffer to a record or an
//! error: no I/O, no shared state, no partial success. The transport layer
//! in `vantage-client` supplies the bytes and selects the record type.
//!
//! ## Usage
//!
//! ```ignore
//! use vantage_models::{Ohlcv, TimeSeries};
//!
//! let series = TimeSeries::<Ohlcv>::daily_from_json(&body)?;
//! println!("{} bars for {}", series.len(), series.meta_data.symbol);
//! println!("{series}");
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod crypto;
pub mod forex;
pub mod indicators;
pub mod time_series;

// Re-export the model types for convenience
pub use common::MetaData;
pub use crypto::{CryptoBar, CryptoMetaData, CryptoSeries};
pub use forex::{ExchangeRate, ExchangeRateInfo};
pub use indicators::{IndicatorResponse, IndicatorValue};
pub use time_series::{AdjustedOhlcv, Ohlcv, Quote, SeriesEntry, SeriesKind, TimeSeries};
