//! Endpoint groups for the AlphaVantage API surface
//!
//! Each group owns a shared [`Transport`](crate::transport::Transport)
//! handle, builds the query parameters for its functions, and hands the
//! raw body to the matching `vantage-models` decoder. The decoders never
//! see the network; the endpoints never parse payloads.

pub mod crypto;
pub mod forex;
pub mod indicators;
pub mod time_series;
