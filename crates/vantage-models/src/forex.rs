//! Realtime currency exchange rate model
//!
//! This endpoint is the one stable, fixed-shape payload in the API, so it
//! is decoded with plain serde derives. All nine fields are kept as the
//! literal upstream strings; callers format them for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use vantage_core::Result;

/// Real-time exchange rate response for a currency pair
///
/// Serves both physical pairs (USD/EUR) and digital pairs (BTC/USD); the
/// upstream `CURRENCY_EXCHANGE_RATE` function handles both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Realtime currency exchange rate data
    #[serde(rename = "Realtime Currency Exchange Rate")]
    pub exchange_rate_info: ExchangeRateInfo,
}

/// Exchange rate data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateInfo {
    /// From currency code
    #[serde(rename = "1. From_Currency Code")]
    pub from_currency_code: String,

    /// From currency name
    #[serde(rename = "2. From_Currency Name")]
    pub from_currency_name: String,

    /// To currency code
    #[serde(rename = "3. To_Currency Code")]
    pub to_currency_code: String,

    /// To currency name
    #[serde(rename = "4. To_Currency Name")]
    pub to_currency_name: String,

    /// Exchange rate
    #[serde(rename = "5. Exchange Rate")]
    pub exchange_rate: String,

    /// Last refreshed timestamp
    #[serde(rename = "6. Last Refreshed")]
    pub last_refreshed: String,

    /// Timezone
    #[serde(rename = "7. Time Zone")]
    pub time_zone: String,

    /// Bid price
    #[serde(rename = "8. Bid Price")]
    pub bid_price: String,

    /// Ask price
    #[serde(rename = "9. Ask Price")]
    pub ask_price: String,
}

impl ExchangeRate {
    /// Decode a raw `CURRENCY_EXCHANGE_RATE` response body.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &self.exchange_rate_info;
        write!(
            f,
            "From: {} ({})\nTo: {} ({})\nExchange Rate: {}\nLast Refreshed: {}\nTime Zone: {}\nBid Price: {}\nAsk Price: {}",
            info.from_currency_name,
            info.from_currency_code,
            info.to_currency_name,
            info.to_currency_code,
            info.exchange_rate,
            info.last_refreshed,
            info.time_zone,
            info.bid_price,
            info.ask_price,
        )
    }
}
