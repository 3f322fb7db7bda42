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

//! Cryptocurrency series decoder.
//!
//! Crypto payloads carry their own metadata dialect (seven dot-ordinal
//! fields) and a series key whose literal text varies with the interval
//! (`"Time Series (Digital Currency Daily)"`, ...). The matched key is kept
//! on the response as `interval_label`. Every numeric sub-field is required
//! and must parse; a malformed bar fails the whole decode.

use crate::common::{self, DATE_TIME_FORMAT};
use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use std::fmt;
use vantage_core::{Error, Result};

/// Metadata accompanying cryptocurrency series payloads
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CryptoMetaData {
  /// Description of the data set
  pub information: String,

  /// Digital currency code (e.g. "BTC")
  pub digital_currency_code: String,

  /// Digital currency name (e.g. "Bitcoin")
  pub digital_currency_name: String,

  /// Market code (e.g. "USD")
  pub market_code: String,

  /// Market name (e.g. "United States Dollar")
  pub market_name: String,

  /// Last refreshed timestamp, kept as the upstream string
  pub last_refreshed: String,

  /// Time zone of the timestamps
  pub time_zone: String,
}

impl CryptoMetaData {
  /// Extract metadata from a crypto `"Meta Data"` object.
  ///
  /// Unknown keys are ignored; a known key holding a non-string value
  /// fails the parse.
  pub fn from_object(object: &Map<String, Value>) -> Result<Self> {
    let mut meta = CryptoMetaData::default();

    for (key, value) in object {
      match key.as_str() {
        "1. Information" => meta.information = common::str_value(key, value)?.to_string(),
        "2. Digital Currency Code" => {
          meta.digital_currency_code = common::str_value(key, value)?.to_string()
        }
        "3. Digital Currency Name" => {
          meta.digital_currency_name = common::str_value(key, value)?.to_string()
        }
        "4. Market Code" => meta.market_code = common::str_value(key, value)?.to_string(),
        "5. Market Name" => meta.market_name = common::str_value(key, value)?.to_string(),
        "6. Last Refreshed" => meta.last_refreshed = common::str_value(key, value)?.to_string(),
        "7. Time Zone" => meta.time_zone = common::str_value(key, value)?.to_string(),
        _ => {}
      }
    }

    Ok(meta)
  }
}

/// One cryptocurrency bar. All fields are floats, volume included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CryptoBar {
  /// Bar timestamp (midnight, crypto series keys are date resolution)
  pub timestamp: NaiveDateTime,

  /// Opening price in the market currency
  pub open: f64,

  /// Highest price in the market currency
  pub high: f64,

  /// Lowest price in the market currency
  pub low: f64,

  /// Closing price in the market currency
  pub close: f64,

  /// Trading volume
  pub volume: f64,

  /// Market capitalization in the market currency
  pub market_cap: f64,
}

impl CryptoBar {
  fn from_object(timestamp: NaiveDateTime, values: &Map<String, Value>) -> Result<Self> {
    Ok(Self {
      timestamp,
      open: common::f64_field(values, "1a. open (USD)")?,
      high: common::f64_field(values, "2a. high (USD)")?,
      low: common::f64_field(values, "3a. low (USD)")?,
      close: common::f64_field(values, "4a. close (USD)")?,
      volume: common::f64_field(values, "5. volume")?,
      market_cap: common::f64_field(values, "6. market cap (USD)")?,
    })
  }
}

/// A decoded cryptocurrency series.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoSeries {
  /// Metadata block accompanying the series
  pub meta_data: CryptoMetaData,

  /// The literal top-level key the series arrived under, e.g.
  /// `"Time Series (Digital Currency Daily)"`
  pub interval_label: String,

  /// Bars sorted ascending by timestamp
  pub series: Vec<CryptoBar>,
}

impl CryptoSeries {
  /// Decode a raw cryptocurrency series response body.
  ///
  /// The series object is located by scanning the top level for the single
  /// `"Time Series"`-prefixed key; the matched key is recorded as
  /// `interval_label`. A missing or non-numeric required sub-field fails
  /// the whole decode.
  pub fn from_json(bytes: &[u8]) -> Result<Self> {
    let root = common::root_object(bytes)?;
    let meta_data = CryptoMetaData::from_object(common::object_field(&root, "Meta Data")?)?;

    let (label, values) = common::find_prefixed_object(&root, "Time Series")?;

    let mut series = Vec::with_capacity(values.len());
    for (stamp, value) in values {
      let timestamp = common::parse_date(stamp)?;
      let object = value
        .as_object()
        .ok_or_else(|| Error::InvalidResponse(format!("expected map for '{stamp}'")))?;
      series.push(CryptoBar::from_object(timestamp, object)?);
    }

    // Stable: bars sharing a timestamp keep their input order
    series.sort_by_key(|bar| bar.timestamp);

    Ok(Self { meta_data, interval_label: label.to_string(), series })
  }

  /// Number of bars in the series.
  pub fn len(&self) -> usize {
    self.series.len()
  }

  /// Whether the series holds no bars.
  pub fn is_empty(&self) -> bool {
    self.series.is_empty()
  }
}

impl fmt::Display for CryptoSeries {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", self.meta_data.information)?;
    writeln!(
      f,
      "Digital Currency: {} ({})",
      self.meta_data.digital_currency_name, self.meta_data.digital_currency_code
    )?;
    writeln!(f, "Market: {} ({})", self.meta_data.market_name, self.meta_data.market_code)?;
    writeln!(f, "Last Refreshed: {}", self.meta_data.last_refreshed)?;
    writeln!(f, "Time Zone: {}", self.meta_data.time_zone)?;
    writeln!(f)?;

    let headers = ["Time", "Open", "High", "Low", "Close", "Volume", "MarketCap"];
    for header in headers {
      if header == "Time" {
        write!(f, "{header:<25}")?;
      } else {
        write!(f, "{header:<20}")?;
      }
    }
    writeln!(f)?;
    writeln!(f, "{}", "=".repeat(25 + 20 * (headers.len() - 1)))?;

    for bar in &self.series {
      let time = bar.timestamp.format(DATE_TIME_FORMAT).to_string();
      writeln!(
        f,
        "{time:<25}{:<20.2}{:<20.2}{:<20.2}{:<20.2}{:<20.2}{:<20.2}",
        bar.open, bar.high, bar.low, bar.close, bar.volume, bar.market_cap
      )?;
    }

    Ok(())
  }
}
