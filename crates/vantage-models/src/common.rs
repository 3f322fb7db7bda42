/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Shared metadata model and raw-payload helpers used by every decoder.
//!
//! AlphaVantage encodes field names as ordinal-prefixed strings
//! (`"1. Information"`, `"2: Indicator"`, ...) and numbers as quoted
//! strings. The helpers here centralize the conversion from a generic
//! `serde_json::Map` into typed values so the decoders stay small.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};
use vantage_core::{Error, Result};

/// Timestamp format used by intraday series keys (second resolution)
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used by daily/weekly/monthly series and crypto keys
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format used by indicator keys (minute resolution, no seconds)
pub(crate) const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Common metadata accompanying time-series, quote and indicator payloads
///
/// Two key dialects feed this struct: the time-series family uses dot
/// ordinals (`"1. Information"`), the indicator family uses colon ordinals
/// with shifted assignments (`"2: Indicator"` lands in `information`).
/// Fields absent from a payload are left empty/`None`; unknown keys are
/// ignored so upstream additions do not break existing callers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetaData {
  /// Description of the data set
  pub information: String,

  /// Symbol for the security
  pub symbol: String,

  /// Last refreshed timestamp, kept as the upstream string
  pub last_refreshed: String,

  /// Interval (e.g. "5min"), empty for non-intraday series
  pub interval: String,

  /// Output size (Compact or Full)
  pub output_size: String,

  /// Time zone of the timestamps
  pub time_zone: String,

  /// Time period, only present for windowed indicators
  pub time_period: Option<f64>,

  /// Series type (open/high/low/close), only present for indicators
  pub series_type: Option<String>,

  /// Volume factor, only present for volume-weighted indicators
  pub volume_factor: Option<String>,
}

impl MetaData {
  /// Extract metadata from a time-series family `"Meta Data"` object.
  ///
  /// Keys use the dot-ordinal dialect. Unknown keys are ignored; a known
  /// key holding a non-string value fails the parse.
  pub fn from_series_object(object: &Map<String, Value>) -> Result<Self> {
    let mut meta = MetaData::default();

    for (key, value) in object {
      match key.as_str() {
        "1. Information" => meta.information = str_value(key, value)?.to_string(),
        "2. Symbol" => meta.symbol = str_value(key, value)?.to_string(),
        "3. Last Refreshed" => meta.last_refreshed = str_value(key, value)?.to_string(),
        "4. Interval" => meta.interval = str_value(key, value)?.to_string(),
        "5. Output Size" => meta.output_size = str_value(key, value)?.to_string(),
        "6. Time Zone" => meta.time_zone = str_value(key, value)?.to_string(),
        _ => {}
      }
    }

    Ok(meta)
  }

  /// Extract metadata from an indicator family `"Meta Data"` object.
  ///
  /// Keys use the colon-ordinal dialect and the field assignment differs
  /// from the series dialect: `"2: Indicator"` describes the data set and
  /// lands in `information`. The two dialects are kept as separate finite
  /// tables on purpose; their ordinals do not line up.
  pub fn from_indicator_object(object: &Map<String, Value>) -> Result<Self> {
    let mut meta = MetaData::default();

    for (key, value) in object {
      match key.as_str() {
        "1: Symbol" => meta.symbol = str_value(key, value)?.to_string(),
        "2: Indicator" => meta.information = str_value(key, value)?.to_string(),
        "3: Last Refreshed" => meta.last_refreshed = str_value(key, value)?.to_string(),
        "4: Interval" => meta.interval = str_value(key, value)?.to_string(),
        "5: Time Period" => meta.time_period = Some(f64_value(key, value)?),
        "6: Series Type" => meta.series_type = Some(str_value(key, value)?.to_string()),
        "6: Volume Factor (vFactor)" => {
          meta.volume_factor = Some(str_value(key, value)?.to_string())
        }
        "7: Time Zone" => meta.time_zone = str_value(key, value)?.to_string(),
        _ => {}
      }
    }

    Ok(meta)
  }
}

/// Parse the top-level payload into a generic object.
///
/// Invalid JSON and non-object top levels both surface the underlying
/// serde error.
pub(crate) fn root_object(bytes: &[u8]) -> Result<Map<String, Value>> {
  Ok(serde_json::from_slice(bytes)?)
}

/// Fetch a required key and require its value to be an object.
pub(crate) fn object_field<'a>(
  object: &'a Map<String, Value>,
  key: &str,
) -> Result<&'a Map<String, Value>> {
  let value = object.get(key).ok_or_else(|| Error::MissingField(key.to_string()))?;
  value
    .as_object()
    .ok_or_else(|| Error::InvalidResponse(format!("expected map for '{key}'")))
}

/// Find the single key starting with `prefix` and return it with its object.
///
/// Used for the payload families whose series key embeds a variable part
/// (intraday interval, crypto interval). Exactly one match is required:
/// zero matches means the payload is not the expected shape, more than one
/// would make the choice dependent on iteration order.
pub(crate) fn find_prefixed_object<'a>(
  object: &'a Map<String, Value>,
  prefix: &str,
) -> Result<(&'a str, &'a Map<String, Value>)> {
  let mut found = None;

  for (key, value) in object {
    if !key.starts_with(prefix) {
      continue;
    }
    if found.is_some() {
      return Err(Error::InvalidResponse(format!("multiple '{prefix}' keys in payload")));
    }
    let inner = value
      .as_object()
      .ok_or_else(|| Error::InvalidResponse(format!("expected map for '{key}'")))?;
    found = Some((key.as_str(), inner));
  }

  found.ok_or_else(|| Error::MissingField(format!("no '{prefix}' key in payload")))
}

/// Require `value` to be a JSON string.
pub(crate) fn str_value<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
  value
    .as_str()
    .ok_or_else(|| Error::InvalidResponse(format!("expected string for '{key}'")))
}

/// Require `value` to be a JSON number.
pub(crate) fn f64_value(key: &str, value: &Value) -> Result<f64> {
  value
    .as_f64()
    .ok_or_else(|| Error::InvalidResponse(format!("expected number for '{key}'")))
}

/// Fetch a required string field.
pub(crate) fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
  let value = object.get(key).ok_or_else(|| Error::MissingField(key.to_string()))?;
  str_value(key, value)
}

/// Fetch a required numeric field encoded as a quoted string.
pub(crate) fn f64_field(object: &Map<String, Value>, key: &str) -> Result<f64> {
  let text = str_field(object, key)?;
  text
    .parse()
    .map_err(|_| Error::Parse(format!("invalid number for '{key}': {text}")))
}

/// Fetch a required integer field encoded as a quoted string.
pub(crate) fn u64_field(object: &Map<String, Value>, key: &str) -> Result<u64> {
  let text = str_field(object, key)?;
  text
    .parse()
    .map_err(|_| Error::Parse(format!("invalid integer for '{key}': {text}")))
}

/// Parse a second-resolution timestamp ("2023-09-08 15:30:00").
pub(crate) fn parse_date_time(text: &str) -> Result<NaiveDateTime> {
  Ok(NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)?)
}

/// Parse a date-only timestamp ("2023-09-08") as midnight.
pub(crate) fn parse_date(text: &str) -> Result<NaiveDateTime> {
  Ok(NaiveDate::parse_from_str(text, DATE_FORMAT)?.and_time(NaiveTime::MIN))
}

/// Parse a minute-resolution timestamp ("2023-09-08 15:30").
pub(crate) fn parse_minute(text: &str) -> Result<NaiveDateTime> {
  Ok(NaiveDateTime::parse_from_str(text, MINUTE_FORMAT)?)
}
