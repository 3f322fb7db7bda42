//! Technical indicator decoder
//!
//! Indicator payloads differ from the price series in two ways: the value
//! block lives under `"Technical Analysis: <name>"`, and the set of numeric
//! sub-fields per timestamp is only known at runtime (SMA emits one value,
//! BBANDS emits three bands, HT_SINE emits two phases, ...). The decoder
//! therefore folds every sub-field of each entry into an ordered map
//! instead of a fixed struct.

use crate::common::{self, MetaData, DATE_TIME_FORMAT};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fmt;
use vantage_core::{Error, Result};

/// One indicator observation: a timestamp and its named numeric values.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorValue {
    /// Observation timestamp
    pub timestamp: NaiveDateTime,

    /// Sub-field name to value, e.g. `"SMA"` or `"Real Upper Band"`.
    /// Ordered so rendering and equality are deterministic.
    pub values: BTreeMap<String, f64>,
}

/// A decoded indicator response: metadata plus ascending observations.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorResponse {
    /// Metadata block, decoded via the colon-ordinal dialect
    pub meta_data: MetaData,

    /// Observations sorted ascending by timestamp
    pub values: Vec<IndicatorValue>,
}

impl IndicatorResponse {
    /// Decode a raw indicator response body.
    ///
    /// `indicator` is the upstream function name the caller requested; the
    /// value block is required to sit under the literal key
    /// `"Technical Analysis: <indicator>"`. Timestamp keys use minute
    /// resolution. Every sub-field value must be a numeric string.
    pub fn from_json(bytes: &[u8], indicator: &str) -> Result<Self> {
        let root = common::root_object(bytes)?;
        let meta_data =
            MetaData::from_indicator_object(common::object_field(&root, "Meta Data")?)?;

        let key = format!("Technical Analysis: {indicator}");
        let block = common::object_field(&root, &key)?;

        let mut values = Vec::with_capacity(block.len());
        for (stamp, entry) in block {
            let timestamp = common::parse_minute(stamp)?;
            let object = entry
                .as_object()
                .ok_or_else(|| Error::InvalidResponse(format!("expected map for '{stamp}'")))?;

            let mut observation = BTreeMap::new();
            for (name, raw) in object {
                let text = common::str_value(name, raw)?;
                let value: f64 = text
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid number for '{name}': {text}")))?;
                observation.insert(name.clone(), value);
            }

            values.push(IndicatorValue { timestamp, values: observation });
        }

        // Stable: observations sharing a timestamp keep their input order
        values.sort_by_key(|value| value.timestamp);

        Ok(Self { meta_data, values })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the response holds no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for IndicatorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.meta_data.information)?;
        writeln!(f, "Symbol: {}", self.meta_data.symbol)?;
        writeln!(f, "Last Refreshed: {}", self.meta_data.last_refreshed)?;
        writeln!(f, "Interval: {}", self.meta_data.interval)?;
        writeln!(f, "Time Zone: {}", self.meta_data.time_zone)?;
        writeln!(f)?;

        // Headers are discovered from the first observation
        let headers: Vec<&String> =
            self.values.first().map(|value| value.values.keys().collect()).unwrap_or_default();

        write!(f, "{:<24}", "Time")?;
        for header in &headers {
            write!(f, "{header:<15}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(24 + headers.len() * 15))?;

        for value in &self.values {
            let time = value.timestamp.format(DATE_TIME_FORMAT).to_string();
            write!(f, "{time:<24}")?;
            for header in &headers {
                write!(f, "{:>15.2}", value.values.get(*header).copied().unwrap_or_default())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vantage_core::test_utils::assert_approx_eq;

    const SMA: &str = r#"{
        "Meta Data": {
            "1: Symbol": "IBM",
            "2: Indicator": "Simple Moving Average (SMA)",
            "3: Last Refreshed": "2023-09-08 16:00",
            "4: Interval": "60min",
            "5: Time Period": 10,
            "6: Series Type": "close",
            "7: Time Zone": "US/Eastern"
        },
        "Technical Analysis: SMA": {
            "2023-09-08 16:00": {"SMA": "148.0817"},
            "2023-09-08 15:00": {"SMA": "147.9301"}
        }
    }"#;

    const BBANDS: &str = r#"{
        "Meta Data": {
            "1: Symbol": "IBM",
            "2: Indicator": "Bollinger Bands (BBANDS)",
            "3: Last Refreshed": "2023-09-08 16:00",
            "4: Interval": "60min",
            "5: Time Period": 5,
            "6: Series Type": "close",
            "7: Time Zone": "US/Eastern"
        },
        "Technical Analysis: BBANDS": {
            "2023-09-08 16:00": {
                "Real Upper Band": "149.2201",
                "Real Middle Band": "148.0817",
                "Real Lower Band": "146.9433"
            }
        }
    }"#;

    #[test]
    fn test_single_subfield_indicator() {
        let response = IndicatorResponse::from_json(SMA.as_bytes(), "SMA").unwrap();

        assert_eq!(response.meta_data.symbol, "IBM");
        assert_eq!(response.meta_data.information, "Simple Moving Average (SMA)");
        assert_eq!(response.meta_data.time_period, Some(10.0));
        assert_eq!(response.len(), 2);

        for value in &response.values {
            assert_eq!(value.values.len(), 1);
            assert!(value.values.contains_key("SMA"));
        }
        assert_approx_eq(response.values[1].values["SMA"], 148.0817, 1e-10);
    }

    #[test]
    fn test_multi_subfield_indicator() {
        let response = IndicatorResponse::from_json(BBANDS.as_bytes(), "BBANDS").unwrap();

        assert_eq!(response.len(), 1);
        let value = &response.values[0];
        assert_eq!(value.values.len(), 3);
        assert_approx_eq(value.values["Real Upper Band"], 149.2201, 1e-10);
        assert_approx_eq(value.values["Real Middle Band"], 148.0817, 1e-10);
        assert_approx_eq(value.values["Real Lower Band"], 146.9433, 1e-10);
    }

    #[test]
    fn test_observations_sorted_ascending() {
        let response = IndicatorResponse::from_json(SMA.as_bytes(), "SMA").unwrap();
        let expected =
            NaiveDate::from_ymd_opt(2023, 9, 8).unwrap().and_hms_opt(15, 0, 0).unwrap();
        assert_eq!(response.values[0].timestamp, expected);
        assert!(response.values[0].timestamp < response.values[1].timestamp);
    }

    #[test]
    fn test_requested_indicator_key_missing() {
        // The payload carries SMA values, but the caller asked for EMA
        let err = IndicatorResponse::from_json(SMA.as_bytes(), "EMA").unwrap_err();
        assert!(matches!(err, Error::MissingField(field) if field == "Technical Analysis: EMA"));
    }

    #[test]
    fn test_non_numeric_subfield_fails() {
        let payload = r#"{
            "Meta Data": {"1: Symbol": "IBM"},
            "Technical Analysis: SMA": {
                "2023-09-08 16:00": {"SMA": "n/a"}
            }
        }"#;

        let err = IndicatorResponse::from_json(payload.as_bytes(), "SMA").unwrap_err();
        assert!(matches!(err, Error::Parse(message) if message.contains("SMA")));
    }

    #[test]
    fn test_malformed_payload_fails() {
        assert!(IndicatorResponse::from_json(b"[1, 2, 3]", "SMA").is_err());
        assert!(IndicatorResponse::from_json(b"not json", "SMA").is_err());
    }

    #[test]
    fn test_display_discovers_headers() {
        let response = IndicatorResponse::from_json(BBANDS.as_bytes(), "BBANDS").unwrap();
        let rendered = response.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        let header = lines[6];
        assert!(header.starts_with("Time"));
        // BTreeMap order: Lower, Middle, Upper
        assert_eq!(&header[24..39], "Real Lower Band");
        assert!(header.ends_with("Real Upper Band"));
        assert_eq!(lines[7], "=".repeat(24 + 3 * 15));
        assert!(lines[8].starts_with("2023-09-08 16:00:00"));
    }
}
