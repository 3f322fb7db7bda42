//! Time series decoders for stock price data
//!
//! One decode path serves the seven series kinds. Every kind shares the
//! same top-level shape — a `"Meta Data"` object next to a date-keyed map
//! of bars — but differs in the key the bar map lives under and in the
//! timestamp resolution of its keys. `SeriesKind` captures those two
//! rules; `TimeSeries::from_json` does the rest.

use crate::common::{self, MetaData, DATE_FORMAT, DATE_TIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use std::fmt;
use vantage_core::{Error, Result};

/// The supported time-series kinds.
///
/// The kind is chosen by the caller before decoding; the decoder never
/// sniffs it from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Intraday,
    Daily,
    DailyAdjusted,
    Weekly,
    WeeklyAdjusted,
    Monthly,
    MonthlyAdjusted,
}

impl SeriesKind {
    /// The fixed top-level key holding the bar map, if the kind has one.
    ///
    /// Intraday returns `None`: its key embeds the interval (for example
    /// `"Time Series (5min)"`) and is located by prefix scan instead.
    pub fn payload_key(&self) -> Option<&'static str> {
        match self {
            SeriesKind::Intraday => None,
            SeriesKind::Daily => Some("Time Series (Daily)"),
            SeriesKind::DailyAdjusted => Some("Time Series (Daily Adjusted)"),
            SeriesKind::Weekly => Some("Weekly Time Series"),
            SeriesKind::WeeklyAdjusted => Some("Weekly Adjusted Time Series"),
            SeriesKind::Monthly => Some("Monthly Time Series"),
            SeriesKind::MonthlyAdjusted => Some("Monthly Adjusted Time Series"),
        }
    }

    /// Whether this kind's timestamps carry a time-of-day component.
    pub fn has_time(&self) -> bool {
        matches!(self, SeriesKind::Intraday)
    }

    /// Parse a bar-map key into a timestamp using the kind's format.
    pub fn parse_timestamp(&self, text: &str) -> Result<NaiveDateTime> {
        if self.has_time() {
            common::parse_date_time(text)
        } else {
            common::parse_date(text)
        }
    }
}

/// One bar decoded from a date-keyed entry.
///
/// Implementations read their numeric fields out of the quoted-string
/// values of the entry object; every required field must be present and
/// parseable or the whole decode fails.
pub trait SeriesEntry: Sized {
    /// Decode one bar from the object found under a timestamp key.
    fn from_object(timestamp: NaiveDateTime, values: &Map<String, Value>) -> Result<Self>;

    /// The bar timestamp used for chronological ordering.
    fn timestamp(&self) -> NaiveDateTime;

    /// Column headers for the tabular rendering, excluding the time column.
    fn headers() -> &'static [&'static str];

    /// Write one table row, excluding the time column.
    fn write_row(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Open, high, low, close and volume for one timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ohlcv {
    /// Bar timestamp (midnight for date-resolution kinds)
    pub timestamp: NaiveDateTime,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Trading volume
    pub volume: u64,
}

impl SeriesEntry for Ohlcv {
    fn from_object(timestamp: NaiveDateTime, values: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            timestamp,
            open: common::f64_field(values, "1. open")?,
            high: common::f64_field(values, "2. high")?,
            low: common::f64_field(values, "3. low")?,
            close: common::f64_field(values, "4. close")?,
            volume: common::u64_field(values, "5. volume")?,
        })
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    fn headers() -> &'static [&'static str] {
        &["Open", "High", "Low", "Close", "Volume"]
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15.2}{:<15.2}{:<15.2}{:<15.2}{:<15}",
            self.open, self.high, self.low, self.close, self.volume
        )
    }
}

/// `Ohlcv` extended with the adjusted close and dividend amount.
///
/// Used by the three adjusted kinds. The adjusted payload shifts volume to
/// ordinal 6; the daily-adjusted split coefficient at ordinal 8 is not
/// modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedOhlcv {
    /// Bar timestamp (midnight, adjusted kinds are date resolution)
    pub timestamp: NaiveDateTime,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Split/dividend adjusted closing price
    pub adjusted_close: f64,

    /// Trading volume
    pub volume: u64,

    /// Dividend amount paid out on this bar
    pub dividend: f64,
}

impl SeriesEntry for AdjustedOhlcv {
    fn from_object(timestamp: NaiveDateTime, values: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            timestamp,
            open: common::f64_field(values, "1. open")?,
            high: common::f64_field(values, "2. high")?,
            low: common::f64_field(values, "3. low")?,
            close: common::f64_field(values, "4. close")?,
            adjusted_close: common::f64_field(values, "5. adjusted close")?,
            volume: common::u64_field(values, "6. volume")?,
            dividend: common::f64_field(values, "7. dividend amount")?,
        })
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    fn headers() -> &'static [&'static str] {
        &["Open", "High", "Low", "Close", "Adjusted Close", "Volume", "Dividend"]
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15.2}{:<15.2}{:<15.2}{:<15.2}{:<15.2}{:<15}{:<15.2}",
            self.open, self.high, self.low, self.close, self.adjusted_close, self.volume,
            self.dividend
        )
    }
}

/// A decoded time series: metadata plus chronologically ascending bars.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<T> {
    /// The kind this series was decoded as
    pub kind: SeriesKind,

    /// Metadata block accompanying the series
    pub meta_data: MetaData,

    /// Bars sorted ascending by timestamp
    pub series: Vec<T>,
}

impl<T: SeriesEntry> TimeSeries<T> {
    /// Decode a raw response body as the given series kind.
    ///
    /// Fails if the payload is not a JSON object, if `"Meta Data"` or the
    /// kind's bar map is missing, or if any timestamp key or numeric field
    /// does not parse. There is no partial success: the result is a fully
    /// populated, fully sorted series or an error.
    pub fn from_json(kind: SeriesKind, bytes: &[u8]) -> Result<Self> {
        let root = common::root_object(bytes)?;
        let meta_data = MetaData::from_series_object(common::object_field(&root, "Meta Data")?)?;

        let values = match kind.payload_key() {
            Some(key) => common::object_field(&root, key)?,
            None => common::find_prefixed_object(&root, "Time Series")?.1,
        };

        let mut series = Vec::with_capacity(values.len());
        for (stamp, value) in values {
            let timestamp = kind.parse_timestamp(stamp)?;
            let object = value
                .as_object()
                .ok_or_else(|| Error::InvalidResponse(format!("expected map for '{stamp}'")))?;
            series.push(T::from_object(timestamp, object)?);
        }

        // Stable: bars sharing a timestamp keep their input order
        series.sort_by_key(|entry| entry.timestamp());

        Ok(Self { kind, meta_data, series })
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

impl TimeSeries<Ohlcv> {
    /// Decode a `TIME_SERIES_INTRADAY` response.
    pub fn intraday_from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json(SeriesKind::Intraday, bytes)
    }

    /// Decode a `TIME_SERIES_DAILY` response.
    pub fn daily_from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json(SeriesKind::Daily, bytes)
    }

    /// Decode a `TIME_SERIES_WEEKLY` response.
    pub fn weekly_from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json(SeriesKind::Weekly, bytes)
    }

    /// Decode a `TIME_SERIES_MONTHLY` response.
    pub fn monthly_from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json(SeriesKind::Monthly, bytes)
    }
}

impl TimeSeries<AdjustedOhlcv> {
    /// Decode a `TIME_SERIES_DAILY_ADJUSTED` response.
    pub fn daily_adjusted_from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json(SeriesKind::DailyAdjusted, bytes)
    }

    /// Decode a `TIME_SERIES_WEEKLY_ADJUSTED` response.
    pub fn weekly_adjusted_from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json(SeriesKind::WeeklyAdjusted, bytes)
    }

    /// Decode a `TIME_SERIES_MONTHLY_ADJUSTED` response.
    pub fn monthly_adjusted_from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json(SeriesKind::MonthlyAdjusted, bytes)
    }
}

impl<T: SeriesEntry> fmt::Display for TimeSeries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.meta_data.information)?;
        writeln!(f, "Symbol: {}", self.meta_data.symbol)?;
        writeln!(f, "Last Refreshed: {}", self.meta_data.last_refreshed)?;
        if self.kind.has_time() {
            writeln!(f, "Interval: {}", self.meta_data.interval)?;
        }
        writeln!(f, "Output Size: {}", self.meta_data.output_size)?;
        writeln!(f, "Time Zone: {}", self.meta_data.time_zone)?;
        writeln!(f)?;

        write!(f, "{:<25}", "Time")?;
        for header in T::headers() {
            write!(f, "{header:<15}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(25 + T::headers().len() * 15))?;

        let format = if self.kind.has_time() { DATE_TIME_FORMAT } else { DATE_FORMAT };
        for entry in &self.series {
            let time = entry.timestamp().format(format).to_string();
            write!(f, "{time:<25}")?;
            entry.write_row(f)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Single-row snapshot from the `GLOBAL_QUOTE` endpoint.
///
/// Eight of the ten fields are parsed; `symbol` and `change_percent` are
/// kept as the literal upstream text (the percent keeps its `%` suffix).
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Symbol for the security
    pub symbol: String,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Current price
    pub price: f64,

    /// Trading volume
    pub volume: u64,

    /// Latest trading day
    pub latest_trading_day: NaiveDate,

    /// Previous close
    pub previous_close: f64,

    /// Absolute price change
    pub change: f64,

    /// Percentage change, literal text including the trailing '%'
    pub change_percent: String,
}

impl Quote {
    /// Decode a raw `GLOBAL_QUOTE` response body.
    ///
    /// Any field that cannot be parsed fails the decode with an error
    /// naming that field.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let root = common::root_object(bytes)?;
        let quote = common::object_field(&root, "Global Quote")?;

        Ok(Self {
            symbol: common::str_field(quote, "01. symbol")?.to_string(),
            open: common::f64_field(quote, "02. open")?,
            high: common::f64_field(quote, "03. high")?,
            low: common::f64_field(quote, "04. low")?,
            price: common::f64_field(quote, "05. price")?,
            volume: common::u64_field(quote, "06. volume")?,
            latest_trading_day: date_field(quote, "07. latest trading day")?,
            previous_close: common::f64_field(quote, "08. previous close")?,
            change: common::f64_field(quote, "09. change")?,
            change_percent: common::str_field(quote, "10. change percent")?.to_string(),
        })
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol: {}", self.symbol)?;
        writeln!(f, "Open: {:.2}", self.open)?;
        writeln!(f, "High: {:.2}", self.high)?;
        writeln!(f, "Low: {:.2}", self.low)?;
        writeln!(f, "Price: {:.2}", self.price)?;
        writeln!(f, "Volume: {}", self.volume)?;
        writeln!(f, "Latest Trading Day: {}", self.latest_trading_day.format(DATE_FORMAT))?;
        writeln!(f, "Previous Close: {:.2}", self.previous_close)?;
        writeln!(f, "Change: {:.2}", self.change)?;
        writeln!(f, "Change Percent: {}", self.change_percent)
    }
}

fn date_field(object: &Map<String, Value>, key: &str) -> Result<NaiveDate> {
    let text = common::str_field(object, key)?;
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| Error::Parse(format!("invalid date for '{key}': {text}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::test_utils::assert_approx_eq;

    const DAILY: &str = r#"{
        "Meta Data": {
            "1. Information": "Daily Prices",
            "2. Symbol": "MSFT",
            "3. Last Refreshed": "2023-09-08",
            "4. Interval": "Daily",
            "5. Output Size": "Compact",
            "6. Time Zone": "US/Eastern"
        },
        "Time Series (Daily)": {
            "2023-09-08": {
                "1. open": "330.00",
                "2. high": "335.00",
                "3. low": "329.00",
                "4. close": "334.00",
                "5. volume": "1000000"
            }
        }
    }"#;

    #[test]
    fn test_daily_single_entry() {
        let series = TimeSeries::<Ohlcv>::daily_from_json(DAILY.as_bytes()).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.meta_data.symbol, "MSFT");
        assert_eq!(series.meta_data.output_size, "Compact");

        let bar = &series.series[0];
        let expected = NaiveDate::from_ymd_opt(2023, 9, 8).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(bar.timestamp, expected);
        assert_approx_eq(bar.open, 330.00, 1e-10);
        assert_approx_eq(bar.close, 334.00, 1e-10);
        assert_eq!(bar.volume, 1_000_000);
    }

    #[test]
    fn test_entries_sorted_ascending() {
        let payload = r#"{
            "Meta Data": {"1. Information": "Daily Prices", "2. Symbol": "MSFT"},
            "Time Series (Daily)": {
                "2023-09-08": {"1. open": "2", "2. high": "2", "3. low": "2", "4. close": "2", "5. volume": "2"},
                "2023-09-07": {"1. open": "1", "2. high": "1", "3. low": "1", "4. close": "1", "5. volume": "1"}
            }
        }"#;

        let series = TimeSeries::<Ohlcv>::daily_from_json(payload.as_bytes()).unwrap();
        assert_eq!(series.len(), 2);
        assert!(series.series[0].timestamp < series.series[1].timestamp);
        assert_eq!(series.series[0].volume, 1);
        assert_eq!(series.series[1].volume, 2);
    }

    #[test]
    fn test_intraday_prefix_key_and_seconds() {
        let payload = r#"{
            "Meta Data": {
                "1. Information": "Intraday (5min) prices",
                "2. Symbol": "IBM",
                "3. Last Refreshed": "2023-09-08 19:55:00",
                "4. Interval": "5min",
                "5. Output Size": "Compact",
                "6. Time Zone": "US/Eastern"
            },
            "Time Series (5min)": {
                "2023-09-08 19:55:00": {
                    "1. open": "147.96",
                    "2. high": "148.00",
                    "3. low": "147.95",
                    "4. close": "148.00",
                    "5. volume": "2427"
                }
            }
        }"#;

        let series = TimeSeries::<Ohlcv>::intraday_from_json(payload.as_bytes()).unwrap();
        assert_eq!(series.kind, SeriesKind::Intraday);
        assert_eq!(series.meta_data.interval, "5min");

        let expected =
            NaiveDate::from_ymd_opt(2023, 9, 8).unwrap().and_hms_opt(19, 55, 0).unwrap();
        assert_eq!(series.series[0].timestamp, expected);
    }

    #[test]
    fn test_adjusted_fields() {
        let payload = r#"{
            "Meta Data": {"1. Information": "Weekly Adjusted Prices", "2. Symbol": "MSFT"},
            "Weekly Adjusted Time Series": {
                "2023-09-08": {
                    "1. open": "330.00",
                    "2. high": "335.00",
                    "3. low": "329.00",
                    "4. close": "334.00",
                    "5. adjusted close": "333.50",
                    "6. volume": "1000000",
                    "7. dividend amount": "0.68"
                }
            }
        }"#;

        let series =
            TimeSeries::<AdjustedOhlcv>::weekly_adjusted_from_json(payload.as_bytes()).unwrap();
        let bar = &series.series[0];
        assert_approx_eq(bar.adjusted_close, 333.50, 1e-10);
        assert_approx_eq(bar.dividend, 0.68, 1e-10);
        assert_eq!(bar.volume, 1_000_000);
    }

    #[test]
    fn test_missing_meta_data_fails() {
        let payload = r#"{"Time Series (Daily)": {}}"#;
        let err = TimeSeries::<Ohlcv>::daily_from_json(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingField(field) if field == "Meta Data"));
    }

    #[test]
    fn test_missing_series_key_fails() {
        let payload = r#"{"Meta Data": {"2. Symbol": "MSFT"}}"#;
        let err = TimeSeries::<Ohlcv>::weekly_from_json(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingField(field) if field == "Weekly Time Series"));

        let err = TimeSeries::<Ohlcv>::intraday_from_json(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingField(_)));
    }

    #[test]
    fn test_non_numeric_field_fails() {
        let payload = r#"{
            "Meta Data": {"2. Symbol": "MSFT"},
            "Time Series (Daily)": {
                "2023-09-08": {"1. open": "N/A", "2. high": "1", "3. low": "1", "4. close": "1", "5. volume": "1"}
            }
        }"#;

        let err = TimeSeries::<Ohlcv>::daily_from_json(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(message) if message.contains("1. open")));
    }

    #[test]
    fn test_malformed_timestamp_fails() {
        let payload = r#"{
            "Meta Data": {"2. Symbol": "MSFT"},
            "Time Series (Daily)": {
                "Friday": {"1. open": "1", "2. high": "1", "3. low": "1", "4. close": "1", "5. volume": "1"}
            }
        }"#;

        assert!(TimeSeries::<Ohlcv>::daily_from_json(payload.as_bytes()).is_err());
    }

    #[test]
    fn test_decode_is_deterministic() {
        let first = TimeSeries::<Ohlcv>::daily_from_json(DAILY.as_bytes()).unwrap();
        let second = TimeSeries::<Ohlcv>::daily_from_json(DAILY.as_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_layout() {
        let series = TimeSeries::<Ohlcv>::daily_from_json(DAILY.as_bytes()).unwrap();
        let rendered = series.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Daily Prices");
        assert_eq!(lines[1], "Symbol: MSFT");
        // Daily output has no Interval line
        assert_eq!(lines[3], "Output Size: Compact");

        let header = lines[6];
        assert!(header.starts_with("Time"));
        assert_eq!(&header[25..29], "Open");
        assert_eq!(lines[7], "=".repeat(25 + 5 * 15));

        let row = lines[8];
        assert!(row.starts_with("2023-09-08"));
        assert_eq!(&row[25..31], "330.00");
        assert!(row.contains("1000000"));
    }

    #[test]
    fn test_quote_decode() {
        let payload = r#"{
            "Global Quote": {
                "01. symbol": "MSFT",
                "02. open": "330.00",
                "03. high": "335.00",
                "04. low": "329.00",
                "05. price": "334.00",
                "06. volume": "1000000",
                "07. latest trading day": "2023-09-08",
                "08. previous close": "331.00",
                "09. change": "3.00",
                "10. change percent": "0.9063%"
            }
        }"#;

        let quote = Quote::from_json(payload.as_bytes()).unwrap();
        assert_eq!(quote.symbol, "MSFT");
        assert_approx_eq(quote.price, 334.00, 1e-10);
        assert_eq!(quote.volume, 1_000_000);
        assert_eq!(quote.latest_trading_day, NaiveDate::from_ymd_opt(2023, 9, 8).unwrap());
        assert_eq!(quote.change_percent, "0.9063%");
    }

    #[test]
    fn test_quote_error_names_field() {
        let payload = r#"{
            "Global Quote": {
                "01. symbol": "MSFT",
                "02. open": "bad",
                "03. high": "335.00",
                "04. low": "329.00",
                "05. price": "334.00",
                "06. volume": "1000000",
                "07. latest trading day": "2023-09-08",
                "08. previous close": "331.00",
                "09. change": "3.00",
                "10. change percent": "0.9063%"
            }
        }"#;

        let err = Quote::from_json(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(message) if message.contains("02. open")));
    }

    #[test]
    fn test_quote_missing_block_fails() {
        let err = Quote::from_json(b"{}").unwrap_err();
        assert!(matches!(err, Error::MissingField(field) if field == "Global Quote"));
    }
}
