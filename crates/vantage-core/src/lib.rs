pub mod config;
pub mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};

/// The currently supported fixed AlphaVantage API functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncType {
  // Time Series functions
  TimeSeriesIntraday,
  TimeSeriesDaily,
  TimeSeriesDailyAdjusted,
  TimeSeriesWeekly,
  TimeSeriesWeeklyAdjusted,
  TimeSeriesMonthly,
  TimeSeriesMonthlyAdjusted,

  // Quote endpoint
  GlobalQuote,

  // Currency exchange (physical and digital pairs)
  CurrencyExchangeRate,

  // Crypto functions
  CryptoIntraday,
  CryptoDaily,
  CryptoWeekly,
  CryptoMonthly,
}

impl FuncType {
  /// The query-string value AlphaVantage expects for this function.
  pub fn as_str(&self) -> &'static str {
    match self {
      FuncType::TimeSeriesIntraday => "TIME_SERIES_INTRADAY",
      FuncType::TimeSeriesDaily => "TIME_SERIES_DAILY",
      FuncType::TimeSeriesDailyAdjusted => "TIME_SERIES_DAILY_ADJUSTED",
      FuncType::TimeSeriesWeekly => "TIME_SERIES_WEEKLY",
      FuncType::TimeSeriesWeeklyAdjusted => "TIME_SERIES_WEEKLY_ADJUSTED",
      FuncType::TimeSeriesMonthly => "TIME_SERIES_MONTHLY",
      FuncType::TimeSeriesMonthlyAdjusted => "TIME_SERIES_MONTHLY_ADJUSTED",

      FuncType::GlobalQuote => "GLOBAL_QUOTE",

      FuncType::CurrencyExchangeRate => "CURRENCY_EXCHANGE_RATE",

      FuncType::CryptoIntraday => "CRYPTO_INTRADAY",
      FuncType::CryptoDaily => "DIGITAL_CURRENCY_DAILY",
      FuncType::CryptoWeekly => "DIGITAL_CURRENCY_WEEKLY",
      FuncType::CryptoMonthly => "DIGITAL_CURRENCY_MONTHLY",
    }
  }
}

impl std::fmt::Display for FuncType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// The technical-indicator functions.
///
/// Each variant doubles as the API `function` parameter and as the suffix of
/// the `"Technical Analysis: <name>"` key under which the values arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
  Sma,
  Ema,
  Wma,
  Dema,
  Tema,
  Trima,
  Kama,
  Mama,
  Vwap,
  T3,
  Macd,
  MacdExt,
  Stoch,
  StochF,
  Rsi,
  StochRsi,
  WillR,
  Adx,
  Adxr,
  Apo,
  Ppo,
  Mom,
  Bop,
  Cci,
  Cmo,
  Roc,
  Rocr,
  Aroon,
  AroonOsc,
  Mfi,
  Trix,
  UltOsc,
  Dx,
  MinusDi,
  PlusDi,
  MinusDm,
  PlusDm,
  Bbands,
  Midpoint,
  Midprice,
  Sar,
  Trange,
  Atr,
  Natr,
  Ad,
  Adosc,
  Obv,
  HtTrendline,
  HtSine,
  HtTrendmode,
  HtDcPeriod,
  HtDcPhase,
  HtPhasor,
}

impl Indicator {
  /// The upstream function name, e.g. `"SMA"` or `"HT_TRENDLINE"`.
  pub fn as_str(&self) -> &'static str {
    match self {
      Indicator::Sma => "SMA",
      Indicator::Ema => "EMA",
      Indicator::Wma => "WMA",
      Indicator::Dema => "DEMA",
      Indicator::Tema => "TEMA",
      Indicator::Trima => "TRIMA",
      Indicator::Kama => "KAMA",
      Indicator::Mama => "MAMA",
      Indicator::Vwap => "VWAP",
      Indicator::T3 => "T3",
      Indicator::Macd => "MACD",
      Indicator::MacdExt => "MACDEXT",
      Indicator::Stoch => "STOCH",
      Indicator::StochF => "STOCHF",
      Indicator::Rsi => "RSI",
      Indicator::StochRsi => "STOCHRSI",
      Indicator::WillR => "WILLR",
      Indicator::Adx => "ADX",
      Indicator::Adxr => "ADXR",
      Indicator::Apo => "APO",
      Indicator::Ppo => "PPO",
      Indicator::Mom => "MOM",
      Indicator::Bop => "BOP",
      Indicator::Cci => "CCI",
      Indicator::Cmo => "CMO",
      Indicator::Roc => "ROC",
      Indicator::Rocr => "ROCR",
      Indicator::Aroon => "AROON",
      Indicator::AroonOsc => "AROONOSC",
      Indicator::Mfi => "MFI",
      Indicator::Trix => "TRIX",
      Indicator::UltOsc => "ULTOSC",
      Indicator::Dx => "DX",
      Indicator::MinusDi => "MINUS_DI",
      Indicator::PlusDi => "PLUS_DI",
      Indicator::MinusDm => "MINUS_DM",
      Indicator::PlusDm => "PLUS_DM",
      Indicator::Bbands => "BBANDS",
      Indicator::Midpoint => "MIDPOINT",
      Indicator::Midprice => "MIDPRICE",
      Indicator::Sar => "SAR",
      Indicator::Trange => "TRANGE",
      Indicator::Atr => "ATR",
      Indicator::Natr => "NATR",
      Indicator::Ad => "AD",
      Indicator::Adosc => "ADOSC",
      Indicator::Obv => "OBV",
      Indicator::HtTrendline => "HT_TRENDLINE",
      Indicator::HtSine => "HT_SINE",
      Indicator::HtTrendmode => "HT_TRENDMODE",
      Indicator::HtDcPeriod => "HT_DCPERIOD",
      Indicator::HtDcPhase => "HT_DCPHASE",
      Indicator::HtPhasor => "HT_PHASOR",
    }
  }
}

impl std::fmt::Display for Indicator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Base URL for AlphaVantage API
pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_func_type_display() {
    assert_eq!(FuncType::TimeSeriesDailyAdjusted.to_string(), "TIME_SERIES_DAILY_ADJUSTED");
    assert_eq!(FuncType::CryptoDaily.to_string(), "DIGITAL_CURRENCY_DAILY");
    assert_eq!(FuncType::GlobalQuote.as_str(), "GLOBAL_QUOTE");
  }

  #[test]
  fn test_indicator_display() {
    assert_eq!(Indicator::Sma.to_string(), "SMA");
    assert_eq!(Indicator::MinusDi.as_str(), "MINUS_DI");
    assert_eq!(Indicator::HtTrendline.as_str(), "HT_TRENDLINE");
  }
}
