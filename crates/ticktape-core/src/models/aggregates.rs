use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::market_time;

/// One OHLCV bar from the aggregates endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "v", default)]
    pub volume: f64,
    #[serde(rename = "vw", default, skip_serializing_if = "Option::is_none")]
    pub vwap: Option<f64>,
    /// Bar start, Unix milliseconds.
    #[serde(rename = "t")]
    pub timestamp_ms: i64,
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otc: Option<bool>,
}

impl Aggregate {
    /// Bar start in New York wall time.
    pub fn market_time(&self) -> Option<DateTime<Tz>> {
        market_time::from_unix_millis(self.timestamp_ms)
    }

    pub fn market_date(&self) -> Option<Date> {
        market_time::market_date(self.timestamp_ms)
    }
}

/// Response of `/v2/aggs/ticker/{ticker}/range/...` and `/prev`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatesResponse {
    pub ticker: String,
    #[serde(default)]
    pub adjusted: bool,
    #[serde(default)]
    pub query_count: u64,
    #[serde(default)]
    pub results_count: u64,
    #[serde(default)]
    pub results: Vec<Aggregate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "request_id", default)]
    pub request_id: Option<String>,
    #[serde(rename = "next_url", default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
}

/// Response of `/v1/open-close/{ticker}/{date}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOpenClose {
    pub symbol: String,
    #[serde(with = "super::serde_date")]
    pub from: Date,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_market: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_hours: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}
