use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::market_time;
use crate::{OptionTicker, OptionType};

/// Reference data for one option contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub ticker: OptionTicker,
    pub underlying_ticker: String,
    pub contract_type: OptionType,
    #[serde(with = "super::serde_date")]
    pub expiration_date: Date,
    pub strike_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares_per_contract: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfi: Option<String>,
}

/// Session statistics inside an option snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub vwap: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    /// Unix nanoseconds.
    #[serde(default)]
    pub last_updated: Option<i64>,
}

impl DaySummary {
    pub fn last_updated_market_time(&self) -> Option<DateTime<Tz>> {
        self.last_updated.map(market_time::from_unix_nanos)
    }
}

/// Contract terms repeated inside an option snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDetails {
    pub ticker: OptionTicker,
    pub contract_type: OptionType,
    #[serde(with = "super::serde_date")]
    pub expiration_date: Date,
    pub strike_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares_per_contract: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default)]
    pub gamma: Option<f64>,
    #[serde(default)]
    pub theta: Option<f64>,
    #[serde(default)]
    pub vega: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderlyingAsset {
    pub ticker: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub change_to_break_even: Option<f64>,
    #[serde(default)]
    pub timeframe: Option<String>,
    /// Unix nanoseconds.
    #[serde(default)]
    pub last_updated: Option<i64>,
}

/// Response body of `/v3/snapshot/options/{underlying}/{contract}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSnapshot {
    pub details: SnapshotDetails,
    #[serde(default)]
    pub day: DaySummary,
    #[serde(default)]
    pub greeks: Greeks,
    #[serde(default)]
    pub implied_volatility: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<u64>,
    #[serde(default)]
    pub break_even_price: Option<f64>,
    #[serde(default)]
    pub underlying_asset: Option<UnderlyingAsset>,
}
