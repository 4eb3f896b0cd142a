use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

/// Row of `/v3/reference/tickers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub primary_exchange: Option<String>,
    #[serde(rename = "type", default)]
    pub ticker_type: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub cik: Option<String>,
    #[serde(default)]
    pub last_updated_utc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// Result of `/v3/reference/tickers/{ticker}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerDetails {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub primary_exchange: Option<String>,
    #[serde(rename = "type", default)]
    pub ticker_type: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub total_employees: Option<u64>,
    #[serde(default)]
    pub list_date: Option<String>,
    #[serde(default)]
    pub share_class_shares_outstanding: Option<f64>,
    #[serde(default)]
    pub weighted_shares_outstanding: Option<f64>,
    #[serde(default)]
    pub sic_code: Option<String>,
    #[serde(default)]
    pub sic_description: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Result of `/v1/marketstatus/now`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatus {
    pub market: String,
    pub server_time: String,
    #[serde(default)]
    pub after_hours: bool,
    #[serde(default)]
    pub early_hours: bool,
    #[serde(default)]
    pub exchanges: BTreeMap<String, String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, String>,
}

impl MarketStatus {
    pub fn is_open(&self) -> bool {
        self.market == "open"
    }
}

/// Entry of `/v1/marketstatus/upcoming`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketHoliday {
    pub exchange: String,
    pub name: String,
    #[serde(with = "super::serde_date")]
    pub date: Date,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

impl MarketHoliday {
    pub fn is_early_close(&self) -> bool {
        self.status == "early-close"
    }
}
