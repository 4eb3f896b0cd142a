use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::domain::market_time;

/// Most recent trade for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTrade {
    #[serde(rename = "T")]
    pub ticker: String,
    #[serde(rename = "p")]
    pub price: f64,
    #[serde(rename = "s", default)]
    pub size: f64,
    #[serde(rename = "x", default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<u32>,
    #[serde(rename = "i", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
    #[serde(rename = "c", default)]
    pub conditions: Vec<u32>,
    #[serde(rename = "q", default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u64>,
    #[serde(rename = "z", default, skip_serializing_if = "Option::is_none")]
    pub tape: Option<u8>,
    /// SIP timestamp, Unix nanoseconds.
    #[serde(rename = "t")]
    pub sip_timestamp_ns: i64,
    /// Exchange timestamp, Unix nanoseconds.
    #[serde(rename = "y", default, skip_serializing_if = "Option::is_none")]
    pub participant_timestamp_ns: Option<i64>,
}

impl LastTrade {
    pub fn sip_market_time(&self) -> DateTime<Tz> {
        market_time::from_unix_nanos(self.sip_timestamp_ns)
    }

    pub fn participant_market_time(&self) -> Option<DateTime<Tz>> {
        self.participant_timestamp_ns.map(market_time::from_unix_nanos)
    }
}

/// Response of `/v2/last/trade/{ticker}`.
pub type LastTradeResponse = super::SingleResponse<LastTrade>;
