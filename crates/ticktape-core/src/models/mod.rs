//! # Response DTOs
//!
//! Serde mirrors of Polygon JSON payloads. Field names follow the wire format
//! through `#[serde(rename)]`; anything Polygon may omit is optional so that
//! sparse responses still decode.

mod aggregates;
mod options;
mod reference;
mod trades;

use serde::{Deserialize, Serialize};

pub use aggregates::{Aggregate, AggregatesResponse, DailyOpenClose};
pub use options::{
    DaySummary, Greeks, OptionContract, OptionSnapshot, SnapshotDetails, UnderlyingAsset,
};
pub use reference::{
    Address, MarketHoliday, MarketStatus, TickerDetails, TickerSummary,
};
pub use trades::{LastTrade, LastTradeResponse};

/// Envelope for endpoints returning a single `results` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    pub results: T,
}

/// Envelope for paginated endpoints returning a `results` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_url: Option<String>,
}

impl<T> ListResponse<T> {
    pub fn has_next_page(&self) -> bool {
        self.next_url.is_some()
    }
}

/// `YYYY-MM-DD` <-> [`time::Date`].
pub(crate) mod serde_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use crate::domain::market_time::{format_date, parse_date};

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_date(&value).map_err(serde::de::Error::custom)
    }
}
