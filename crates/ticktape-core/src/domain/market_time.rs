//! Calendar dates on the wire and exchange-local timestamps.
//!
//! Polygon reports bar start times as Unix milliseconds and SIP/participant
//! timestamps as Unix nanoseconds, always in UTC. US equity and option
//! sessions are defined in `America/New_York`, so the computed fields on the
//! DTOs convert into that zone.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;
use time::macros::format_description;
use time::{Date, Month};

use crate::ValidationError;

/// Exchange timezone for US equities and options.
pub const MARKET_TZ: Tz = chrono_tz::America::New_York;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<Date, ValidationError> {
    let trimmed = value.trim();
    Date::parse(trimmed, format_description!("[year]-[month]-[day]")).map_err(|_| {
        ValidationError::InvalidDate {
            value: trimmed.to_owned(),
        }
    })
}

/// Format a date as `YYYY-MM-DD` for path segments and query values.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Unix milliseconds to New York wall time. `None` when out of range.
pub fn from_unix_millis(millis: i64) -> Option<DateTime<Tz>> {
    MARKET_TZ.timestamp_millis_opt(millis).single()
}

/// Unix nanoseconds to New York wall time.
pub fn from_unix_nanos(nanos: i64) -> DateTime<Tz> {
    DateTime::<Utc>::from_timestamp_nanos(nanos).with_timezone(&MARKET_TZ)
}

/// The New York trading date containing the given Unix millisecond instant.
pub fn market_date(millis: i64) -> Option<Date> {
    let local = from_unix_millis(millis)?;
    let month = Month::try_from(u8::try_from(local.month()).ok()?).ok()?;
    let day = u8::try_from(local.day()).ok()?;
    Date::from_calendar_date(local.year(), month, day).ok()
}
