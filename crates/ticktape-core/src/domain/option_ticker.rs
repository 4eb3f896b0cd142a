//! OCC-style option symbols as used by Polygon (`O:SPY251219C00650000`).
//!
//! The canonical form is `O:` + underlying + `YYMMDD` + `C|P` + the strike in
//! thousandths zero-padded to 8 digits. The 15-character suffix is fixed-width,
//! so parsing reads it from the right and treats whatever precedes it as the
//! underlying.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::TickerError;

const PREFIX: &str = "O:";
const SUFFIX_LEN: usize = 15;
const DATE_LEN: usize = 6;
const STRIKE_LEN: usize = 8;
const MAX_UNDERLYING_LEN: usize = 6;
const MAX_STRIKE_THOUSANDTHS: u32 = 99_999_999;
const MIN_YEAR: i32 = 2000;
const MAX_YEAR: i32 = 2099;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub const fn as_char(self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' => Some(Self::Call),
            'P' => Some(Self::Put),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

impl Display for OptionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = TickerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            other => Err(TickerError::InvalidField {
                field: "option_type",
                reason: format!("'{other}' is not call or put"),
            }),
        }
    }
}

/// Strike price held as whole thousandths of a dollar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct StrikePrice(u32);

impl StrikePrice {
    pub fn from_thousandths(thousandths: u32) -> Result<Self, TickerError> {
        if thousandths > MAX_STRIKE_THOUSANDTHS {
            return Err(strike_error("must be below 100000"));
        }
        Ok(Self(thousandths))
    }

    /// Rounds to the nearest thousandth.
    pub fn from_f64(value: f64) -> Result<Self, TickerError> {
        if !value.is_finite() {
            return Err(strike_error("must be finite"));
        }
        if value < 0.0 {
            return Err(strike_error("must be non-negative"));
        }

        let scaled = (value * 1000.0).round();
        if scaled > f64::from(MAX_STRIKE_THOUSANDTHS) {
            return Err(strike_error("must be below 100000"));
        }
        Ok(Self(scaled as u32))
    }

    pub const fn thousandths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 1000.0
    }
}

impl Display for StrikePrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / 1000;
        let fraction = self.0 % 1000;
        if fraction == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{fraction:03}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl TryFrom<f64> for StrikePrice {
    type Error = TickerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl From<StrikePrice> for f64 {
    fn from(value: StrikePrice) -> Self {
        value.as_f64()
    }
}

fn strike_error(reason: &str) -> TickerError {
    TickerError::InvalidField {
        field: "strike",
        reason: reason.to_owned(),
    }
}

/// A single option contract identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionTicker {
    underlying: String,
    expiration: Date,
    option_type: OptionType,
    strike: StrikePrice,
}

impl OptionTicker {
    /// Construct from already-normalized fields.
    pub fn new(
        underlying: &str,
        expiration: Date,
        option_type: OptionType,
        strike: StrikePrice,
    ) -> Result<Self, TickerError> {
        validate_underlying(underlying).map_err(|reason| TickerError::InvalidField {
            field: "underlying",
            reason: reason.to_owned(),
        })?;
        validate_expiration(expiration)?;

        Ok(Self {
            underlying: underlying.to_owned(),
            expiration,
            option_type,
            strike,
        })
    }

    /// Parse a canonical `O:<underlying><YYMMDD><C|P><strike>` symbol.
    pub fn parse(raw: &str) -> Result<Self, TickerError> {
        let body = raw
            .strip_prefix(PREFIX)
            .ok_or_else(|| TickerError::format(raw, "missing 'O:' prefix"))?;
        if !body.is_ascii() {
            return Err(TickerError::format(raw, "contains non-ASCII characters"));
        }
        if body.len() <= SUFFIX_LEN {
            return Err(TickerError::format(
                raw,
                "too short for underlying, expiration, type and strike",
            ));
        }

        let (underlying, suffix) = body.split_at(body.len() - SUFFIX_LEN);
        let (date_digits, rest) = suffix.split_at(DATE_LEN);
        let (type_digit, strike_digits) = rest.split_at(1);
        debug_assert_eq!(strike_digits.len(), STRIKE_LEN);

        let option_type = type_digit
            .chars()
            .next()
            .and_then(OptionType::from_char)
            .ok_or_else(|| TickerError::format(raw, "type character must be 'C' or 'P'"))?;

        let thousandths = parse_digits(strike_digits)
            .ok_or_else(|| TickerError::format(raw, "strike must be 8 digits"))?;
        let strike = StrikePrice::from_thousandths(thousandths)
            .map_err(|_| TickerError::format(raw, "strike out of range"))?;

        let expiration = parse_expiration(date_digits)
            .ok_or_else(|| TickerError::format(raw, "expiration must be a valid YYMMDD date"))?;

        validate_underlying(underlying).map_err(|reason| TickerError::format(raw, reason))?;

        Ok(Self {
            underlying: underlying.to_owned(),
            expiration,
            option_type,
            strike,
        })
    }

    /// Canonical string form.
    pub fn to_occ_symbol(&self) -> String {
        format!(
            "{PREFIX}{}{:02}{:02}{:02}{}{:08}",
            self.underlying,
            self.expiration.year() % 100,
            u8::from(self.expiration.month()),
            self.expiration.day(),
            self.option_type.as_char(),
            self.strike.thousandths(),
        )
    }

    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    pub const fn expiration(&self) -> Date {
        self.expiration
    }

    pub const fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub const fn strike(&self) -> StrikePrice {
        self.strike
    }
}

impl Display for OptionTicker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_occ_symbol())
    }
}

impl FromStr for OptionTicker {
    type Err = TickerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for OptionTicker {
    type Error = TickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OptionTicker> for String {
    fn from(value: OptionTicker) -> Self {
        value.to_occ_symbol()
    }
}

pub(crate) fn validate_underlying(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("underlying must not be empty");
    }
    if value.len() > MAX_UNDERLYING_LEN {
        return Err("underlying must be at most 6 characters");
    }
    if !value
        .bytes()
        .all(|byte| byte.is_ascii_uppercase() || byte.is_ascii_digit())
    {
        return Err("underlying must be uppercase ASCII letters or digits");
    }
    Ok(())
}

pub(crate) fn validate_expiration(expiration: Date) -> Result<(), TickerError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&expiration.year()) {
        return Err(TickerError::InvalidField {
            field: "expiration",
            reason: format!(
                "year {} is outside {MIN_YEAR}..={MAX_YEAR}",
                expiration.year()
            ),
        });
    }
    Ok(())
}

fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn parse_expiration(digits: &str) -> Option<Date> {
    let year = parse_digits(&digits[0..2])?;
    let month = parse_digits(&digits[2..4])?;
    let day = parse_digits(&digits[4..6])?;

    let month = Month::try_from(u8::try_from(month).ok()?).ok()?;
    Date::from_calendar_date(MIN_YEAR + year as i32, month, u8::try_from(day).ok()?).ok()
}
