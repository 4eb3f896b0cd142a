use time::{Date, Month};

use super::option_ticker::{validate_underlying, OptionTicker, OptionType, StrikePrice};
use crate::TickerError;

/// Fluent accumulator for [`OptionTicker`] fields.
///
/// ```rust
/// use ticktape_core::OptionTickerBuilder;
///
/// let symbol = OptionTickerBuilder::new()
///     .with_underlying("tsla")
///     .with_expiration(2026, 3, 20)
///     .as_call()
///     .with_strike(700.0)
///     .build_symbol()
///     .unwrap();
/// assert_eq!(symbol, "O:TSLA260320C00700000");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionTickerBuilder {
    underlying: Option<String>,
    expiration: Option<ExpirationInput>,
    option_type: Option<OptionType>,
    strike: Option<StrikeInput>,
}

#[derive(Debug, Clone, Copy)]
enum ExpirationInput {
    Parts { year: i32, month: u8, day: u8 },
    Date(Date),
}

#[derive(Debug, Clone, Copy)]
enum StrikeInput {
    Price(f64),
    Thousandths(u32),
}

impl OptionTickerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_underlying(mut self, underlying: &str) -> Self {
        self.underlying = Some(underlying.to_owned());
        self
    }

    pub fn with_expiration(mut self, year: i32, month: u8, day: u8) -> Self {
        self.expiration = Some(ExpirationInput::Parts { year, month, day });
        self
    }

    pub fn with_expiration_date(mut self, expiration: Date) -> Self {
        self.expiration = Some(ExpirationInput::Date(expiration));
        self
    }

    pub fn as_call(self) -> Self {
        self.with_option_type(OptionType::Call)
    }

    pub fn as_put(self) -> Self {
        self.with_option_type(OptionType::Put)
    }

    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    pub fn with_strike(mut self, strike: f64) -> Self {
        self.strike = Some(StrikeInput::Price(strike));
        self
    }

    pub fn with_strike_thousandths(mut self, thousandths: u32) -> Self {
        self.strike = Some(StrikeInput::Thousandths(thousandths));
        self
    }

    /// Validate the accumulated fields and produce the ticker.
    pub fn build_ticker(self) -> Result<OptionTicker, TickerError> {
        let (Some(underlying), Some(expiration), Some(option_type), Some(strike)) =
            (self.underlying.as_deref(), self.expiration, self.option_type, self.strike)
        else {
            return Err(TickerError::IncompleteBuilder {
                missing: self.missing_fields(),
            });
        };

        let underlying = underlying.trim().to_ascii_uppercase();
        validate_underlying(&underlying).map_err(|reason| TickerError::InvalidField {
            field: "underlying",
            reason: reason.to_owned(),
        })?;

        let expiration = match expiration {
            ExpirationInput::Date(date) => date,
            ExpirationInput::Parts { year, month, day } => calendar_date(year, month, day)?,
        };

        let strike = match strike {
            StrikeInput::Price(price) => StrikePrice::from_f64(price)?,
            StrikeInput::Thousandths(thousandths) => StrikePrice::from_thousandths(thousandths)?,
        };

        OptionTicker::new(&underlying, expiration, option_type, strike)
    }

    /// Build and return the canonical `O:` symbol.
    pub fn build_symbol(self) -> Result<String, TickerError> {
        self.build_ticker().map(|ticker| ticker.to_occ_symbol())
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::with_capacity(4);
        if self.underlying.is_none() {
            missing.push("underlying");
        }
        if self.expiration.is_none() {
            missing.push("expiration");
        }
        if self.option_type.is_none() {
            missing.push("option_type");
        }
        if self.strike.is_none() {
            missing.push("strike");
        }
        missing
    }
}

fn calendar_date(year: i32, month: u8, day: u8) -> Result<Date, TickerError> {
    let invalid = || TickerError::InvalidField {
        field: "expiration",
        reason: format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
    };
    let month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn builds_ticker_from_all_fields() {
        let ticker = OptionTickerBuilder::new()
            .with_underlying(" spy ")
            .with_expiration(2025, 12, 19)
            .as_put()
            .with_strike(650.0)
            .build_ticker()
            .expect("complete builder");

        assert_eq!(ticker.underlying(), "SPY");
        assert_eq!(ticker.expiration(), date!(2025 - 12 - 19));
        assert_eq!(ticker.to_occ_symbol(), "O:SPY251219P00650000");
    }

    #[test]
    fn reports_every_missing_field() {
        let err = OptionTickerBuilder::new()
            .with_underlying("SPY")
            .build_ticker()
            .expect_err("incomplete builder");

        assert_eq!(
            err,
            TickerError::IncompleteBuilder {
                missing: vec!["expiration", "option_type", "strike"],
            }
        );
    }

    #[test]
    fn empty_builder_is_missing_everything() {
        let err = OptionTickerBuilder::new().build_symbol().expect_err("empty");
        assert!(matches!(
            err,
            TickerError::IncompleteBuilder { ref missing } if missing.len() == 4
        ));
    }

    #[test]
    fn rejects_non_calendar_expiration() {
        let err = OptionTickerBuilder::new()
            .with_underlying("SPY")
            .with_expiration(2025, 2, 30)
            .as_call()
            .with_strike(1.0)
            .build_ticker()
            .expect_err("feb 30");

        assert!(matches!(
            err,
            TickerError::InvalidField { field: "expiration", .. }
        ));
    }

    #[test]
    fn rejects_expiration_outside_two_digit_century() {
        let err = OptionTickerBuilder::new()
            .with_underlying("SPY")
            .with_expiration_date(date!(2101 - 01 - 15))
            .as_call()
            .with_strike(1.0)
            .build_ticker()
            .expect_err("year 2101");

        assert!(matches!(
            err,
            TickerError::InvalidField { field: "expiration", .. }
        ));
    }

    #[test]
    fn rejects_oversized_underlying_and_strike() {
        let long = OptionTickerBuilder::new()
            .with_underlying("GOOGLEX")
            .with_expiration(2025, 1, 17)
            .as_call()
            .with_strike(1.0)
            .build_ticker();
        assert!(matches!(
            long,
            Err(TickerError::InvalidField { field: "underlying", .. })
        ));

        let huge = OptionTickerBuilder::new()
            .with_underlying("SPY")
            .with_expiration(2025, 1, 17)
            .as_call()
            .with_strike(250_000.0)
            .build_ticker();
        assert!(matches!(
            huge,
            Err(TickerError::InvalidField { field: "strike", .. })
        ));
    }

    #[test]
    fn later_setters_override_earlier_ones() {
        let symbol = OptionTickerBuilder::new()
            .with_underlying("QQQ")
            .with_expiration(2025, 6, 20)
            .as_call()
            .as_put()
            .with_strike(400.0)
            .with_strike_thousandths(412_500)
            .build_symbol()
            .expect("complete builder");

        assert_eq!(symbol, "O:QQQ250620P00412500");
    }
}
