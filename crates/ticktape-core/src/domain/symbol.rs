//! Ticker symbols as they appear in Polygon paths.
//!
//! Polygon keys every endpoint on one uppercase string. Listed stocks are
//! plain (`AAPL`), share classes use a dot or dash (`BRK.B`, `BF-B`), and the
//! non-equity markets carry a one-letter prefix: `I:` for indices, `X:` for
//! crypto, `C:` for forex. OCC option symbols (`O:...`) are longer than any
//! of these and have their own type, [`crate::OptionTicker`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 15;

/// Uppercase Polygon ticker, validated once at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Trim, uppercase and validate `input`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let ticker = input.trim().to_ascii_uppercase();
        let len = ticker.chars().count();

        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }
        match ticker.chars().next() {
            None => return Err(ValidationError::EmptySymbol),
            Some(ch) if !ch.is_ascii_alphabetic() => {
                return Err(ValidationError::SymbolInvalidStart { ch })
            }
            Some(_) => {}
        }

        let body_start = if has_market_prefix(&ticker) { 2 } else { 0 };
        let stray = ticker
            .chars()
            .enumerate()
            .skip(body_start)
            .find(|(_, ch)| !(ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-')));
        if let Some((index, ch)) = stray {
            return Err(ValidationError::SymbolInvalidChar { ch, index });
        }

        Ok(Self(ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Market letter of a prefixed ticker: `I` for `I:SPX`, `None` for `AAPL`.
    pub fn market_prefix(&self) -> Option<char> {
        self.0.chars().next().filter(|_| has_market_prefix(&self.0))
    }
}

/// `X:` followed by at least one character.
fn has_market_prefix(ticker: &str) -> bool {
    ticker.len() > 2 && ticker.as_bytes().get(1) == Some(&b':')
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
