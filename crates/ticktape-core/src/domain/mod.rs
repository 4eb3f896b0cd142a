//! # Domain Types
//!
//! Validated value types shared by requests, responses, and the CLI.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`OptionTicker`] | OCC option symbol (`O:SPY251219C00650000`) |
//! | [`OptionTickerBuilder`] | Fluent accumulator for option ticker fields |
//! | [`OptionType`] | Call or put |
//! | [`StrikePrice`] | Strike held in thousandths |
//! | [`Symbol`] | Validated stock/index/crypto ticker |
//! | [`Timespan`] | Aggregate bar size unit |
//! | [`SortOrder`] | Ascending or descending results |
//!
//! [`market_time`] converts Polygon's Unix timestamps into New York wall time.

pub mod market_time;
mod option_ticker;
mod symbol;
mod ticker_builder;
mod timespan;

pub use option_ticker::{OptionTicker, OptionType, StrikePrice};
pub use symbol::Symbol;
pub use ticker_builder::OptionTickerBuilder;
pub use timespan::{SortOrder, Timespan};
