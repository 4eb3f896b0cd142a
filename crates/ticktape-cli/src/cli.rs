//! CLI argument definitions for ticktape.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ticker parse` | Decompose an OCC option symbol (offline) |
//! | `ticker build` | Assemble an OCC option symbol from its terms (offline) |
//! | `aggs` | Fetch OHLCV aggregates for a stock or option ticker |
//! | `prev` | Fetch the previous session's bar |
//! | `contract` | Fetch reference data for an option contract |
//! | `tickers` | Search reference tickers |
//! | `market-status` | Show whether US markets are open |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | from env | Request timeout override |
//!
//! # Examples
//!
//! ```bash
//! ticktape ticker parse O:SPY251219C00650000
//! ticktape ticker build --underlying SPY --expiration 2025-12-19 --type call --strike 650
//! ticktape aggs AAPL --from 2024-01-02 --to 2024-01-31 --pretty
//! RUST_LOG=debug ticktape contract O:SPY251219C00650000
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use ticktape_core::{OptionType, SortOrder, Timespan};

#[derive(Debug, Parser)]
#[command(
    name = "ticktape",
    author,
    version,
    about = "Typed Polygon.io client and option symbol toolkit",
    long_about = "ticktape reads market data from the Polygon.io REST API and converts OCC \
option symbols to and from their contract terms.\n\
\n\
API commands read the key from TICKTAPE_POLYGON_API_KEY (or POLYGON_API_KEY).\n\
Set RUST_LOG=debug to trace requests."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds; overrides TICKTAPE_HTTP_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object.
    Json,
    /// Aligned key/value rows for terminal display.
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse or build OCC option symbols without calling the API.
    Ticker(TickerArgs),

    /// Fetch OHLCV aggregates over a date range.
    ///
    ///   ticktape aggs AAPL --from 2024-01-02 --to 2024-01-05
    ///   ticktape aggs O:SPY251219C00650000 --from 2025-06-02 --to 2025-06-06 --timespan hour
    Aggs(AggsArgs),

    /// Fetch the previous session's bar.
    Prev(PrevArgs),

    /// Fetch reference data for one option contract.
    Contract(ContractArgs),

    /// Search reference tickers by name or symbol.
    Tickers(TickersArgs),

    /// Show current market status.
    MarketStatus,
}

#[derive(Debug, Args)]
pub struct TickerArgs {
    #[command(subcommand)]
    pub command: TickerCommand,
}

#[derive(Debug, Subcommand)]
pub enum TickerCommand {
    /// Split an OCC symbol into underlying, expiration, type, and strike.
    Parse(TickerParseArgs),
    /// Assemble an OCC symbol from contract terms.
    Build(TickerBuildArgs),
}

#[derive(Debug, Args)]
pub struct TickerParseArgs {
    /// OCC option symbol, e.g. O:SPY251219C00650000.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct TickerBuildArgs {
    /// Underlying root symbol (1-6 characters).
    #[arg(long)]
    pub underlying: String,

    /// Expiration date, YYYY-MM-DD.
    #[arg(long)]
    pub expiration: String,

    /// Contract type.
    #[arg(long = "type", value_enum)]
    pub option_type: OptionTypeArg,

    /// Strike price in dollars; rounded to 1/1000.
    #[arg(long)]
    pub strike: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionTypeArg {
    Call,
    Put,
}

impl From<OptionTypeArg> for OptionType {
    fn from(value: OptionTypeArg) -> Self {
        match value {
            OptionTypeArg::Call => Self::Call,
            OptionTypeArg::Put => Self::Put,
        }
    }
}

#[derive(Debug, Args)]
pub struct AggsArgs {
    /// Stock symbol or OCC option symbol.
    pub ticker: String,

    /// First day of the range, YYYY-MM-DD.
    #[arg(long)]
    pub from: String,

    /// Last day of the range, YYYY-MM-DD.
    #[arg(long)]
    pub to: String,

    /// Bar size unit (second, minute, hour, day, week, month, quarter, year).
    #[arg(long, default_value = "day")]
    pub timespan: String,

    /// Number of timespan units per bar.
    #[arg(long, default_value_t = 1)]
    pub multiplier: u32,

    /// Maximum number of bars.
    #[arg(long, default_value_t = 5_000)]
    pub limit: u32,

    /// Sort by timestamp (asc or desc).
    #[arg(long, default_value = "asc")]
    pub sort: String,

    /// Return prices not adjusted for splits.
    #[arg(long, default_value_t = false)]
    pub unadjusted: bool,
}

impl AggsArgs {
    pub fn timespan(&self) -> Result<Timespan, ticktape_core::ValidationError> {
        self.timespan.parse()
    }

    pub fn sort(&self) -> Result<SortOrder, ticktape_core::ValidationError> {
        self.sort.parse()
    }
}

#[derive(Debug, Args)]
pub struct PrevArgs {
    /// Stock symbol or OCC option symbol.
    pub ticker: String,

    /// Return prices not adjusted for splits (stocks only).
    #[arg(long, default_value_t = false)]
    pub unadjusted: bool,
}

#[derive(Debug, Args)]
pub struct ContractArgs {
    /// OCC option symbol.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct TickersArgs {
    /// Free-form search text.
    #[arg(long)]
    pub search: String,

    /// Restrict to one market (stocks, options, indices, crypto, fx).
    #[arg(long)]
    pub market: Option<String>,

    /// Include delisted tickers.
    #[arg(long, default_value_t = false)]
    pub include_inactive: bool,

    /// Maximum number of results.
    #[arg(long, default_value_t = 20)]
    pub limit: u32,
}
