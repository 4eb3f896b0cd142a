//! # Ticktape Core
//!
//! Typed client for the Polygon.io REST API.
//!
//! ## Overview
//!
//! - **Option ticker codec**: OCC symbols (`O:SPY251219C00650000`) to structured
//!   fields and back, plus a fluent builder
//! - **Validated domain types**: symbols, timespans, strikes, and dates
//! - **Per-domain services**: stocks, options, and reference data
//! - **Response DTOs** mirroring Polygon JSON, with New York market-time helpers
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`PolygonClient`] and JSON request execution |
//! | [`config`] | Environment-driven client configuration |
//! | [`domain`] | Option tickers, symbols, timespans, market time |
//! | [`error`] | Validation, ticker, config, and API errors |
//! | [`http_client`] | Transport trait and reqwest implementation |
//! | [`models`] | Response DTOs |
//! | [`requests`] | Validated request parameters |
//! | [`services`] | Stocks, options, and reference endpoints |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ticktape_core::{OptionTicker, PolygonClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PolygonClient::from_env()?;
//!     let ticker = OptionTicker::parse("O:SPY251219C00650000")?;
//!
//!     let snapshot = client.options().snapshot(&ticker).await?;
//!     println!("{ticker} IV: {:?}", snapshot.implied_volatility);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Service calls return [`ApiError`], classified by [`ApiErrorKind`]:
//!
//! ```rust
//! use ticktape_core::{ApiError, ApiErrorKind};
//!
//! fn handle_error(error: ApiError) {
//!     match error.kind() {
//!         ApiErrorKind::RateLimited => {
//!             // back off and try again later
//!         }
//!         ApiErrorKind::NotFound => {
//!             // unknown ticker or contract
//!         }
//!         ApiErrorKind::InvalidRequest => {
//!             // report to user
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - API keys come from the environment and are redacted from `Debug` output
//! - Keys are sent as a bearer header, never in the URL, and never logged

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod models;
pub mod requests;
pub mod services;

pub use client::PolygonClient;
pub use config::ClientConfig;
pub use domain::{
    market_time, OptionTicker, OptionTickerBuilder, OptionType, SortOrder, StrikePrice, Symbol,
    Timespan,
};
pub use error::{ApiError, ApiErrorKind, ConfigError, TickerError, ValidationError};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use requests::{AggregatesRange, AggregatesRequest, ContractsRequest, TickersRequest};
pub use services::{OptionsService, ReferenceService, StocksService};
