use serde::Serialize;
use ticktape_core::market_time::parse_date;
use ticktape_core::models::{Aggregate, AggregatesResponse};
use ticktape_core::{AggregatesRange, AggregatesRequest, OptionTicker, PolygonClient, Symbol};

use crate::cli::{AggsArgs, PrevArgs};
use crate::error::CliError;
use crate::output::CommandOutput;

/// Stock symbol or option contract, told apart by the `O:` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Instrument {
    Stock(Symbol),
    Option(OptionTicker),
}

impl Instrument {
    fn parse(raw: &str) -> Result<Self, CliError> {
        let trimmed = raw.trim();
        if trimmed.starts_with("O:") {
            Ok(Self::Option(OptionTicker::parse(trimmed)?))
        } else {
            Ok(Self::Stock(Symbol::parse(trimmed)?))
        }
    }
}

#[derive(Debug, Serialize)]
struct BarView<'a> {
    market_time: Option<String>,
    #[serde(flatten)]
    bar: &'a Aggregate,
}

#[derive(Debug, Serialize)]
struct AggregatesView<'a> {
    ticker: &'a str,
    adjusted: bool,
    results_count: u64,
    bars: Vec<BarView<'a>>,
    next_url: Option<&'a str>,
}

impl<'a> From<&'a AggregatesResponse> for AggregatesView<'a> {
    fn from(response: &'a AggregatesResponse) -> Self {
        let bars = response
            .results
            .iter()
            .map(|bar| BarView {
                market_time: bar.market_time().map(|local| local.to_rfc3339()),
                bar,
            })
            .collect();
        Self {
            ticker: &response.ticker,
            adjusted: response.adjusted,
            results_count: response.results_count,
            bars,
            next_url: response.next_url.as_deref(),
        }
    }
}

pub async fn aggs(args: &AggsArgs, client: &PolygonClient) -> Result<CommandOutput, CliError> {
    let instrument = Instrument::parse(&args.ticker)?;
    let range = AggregatesRange::new(
        args.multiplier,
        args.timespan()?,
        parse_date(&args.from)?,
        parse_date(&args.to)?,
    )?
    .with_sort(args.sort()?)
    .with_adjusted(!args.unadjusted)
    .with_limit(args.limit)?;

    let response = match instrument {
        Instrument::Stock(symbol) => {
            client
                .stocks()
                .aggregates(&AggregatesRequest::new(symbol, range))
                .await?
        }
        Instrument::Option(ticker) => client.options().aggregates(&ticker, &range).await?,
    };

    let data = serde_json::to_value(AggregatesView::from(&response))?;
    Ok(CommandOutput::new("aggs", data))
}

pub async fn prev(args: &PrevArgs, client: &PolygonClient) -> Result<CommandOutput, CliError> {
    let response = match Instrument::parse(&args.ticker)? {
        Instrument::Stock(symbol) => {
            client
                .stocks()
                .previous_close(&symbol, !args.unadjusted)
                .await?
        }
        Instrument::Option(ticker) => client.options().previous_close(&ticker).await?,
    };

    let data = serde_json::to_value(AggregatesView::from(&response))?;
    Ok(CommandOutput::new("prev", data))
}
