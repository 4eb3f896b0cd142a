use serde::Serialize;
use ticktape_core::market_time::{format_date, parse_date};
use ticktape_core::{OptionTicker, OptionTickerBuilder};

use crate::cli::{TickerArgs, TickerBuildArgs, TickerCommand};
use crate::error::CliError;
use crate::output::CommandOutput;

#[derive(Debug, Serialize)]
struct TickerView {
    symbol: String,
    underlying: String,
    expiration: String,
    option_type: &'static str,
    strike: f64,
    strike_thousandths: u32,
}

impl From<&OptionTicker> for TickerView {
    fn from(ticker: &OptionTicker) -> Self {
        Self {
            symbol: ticker.to_occ_symbol(),
            underlying: ticker.underlying().to_owned(),
            expiration: format_date(ticker.expiration()),
            option_type: ticker.option_type().as_str(),
            strike: ticker.strike().as_f64(),
            strike_thousandths: ticker.strike().thousandths(),
        }
    }
}

pub fn run(args: &TickerArgs) -> Result<CommandOutput, CliError> {
    let (command, ticker) = match &args.command {
        TickerCommand::Parse(parse) => ("ticker parse", OptionTicker::parse(parse.symbol.trim())?),
        TickerCommand::Build(build) => ("ticker build", build_ticker(build)?),
    };

    let data = serde_json::to_value(TickerView::from(&ticker))?;
    Ok(CommandOutput::new(command, data))
}

fn build_ticker(args: &TickerBuildArgs) -> Result<OptionTicker, CliError> {
    let expiration = parse_date(&args.expiration)?;
    let ticker = OptionTickerBuilder::new()
        .with_underlying(&args.underlying)
        .with_expiration_date(expiration)
        .with_option_type(args.option_type.into())
        .with_strike(args.strike)
        .build_ticker()?;
    Ok(ticker)
}
