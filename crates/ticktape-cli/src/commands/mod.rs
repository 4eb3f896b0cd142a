mod market;
mod options;
mod reference;
mod ticker;

use log::debug;
use ticktape_core::{ClientConfig, PolygonClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::CommandOutput;

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    match &cli.command {
        Command::Ticker(args) => ticker::run(args),
        Command::Aggs(args) => market::aggs(args, &client(cli)?).await,
        Command::Prev(args) => market::prev(args, &client(cli)?).await,
        Command::Contract(args) => options::contract(args, &client(cli)?).await,
        Command::Tickers(args) => reference::tickers(args, &client(cli)?).await,
        Command::MarketStatus => reference::market_status(&client(cli)?).await,
    }
}

fn client(cli: &Cli) -> Result<PolygonClient, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(timeout_ms) = cli.timeout_ms.filter(|value| *value > 0) {
        config = config.with_timeout_ms(timeout_ms);
    }
    debug!(
        "using {} with {}ms timeout",
        config.base_url(),
        config.timeout_ms()
    );
    Ok(PolygonClient::new(config))
}
