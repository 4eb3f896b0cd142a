use ticktape_core::{PolygonClient, TickersRequest};

use crate::cli::TickersArgs;
use crate::error::CliError;
use crate::output::CommandOutput;

pub async fn tickers(
    args: &TickersArgs,
    client: &PolygonClient,
) -> Result<CommandOutput, CliError> {
    let mut request = TickersRequest::search(args.search.as_str())?
        .with_limit(args.limit)?
        .with_active((!args.include_inactive).then_some(true));
    if let Some(market) = &args.market {
        request = request.with_market(market.as_str());
    }

    let page = client.reference().tickers(&request).await?;
    Ok(CommandOutput::new("tickers", serde_json::to_value(page.results)?))
}

pub async fn market_status(client: &PolygonClient) -> Result<CommandOutput, CliError> {
    let status = client.reference().market_status().await?;
    Ok(CommandOutput::new("market-status", serde_json::to_value(status)?))
}
