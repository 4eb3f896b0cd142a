use ticktape_core::{OptionTicker, PolygonClient};

use crate::cli::ContractArgs;
use crate::error::CliError;
use crate::output::CommandOutput;

pub async fn contract(
    args: &ContractArgs,
    client: &PolygonClient,
) -> Result<CommandOutput, CliError> {
    let ticker = OptionTicker::parse(args.symbol.trim())?;
    let contract = client.options().contract(&ticker).await?;
    Ok(CommandOutput::new("contract", serde_json::to_value(contract)?))
}
