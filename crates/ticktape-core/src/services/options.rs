use time::Date;

use crate::models::{
    AggregatesResponse, ListResponse, OptionContract, OptionSnapshot, SingleResponse,
};
use crate::requests::{AggregatesRange, ContractsRequest};
use crate::{ApiError, OptionTicker, OptionTickerBuilder, OptionType, PolygonClient};

/// Options endpoints, keyed by [`OptionTicker`].
///
/// The `*_for` variants take the contract terms instead of a symbol and build
/// the ticker first, so malformed terms fail before any request is sent.
#[derive(Clone, Copy)]
pub struct OptionsService<'a> {
    client: &'a PolygonClient,
}

impl<'a> OptionsService<'a> {
    pub(crate) fn new(client: &'a PolygonClient) -> Self {
        Self { client }
    }

    pub async fn contract(&self, ticker: &OptionTicker) -> Result<OptionContract, ApiError> {
        let path = format!("/v3/reference/options/contracts/{ticker}");
        let response: SingleResponse<OptionContract> = self.client.get_json(&path, &[]).await?;
        Ok(response.results)
    }

    pub async fn contracts(
        &self,
        req: &ContractsRequest,
    ) -> Result<ListResponse<OptionContract>, ApiError> {
        self.client
            .get_json("/v3/reference/options/contracts", &req.query_params())
            .await
    }

    pub async fn snapshot(&self, ticker: &OptionTicker) -> Result<OptionSnapshot, ApiError> {
        let path = format!("/v3/snapshot/options/{}/{ticker}", ticker.underlying());
        let response: SingleResponse<OptionSnapshot> = self.client.get_json(&path, &[]).await?;
        Ok(response.results)
    }

    pub async fn aggregates(
        &self,
        ticker: &OptionTicker,
        range: &AggregatesRange,
    ) -> Result<AggregatesResponse, ApiError> {
        let path = format!("/v2/aggs/ticker/{ticker}/range/{}", range.path_segment());
        self.client.get_json(&path, &range.query_params()).await
    }

    pub async fn previous_close(
        &self,
        ticker: &OptionTicker,
    ) -> Result<AggregatesResponse, ApiError> {
        let path = format!("/v2/aggs/ticker/{ticker}/prev");
        self.client.get_json(&path, &[]).await
    }

    pub async fn contract_for(
        &self,
        underlying: &str,
        expiration: Date,
        option_type: OptionType,
        strike: f64,
    ) -> Result<OptionContract, ApiError> {
        let ticker = ticker_from_terms(underlying, expiration, option_type, strike)?;
        self.contract(&ticker).await
    }

    pub async fn snapshot_for(
        &self,
        underlying: &str,
        expiration: Date,
        option_type: OptionType,
        strike: f64,
    ) -> Result<OptionSnapshot, ApiError> {
        let ticker = ticker_from_terms(underlying, expiration, option_type, strike)?;
        self.snapshot(&ticker).await
    }

    pub async fn previous_close_for(
        &self,
        underlying: &str,
        expiration: Date,
        option_type: OptionType,
        strike: f64,
    ) -> Result<AggregatesResponse, ApiError> {
        let ticker = ticker_from_terms(underlying, expiration, option_type, strike)?;
        self.previous_close(&ticker).await
    }
}

fn ticker_from_terms(
    underlying: &str,
    expiration: Date,
    option_type: OptionType,
    strike: f64,
) -> Result<OptionTicker, ApiError> {
    OptionTickerBuilder::new()
        .with_underlying(underlying)
        .with_expiration_date(expiration)
        .with_option_type(option_type)
        .with_strike(strike)
        .build_ticker()
        .map_err(ApiError::from)
}
