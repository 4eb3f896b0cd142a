use crate::models::{
    ListResponse, MarketHoliday, MarketStatus, SingleResponse, TickerDetails, TickerSummary,
};
use crate::requests::TickersRequest;
use crate::{ApiError, PolygonClient, Symbol};

/// Reference data and market calendar endpoints.
#[derive(Clone, Copy)]
pub struct ReferenceService<'a> {
    client: &'a PolygonClient,
}

impl<'a> ReferenceService<'a> {
    pub(crate) fn new(client: &'a PolygonClient) -> Self {
        Self { client }
    }

    pub async fn tickers(
        &self,
        req: &TickersRequest,
    ) -> Result<ListResponse<TickerSummary>, ApiError> {
        self.client
            .get_json("/v3/reference/tickers", &req.query_params())
            .await
    }

    pub async fn ticker_details(&self, symbol: &Symbol) -> Result<TickerDetails, ApiError> {
        let path = format!("/v3/reference/tickers/{symbol}");
        let response: SingleResponse<TickerDetails> = self.client.get_json(&path, &[]).await?;
        Ok(response.results)
    }

    pub async fn market_status(&self) -> Result<MarketStatus, ApiError> {
        self.client.get_json("/v1/marketstatus/now", &[]).await
    }

    pub async fn market_holidays(&self) -> Result<Vec<MarketHoliday>, ApiError> {
        self.client.get_json("/v1/marketstatus/upcoming", &[]).await
    }
}
