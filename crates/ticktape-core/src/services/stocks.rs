use time::Date;

use crate::domain::market_time::format_date;
use crate::models::{AggregatesResponse, DailyOpenClose, LastTrade, LastTradeResponse};
use crate::requests::AggregatesRequest;
use crate::{ApiError, PolygonClient, Symbol};

/// Equities endpoints.
#[derive(Clone, Copy)]
pub struct StocksService<'a> {
    client: &'a PolygonClient,
}

impl<'a> StocksService<'a> {
    pub(crate) fn new(client: &'a PolygonClient) -> Self {
        Self { client }
    }

    pub async fn aggregates(
        &self,
        req: &AggregatesRequest,
    ) -> Result<AggregatesResponse, ApiError> {
        let path = format!(
            "/v2/aggs/ticker/{}/range/{}",
            req.symbol(),
            req.range().path_segment()
        );
        self.client
            .get_json(&path, &req.range().query_params())
            .await
    }

    pub async fn previous_close(
        &self,
        symbol: &Symbol,
        adjusted: bool,
    ) -> Result<AggregatesResponse, ApiError> {
        let path = format!("/v2/aggs/ticker/{symbol}/prev");
        self.client
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await
    }

    pub async fn daily_open_close(
        &self,
        symbol: &Symbol,
        date: Date,
        adjusted: bool,
    ) -> Result<DailyOpenClose, ApiError> {
        let path = format!("/v1/open-close/{symbol}/{}", format_date(date));
        self.client
            .get_json(&path, &[("adjusted", adjusted.to_string())])
            .await
    }

    pub async fn last_trade(&self, symbol: &Symbol) -> Result<LastTrade, ApiError> {
        let path = format!("/v2/last/trade/{symbol}");
        let response: LastTradeResponse = self.client.get_json(&path, &[]).await?;
        Ok(response.results)
    }
}
