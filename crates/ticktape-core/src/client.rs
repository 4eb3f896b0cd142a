use std::sync::Arc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::http_client::{HttpAuth, HttpClient, HttpRequest, ReqwestHttpClient};
use crate::services::{OptionsService, ReferenceService, StocksService};
use crate::{ApiError, ClientConfig, ConfigError};

/// Entry point for Polygon REST calls.
///
/// Cloning is cheap; the transport is shared behind an `Arc`.
#[derive(Clone)]
pub struct PolygonClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
    auth: HttpAuth,
}

impl PolygonClient {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(config.user_agent()));
        Self::with_http_client(config, http_client)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        ClientConfig::from_env().map(Self::new)
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        let auth = HttpAuth::BearerToken(config.api_key().to_owned());
        Self {
            config,
            http_client,
            auth,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn stocks(&self) -> StocksService<'_> {
        StocksService::new(self)
    }

    pub fn options(&self) -> OptionsService<'_> {
        OptionsService::new(self)
    }

    pub fn reference(&self) -> ReferenceService<'_> {
        ReferenceService::new(self)
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut request = HttpRequest::get(format!("{}{path}", self.config.base_url()))
            .with_auth(&self.auth)
            .with_timeout_ms(self.config.timeout_ms());
        for (name, value) in query {
            request = request.with_query(*name, value.as_str());
        }

        debug!("GET {path} ({} query params)", query.len());
        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!("transport error on {path}: {}", error.message());
            if error.retryable() {
                ApiError::unavailable(format!("transport error: {}", error.message()))
            } else {
                ApiError::internal(format!("transport error: {}", error.message()))
            }
        })?;

        if !response.is_success() {
            let message = StatusProbe::read(&response.body)
                .and_then(StatusProbe::into_message)
                .unwrap_or_else(|| format!("upstream returned status {}", response.status));
            warn!("{path} returned HTTP {}: {message}", response.status);
            return Err(ApiError::from_status(response.status, message));
        }

        if let Some(error) = StatusProbe::read(&response.body).and_then(StatusProbe::into_error) {
            warn!("{path} reported an error status: {}", error.message());
            return Err(error);
        }

        serde_json::from_str(&response.body).map_err(|error| {
            warn!("failed to decode {path}: {error}");
            ApiError::decode(format!("failed to decode response from {path}: {error}"))
        })
    }
}

/// Polygon embeds `status` plus `error`/`message` in most bodies, including
/// some 200 responses.
#[derive(Debug, Deserialize)]
struct StatusProbe {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl StatusProbe {
    fn read(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }

    fn into_error(self) -> Option<ApiError> {
        let status = self.status.clone()?;
        let message = self
            .into_message()
            .unwrap_or_else(|| format!("upstream reported status {status}"));
        match status.as_str() {
            "ERROR" => Some(ApiError::invalid_request(message)),
            "NOT_AUTHORIZED" => Some(ApiError::unauthorized(message)),
            _ => None,
        }
    }
}
