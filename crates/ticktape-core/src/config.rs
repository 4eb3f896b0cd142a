use std::fmt::{Debug, Formatter};

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const API_KEY_VAR: &str = "TICKTAPE_POLYGON_API_KEY";
const FALLBACK_API_KEY_VAR: &str = "POLYGON_API_KEY";
const BASE_URL_VAR: &str = "TICKTAPE_POLYGON_BASE_URL";
const TIMEOUT_VAR: &str = "TICKTAPE_HTTP_TIMEOUT_MS";

/// Connection settings for [`crate::PolygonClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout_ms: u64,
    user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("ticktape/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // A blank primary key does not shadow the fallback.
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let api_key = non_blank(API_KEY_VAR)
            .or_else(|| non_blank(FALLBACK_API_KEY_VAR))
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|value| !value.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config = config.with_timeout_ms(timeout_ms);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<HashMap<_, _>>();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn reads_key_and_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, " key-123 "),
            (BASE_URL_VAR, "http://localhost:8080/"),
            (TIMEOUT_VAR, "2500"),
        ]))
        .expect("valid config");

        assert_eq!(config.api_key(), "key-123");
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.timeout_ms(), 2500);
    }

    #[test]
    fn falls_back_to_plain_polygon_key() {
        let config = ClientConfig::from_lookup(lookup_from(&[(FALLBACK_API_KEY_VAR, "abc")]))
            .expect("valid config");
        assert_eq!(config.api_key(), "abc");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms(), DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "  "),
            (FALLBACK_API_KEY_VAR, ""),
        ]))
        .expect_err("both keys blank");
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn blank_primary_key_falls_through_to_fallback() {
        // Given: the ticktape variable is exported but empty
        let lookup = lookup_from(&[(API_KEY_VAR, ""), (FALLBACK_API_KEY_VAR, "real-key")]);

        // When: the config is read
        let config = ClientConfig::from_lookup(lookup).expect("fallback key is usable");

        // Then: the plain Polygon key is used
        assert_eq!(config.api_key(), "real-key");
    }

    #[test]
    fn rejects_zero_or_garbage_timeout() {
        for raw in ["0", "soon"] {
            let err =
                ClientConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "k"), (TIMEOUT_VAR, raw)]))
                    .expect_err("bad timeout");
            assert!(matches!(err, ConfigError::InvalidValue { name: TIMEOUT_VAR, .. }));
        }
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
