use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Input validation errors for symbols, request parameters, and dates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error(
        "invalid timespan '{value}', expected one of second, minute, hour, day, week, month, quarter, year"
    )]
    InvalidTimespan { value: String },
    #[error("invalid sort order '{value}', expected asc or desc")]
    InvalidSortOrder { value: String },
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("multiplier must be at least 1")]
    ZeroMultiplier,
    #[error("date range start {from} is after end {to}")]
    InvertedRange { from: String, to: String },
    #[error("limit {value} is outside the allowed range 1..={max}")]
    LimitOutOfRange { value: u32, max: u32 },
    #[error("search query must not be empty")]
    EmptySearch,
}

/// Errors raised while parsing or assembling an option ticker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TickerError {
    #[error("malformed option symbol '{input}': {reason}")]
    Format { input: String, reason: &'static str },

    #[error("option ticker builder is missing {}", .missing.join(", "))]
    IncompleteBuilder { missing: Vec<&'static str> },

    #[error("invalid option ticker field '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl TickerError {
    pub(crate) fn format(input: &str, reason: &'static str) -> Self {
        Self::Format {
            input: input.to_owned(),
            reason,
        }
    }
}

/// Errors raised while assembling a [`crate::ClientConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing API key: set TICKTAPE_POLYGON_API_KEY or POLYGON_API_KEY")]
    MissingApiKey,
    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// Classification of failed API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidRequest,
    Unauthorized,
    NotFound,
    RateLimited,
    Unavailable,
    Decode,
    Internal,
}

/// Structured error returned by every service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
    retryable: bool,
}

impl ApiError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidRequest, message, false)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, message, false)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message, false)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::RateLimited, message, true)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unavailable, message, true)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, message, false)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Internal, message, false)
    }

    /// Classify a non-2xx HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let error = match status {
            400 | 422 => Self::invalid_request(message),
            401 | 403 => Self::unauthorized(message),
            404 => Self::not_found(message),
            429 => Self::rate_limited(message),
            500..=599 => Self::unavailable(message),
            _ => Self::internal(message),
        };
        error.with_status(status)
    }

    fn new(kind: ApiErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            retryable,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::InvalidRequest => "invalid_request",
            ApiErrorKind::Unauthorized => "unauthorized",
            ApiErrorKind::NotFound => "not_found",
            ApiErrorKind::RateLimited => "rate_limited",
            ApiErrorKind::Unavailable => "unavailable",
            ApiErrorKind::Decode => "decode_error",
            ApiErrorKind::Internal => "internal_error",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (HTTP {status}): {}", self.code(), self.message),
            None => write!(f, "{}: {}", self.code(), self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        Self::invalid_request(value.to_string())
    }
}

impl From<TickerError> for ApiError {
    fn from(value: TickerError) -> Self {
        Self::invalid_request(value.to_string())
    }
}
