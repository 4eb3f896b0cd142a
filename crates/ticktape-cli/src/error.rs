use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ticktape_core::ValidationError),

    #[error(transparent)]
    Ticker(#[from] ticktape_core::TickerError),

    #[error(transparent)]
    Api(#[from] ticktape_core::ApiError),

    #[error(transparent)]
    Config(#[from] ticktape_core::ConfigError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Ticker(_) => 2,
            Self::Api(_) => 3,
            Self::Config(_) => 4,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
