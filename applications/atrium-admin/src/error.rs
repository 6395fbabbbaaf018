/// Admin console error types
use atrium_core::ClassifiedError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdminError>;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed API call; displayed as the classified message alone
    #[error("{0}")]
    Api(#[from] ClassifiedError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdminError {
    /// Exit status for the process when this error ends a command.
    pub fn exit_code(&self) -> i32 {
        match self {
            AdminError::Config(_) | AdminError::Input(_) | AdminError::Json(_) => 2,
            AdminError::Api(_) => 1,
        }
    }
}

impl From<config::ConfigError> for AdminError {
    fn from(err: config::ConfigError) -> Self {
        AdminError::Config(err.to_string())
    }
}
