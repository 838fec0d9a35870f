use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelixError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HelixError {
    /// Short, stable error code for logs and API bodies.
    pub fn code(&self) -> &'static str {
        match self {
            HelixError::Config(_) => "CONFIG_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, HelixError>;
