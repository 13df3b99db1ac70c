//! Error type shared by the portal crates

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Access restricted to company accounts only. Your email: {email}")]
    AccessDenied { email: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for PortalError {
    fn from(e: serde_json::Error) -> Self {
        PortalError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
