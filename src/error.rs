//! Error types shared by the API client, configuration and pages

use thiserror::Error;

/// Everything that can go wrong between the storefront and the catalog API
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Connection refused, DNS failure, timeout
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body was not the JSON we expected
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The envelope came back without a success marker
    #[error("request rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// A required form field is empty
    #[error("missing required field: {0}")]
    Validation(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

impl StorefrontError {
    /// Message worth showing next to a failed action, if the server gave one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            StorefrontError::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
