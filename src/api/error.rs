//! Error taxonomy for recipe service operations.
//!
//! Every variant is terminal for the single operation that raised it;
//! nothing here triggers a retry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connectivity, TLS, timeout.
    #[error("network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response shape: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Detail lookup for an identifier the service does not know.
    #[error("recipe {id} not found")]
    NotFound { id: i64 },

    /// Login rejected; carries the server-supplied message.
    #[error("login rejected: {message}")]
    Auth { message: String },
}

impl ApiError {
    /// Short inline text for display next to the affected region.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => "Couldn't reach the recipe service".to_string(),
            ApiError::Decode { .. } => "The recipe service sent an unexpected response".to_string(),
            ApiError::NotFound { .. } => "That recipe doesn't exist".to_string(),
            ApiError::Auth { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        ApiError::Network { source }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(source: serde_json::Error) -> Self {
        ApiError::Decode { source }
    }
}
