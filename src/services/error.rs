//! Error types for the generation service clients.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the tag and description services.
///
/// None of these are retried; the caller surfaces them as a notice and the
/// user can repeat the action.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the service.
    #[error("{service} service returned {status}: {message}")]
    Api {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Failed to parse {service} response: {source}")]
    Parse {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Success status but the body had no description.
    #[error("No description was generated")]
    EmptyDescription,

    #[error("Failed to read image '{path}': {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ServiceError {
    /// Text shown to the user in an error notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
