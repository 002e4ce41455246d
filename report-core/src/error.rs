use thiserror::Error;

use crate::endpoint::Feature;

/// Error kinds surfaced by report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An essential field was absent (or unreadable) in a section's payload.
    #[error("missing field `{path}` in {section} payload")]
    MissingField { section: Feature, path: String },

    /// Network or HTTP-level failure. Not retried; terminal for the fetch.
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },

    /// Every requested section failed.
    #[error("every requested section failed")]
    ReportUnavailable,
}

impl ReportError {
    pub fn missing(section: Feature, path: impl Into<String>) -> Self {
        Self::MissingField { section, path: path.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }
}
