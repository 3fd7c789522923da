use thiserror::Error;

/// Everything that can go wrong while probing a single case.
///
/// Non-2xx responses are not errors: the service's own payload is printed.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request failed: {0}")]
    Transport(reqwest::Error),

    #[error("Failed to read response: {0}")]
    ReadBody(reqwest::Error),

    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        source: serde_json::Error,
    },

    #[error("Missing field `{0}` in response body")]
    MissingField(&'static str),
}
