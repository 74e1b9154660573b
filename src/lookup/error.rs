use thiserror::Error;

/// A lookup that produced no usable result list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be built, sent, or its body read.
    #[error("Lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Lookup service returned status {status}")]
    Status { status: u16 },

    /// The body was not a list of `{ "word": ... }` entries.
    #[error("Malformed lookup response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}
