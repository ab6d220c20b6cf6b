use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// `error` field of the body when present, otherwise the raw body.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

impl BlogClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::Server { status, .. } => Some(*status),
        }
    }
}
