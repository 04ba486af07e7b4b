use thiserror::Error;

const BODY_PREVIEW_LIMIT: usize = 512;

/// A failed round trip to the task service.
#[derive(Error, Debug)]
pub enum ApiHttpError {
    /// The request never produced a response: connection refused, DNS, TLS,
    /// or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-2xx status. `body` is a preview.
    #[error("{method} {url} returned status {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },
    /// A 2xx response whose body is not the expected JSON.
    #[error("{operation}: could not decode response from {url}: {source} (body: {body})")]
    Decode {
        operation: &'static str,
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiHttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }

    /// True when the service could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_connect())
    }
}

/// Trimmed body text, cut to a fixed number of characters for error messages.
pub(crate) fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }
    match trimmed.char_indices().nth(BODY_PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
