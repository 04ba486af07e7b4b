use thiserror::Error;

use super::http::ApiHttpError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error("invalid JSON for {flag}: {source}")]
    InvalidJson {
        flag: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Http(#[from] ApiHttpError),
    #[error("{operation}: service returned an empty body")]
    EmptyResponse { operation: &'static str },
}

impl ClientError {
    /// True for failures detected before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Validation(_) | Self::InvalidJson { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_names_flag() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ClientError::InvalidJson {
            flag: "--metadata",
            source,
        };
        assert!(err.is_local());
        assert!(err.to_string().starts_with("invalid JSON for --metadata:"));
    }

    #[test]
    fn test_cli_error_is_transparent_over_client_error() {
        let err = CliError::from(ClientError::Validation("No agent ID specified".into()));
        assert_eq!(err.to_string(), "No agent ID specified");
    }

    #[test]
    fn test_empty_response_is_remote() {
        let err = ClientError::EmptyResponse {
            operation: "add_task",
        };
        assert!(!err.is_local());
        assert_eq!(err.to_string(), "add_task: service returned an empty body");
    }
}
