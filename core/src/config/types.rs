use serde::{Deserialize, Serialize};

pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings resolved once at process start.
///
/// Empty strings stand for "not configured"; the loader never fails and
/// validation is left to whoever needs a given field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
    pub agent_id: String,
    /// Loaded for the external worker tooling; nothing in this client reads it.
    pub redis_url: String,

    #[serde(skip)]
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            agent_id: String::new(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn api_url(&self) -> Option<&str> {
        non_blank(&self.api_url)
    }

    pub fn agent_id(&self) -> Option<&str> {
        non_blank(&self.agent_id)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, agent_id: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(id) = agent_id.filter(|v| !v.trim().is_empty()) {
            self.agent_id = id;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter string, e.g. "warn" or "tqc_core=debug".
    pub level: String,

    /// If set, also log to a file in this directory.
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            directory: None,
        }
    }
}

fn non_blank(v: &str) -> Option<&str> {
    let trimmed = v.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
