use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An agent registration as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Timestamp string exactly as the service formats it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Agent {
    pub fn host_or_unknown(&self) -> &str {
        self.host
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or("unknown")
    }
}
