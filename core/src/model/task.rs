use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// Returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

macro_rules! string_enum {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        field: $field,
                        value: s.to_string(),
                        expected: concat!($($text, " "),+).trim_end(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    #[default]
    General,
    Code,
    Email,
    Research,
    Browser,
    Review,
    Verify,
}

string_enum!(TaskKind, "kind", {
    General => "general",
    Code => "code",
    Email => "email",
    Research => "research",
    Browser => "browser",
    Review => "review",
    Verify => "verify",
});

/// Coarse capability class the service uses to route a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Light,
    #[default]
    Standard,
    Heavy,
}

string_enum!(ModelTier, "model tier", {
    Light => "light",
    Standard => "standard",
    Heavy => "heavy",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Queued,
    Claimed,
    Running,
    Done,
    Failed,
}

string_enum!(TaskStatus, "status", {
    Queued => "queued",
    Claimed => "claimed",
    Running => "running",
    Done => "done",
    Failed => "failed",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskResult {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.artifacts.is_none() && self.extra.is_empty()
    }
}

/// A task as reported by the coordination service.
///
/// The client never owns task state; every value is a view of the last
/// response. Fields the client does not model (timestamps, server
/// bookkeeping) are kept in `extra` so they survive re-serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: TaskKind,
    pub priority: i64,
    #[serde(default)]
    pub model_tier: ModelTier,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Agent currently holding the claim, ignoring blank values.
    pub fn claimed_by(&self) -> Option<&str> {
        self.claimed_by
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
