//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `tqc_core::api` instead of reaching into internal modules.

pub use crate::client::{TaskClient, AGENT_ID_HEADER};
pub use crate::config::{
    load_default, load_from, ClientConfig, LoggingConfig, DEFAULT_LOG_LEVEL, ENV_AGENT_ID,
    ENV_API_URL,
};
pub use crate::error::{ApiHttpError, CliError, ClientError};
pub use crate::model::{
    Agent, CompletePayload, HeartbeatPayload, ModelTier, NewTask, ParseEnumError, StatusUpdate,
    Task, TaskFilter, TaskKind, TaskResult, TaskStatus,
};
pub use crate::model::payloads::{DEFAULT_LIST_LIMIT, DEFAULT_PRIORITY};
