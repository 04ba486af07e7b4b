pub mod agent;
pub mod payloads;
pub mod task;

pub use agent::Agent;
pub use payloads::{CompletePayload, HeartbeatPayload, NewTask, StatusUpdate, TaskFilter};
pub use task::{ModelTier, ParseEnumError, Task, TaskKind, TaskResult, TaskStatus};
