use clap::{Args as ClapArgs, Parser, Subcommand};
use tqc_core::api::{ModelTier, TaskKind, TaskStatus, DEFAULT_LIST_LIMIT, DEFAULT_PRIORITY};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary followed by the response body
    #[default]
    Text,
    /// Response body only, as pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "tqc",
    version,
    about = "Task Queue Client - shared task coordination for agents"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// API base URL (overrides TASK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Agent identifier (overrides AGENT_ID)
    #[arg(long, global = true)]
    pub agent_id: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AddArgs {
    /// Task title
    pub title: String,

    /// Task description
    #[arg(long = "desc", visible_alias = "description")]
    pub desc: Option<String>,

    #[arg(long, value_enum, default_value_t = TaskKind::General)]
    pub kind: TaskKind,

    /// Priority (0=critical, 50=normal, 100=low)
    #[arg(long, default_value_t = DEFAULT_PRIORITY)]
    pub priority: i64,

    /// Model tier
    #[arg(long, value_enum, default_value_t = ModelTier::Standard)]
    pub tier: ModelTier,

    /// Additional metadata (JSON object)
    #[arg(long)]
    pub metadata: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, value_enum)]
    pub status: Option<TaskStatus>,

    /// Filter by claiming agent
    #[arg(long)]
    pub agent: Option<String>,

    #[arg(long, value_enum)]
    pub kind: Option<TaskKind>,

    /// Max results
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: u32,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TaskIdArgs {
    pub task_id: u64,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct UpdateArgs {
    pub task_id: u64,

    #[arg(long, value_enum)]
    pub status: TaskStatus,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CompleteArgs {
    pub task_id: u64,

    /// Result description or output
    #[arg(long)]
    pub result: Option<String>,

    /// Artifacts (JSON)
    #[arg(long)]
    pub artifacts: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct HeartbeatArgs {
    /// Agent ID (defaults to AGENT_ID)
    #[arg(long)]
    pub agent: Option<String>,

    /// Agent capabilities (JSON object)
    #[arg(long)]
    pub capabilities: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Get task details
    Get(TaskIdArgs),
    /// Claim a task
    Claim(TaskIdArgs),
    /// Update task status
    Update(UpdateArgs),
    /// Mark task as complete
    Complete(CompleteArgs),
    /// Cancel a task
    Cancel(TaskIdArgs),
    /// Register agent heartbeat
    Heartbeat(HeartbeatArgs),
    /// List registered agents
    Agents,
    /// Show current configuration
    Config,
}
