//! Text rendering for command results.
use serde::Serialize;
use std::io::{self, Write};
use tqc_core::api::{Agent, CliError, ClientError, Task};

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)?;
    writeln!(out, "{text}")?;
    Ok(())
}

pub fn write_task_list<W: Write>(out: &mut W, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No tasks found.");
    }

    writeln!(out, "Found {} task(s):\n", tasks.len())?;
    for task in tasks {
        writeln!(out, "#{} [{}] {}", task.id, task.status, task.title)?;
        writeln!(
            out,
            "  Kind: {} | Priority: {} | Tier: {}",
            task.kind, task.priority, task.model_tier
        )?;
        if let Some(agent) = task.claimed_by() {
            writeln!(out, "  Claimed by: {agent}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_agent_list<W: Write>(out: &mut W, agents: &[Agent]) -> io::Result<()> {
    if agents.is_empty() {
        return writeln!(out, "No agents registered.");
    }

    writeln!(out, "Registered agents ({}):\n", agents.len())?;
    for agent in agents {
        writeln!(out, "{}", agent.id)?;
        writeln!(out, "  Host: {}", agent.host_or_unknown())?;
        if let Some(ts) = agent.last_heartbeat.as_deref().filter(|s| !s.is_empty()) {
            writeln!(out, "  Last heartbeat: {ts}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print `err` the way the process reports failures on stderr.
pub fn write_error<W: Write>(out: &mut W, err: &CliError) -> io::Result<()> {
    match err {
        CliError::Client(ClientError::Config(msg)) => {
            writeln!(out, "Error: Failed to initialize client: {msg}")?;
            writeln!(out, "\nMake sure TASK_API_URL is set:")?;
            writeln!(out, "  export TASK_API_URL=http://api-host:8080")
        }
        other => writeln!(out, "Error: {other}"),
    }
}
