//! Agent subcommands.
use std::io::Write;
use tqc_core::api::{CliError, TaskClient};

use crate::commands::cli::{HeartbeatArgs, OutputFormat};
use crate::output;
use crate::utils::parse_json_object;

pub async fn handle_heartbeat<W: Write>(
    args: HeartbeatArgs,
    client: &TaskClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let agent_id = client.resolve_agent_id(args.agent.as_deref())?;
    let capabilities = args
        .capabilities
        .as_deref()
        .map(|raw| parse_json_object("--capabilities", raw))
        .transpose()?;

    let agent = client.heartbeat(Some(agent_id), capabilities).await?;

    match format {
        OutputFormat::Text => writeln!(out, "Heartbeat registered for {agent_id}")?,
        OutputFormat::Json => {
            if let Some(agent) = &agent {
                output::write_json(out, agent)?;
            }
        }
    }
    Ok(())
}

pub async fn handle_agents<W: Write>(
    client: &TaskClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let agents = client.list_agents().await?;

    match format {
        OutputFormat::Text => output::write_agent_list(out, &agents)?,
        OutputFormat::Json => output::write_json(out, &agents)?,
    }
    Ok(())
}
