pub mod agent;
pub mod cli;
pub mod config;
pub mod task;

use std::io::Write;
use tqc_core::api::{CliError, ClientConfig, TaskClient};

use cli::{Commands, OutputFormat};

/// Run one subcommand, writing its output to `out`.
///
/// `config` is answered from the resolved configuration; every other
/// command builds a client first, so a missing API URL fails before any
/// request is sent.
#[tracing::instrument(name = "cli.dispatch", skip_all)]
pub async fn dispatch<W: Write>(
    cmd: Commands,
    format: OutputFormat,
    cfg: ClientConfig,
    out: &mut W,
) -> Result<(), CliError> {
    match cmd {
        Commands::Config => config::handle_config(&cfg, out),
        Commands::Add(args) => task::handle_add(args, &connect(&cfg)?, format, out).await,
        Commands::List(args) => task::handle_list(args, &connect(&cfg)?, format, out).await,
        Commands::Get(args) => task::handle_get(args, &connect(&cfg)?, out).await,
        Commands::Claim(args) => task::handle_claim(args, &connect(&cfg)?, format, out).await,
        Commands::Update(args) => task::handle_update(args, &connect(&cfg)?, format, out).await,
        Commands::Complete(args) => {
            task::handle_complete(args, &connect(&cfg)?, format, out).await
        }
        Commands::Cancel(args) => task::handle_cancel(args, &connect(&cfg)?, format, out).await,
        Commands::Heartbeat(args) => {
            agent::handle_heartbeat(args, &connect(&cfg)?, format, out).await
        }
        Commands::Agents => agent::handle_agents(&connect(&cfg)?, format, out).await,
    }
}

fn connect(cfg: &ClientConfig) -> Result<TaskClient, CliError> {
    let client = TaskClient::new(cfg)?;
    tracing::debug!(base_url = %client.base_url(), agent_id = ?client.agent_id(), "client ready");
    Ok(client)
}
