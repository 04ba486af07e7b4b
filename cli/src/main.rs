use clap::{CommandFactory, Parser};
use tqc::commands::{self, cli};
use tqc::{logging, output};
use tqc_core::api as core_api;

const EXIT_FAILURE: i32 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(EXIT_FAILURE);
        }
        // --help / --version
        Err(e) => e.exit(),
    };

    let exit = match real_main(args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = output::write_error(&mut std::io::stderr().lock(), &e);
            EXIT_FAILURE
        }
    };

    std::process::exit(exit);
}

async fn real_main(args: cli::Args) -> Result<i32, core_api::CliError> {
    let cfg = core_api::load_default().with_overrides(args.api_url, args.agent_id);
    logging::init_tracing(&cfg.logging).map_err(core_api::CliError::Logging)?;

    let Some(cmd) = args.command else {
        cli::Args::command().print_help()?;
        return Ok(EXIT_FAILURE);
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(cmd, args.format, cfg, &mut out).await?;
    Ok(0)
}
