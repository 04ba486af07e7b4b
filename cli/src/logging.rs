use std::path::{Path, PathBuf};
use tqc_core::api::{LoggingConfig, DEFAULT_LOG_LEVEL};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

/// First directive set that parses: `RUST_LOG`, then the configured level,
/// then `warn`. A bad filter never stops a command from running.
pub fn build_filter(level: &str, rust_log: Option<&str>) -> EnvFilter {
    [rust_log.unwrap_or_default(), level]
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .find_map(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

pub fn prepare_log_dir(dir: &Path) -> Result<PathBuf, String> {
    std::fs::create_dir_all(dir).map_err(|e| format!("create log dir failed: {e}"))?;
    Ok(dir.to_path_buf())
}

pub fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(&logging.level, rust_log.as_deref());

    let mut maybe_writer = None;

    if let Some(dir) = logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let dir = prepare_log_dir(Path::new(dir))?;
        let file_name = format!("tqc.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| e.to_string())
}
