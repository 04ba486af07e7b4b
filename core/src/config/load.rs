use super::types::ClientConfig;

pub const ENV_API_URL: &str = "TASK_API_URL";
pub const ENV_AGENT_ID: &str = "AGENT_ID";
pub const ENV_REDIS_URL: &str = "REDIS_URL";
pub const ENV_LOG: &str = "TQC_LOG";
pub const ENV_LOG_DIR: &str = "TQC_LOG_DIR";

pub fn load_default() -> ClientConfig {
    load_from(|key| std::env::var(key).ok())
}

/// Resolve the configuration through `lookup`, falling back to defaults
/// for unset or blank variables.
pub fn load_from<F>(lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let mut cfg = ClientConfig::default();

    if let Some(v) = var(ENV_API_URL) {
        cfg.api_url = v;
    }
    if let Some(v) = var(ENV_AGENT_ID) {
        cfg.agent_id = v;
    }
    if let Some(v) = var(ENV_REDIS_URL) {
        cfg.redis_url = v;
    }
    if let Some(v) = var(ENV_LOG) {
        cfg.logging.level = v;
    }
    cfg.logging.directory = var(ENV_LOG_DIR);

    cfg
}
