mod load;
mod types;

pub use load::{
    load_default, load_from, ENV_AGENT_ID, ENV_API_URL, ENV_LOG, ENV_LOG_DIR, ENV_REDIS_URL,
};
pub use types::{ClientConfig, LoggingConfig, DEFAULT_LOG_LEVEL, DEFAULT_REDIS_URL};
