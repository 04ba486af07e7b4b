use std::io::Write;
use tqc_core::api::{CliError, ClientConfig};

use crate::output;

pub fn handle_config<W: Write>(cfg: &ClientConfig, out: &mut W) -> Result<(), CliError> {
    output::write_json(out, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tqc_core::api::load_from;

    #[test]
    fn test_config_prints_resolved_values() {
        let cfg = load_from(|key| match key {
            "TASK_API_URL" => Some("http://api-host:8080".to_string()),
            _ => None,
        });
        let mut buf = Vec::new();
        handle_config(&cfg, &mut buf).unwrap();
        let printed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            printed,
            serde_json::json!({
                "api_url": "http://api-host:8080",
                "agent_id": "",
                "redis_url": "redis://localhost:6379/0"
            })
        );
    }
}
