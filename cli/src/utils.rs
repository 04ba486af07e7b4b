use serde_json::{Map, Value};
use tqc_core::api::ClientError;

/// Parse a JSON flag value.
pub fn parse_json_value(flag: &'static str, raw: &str) -> Result<Value, ClientError> {
    serde_json::from_str(raw).map_err(|source| ClientError::InvalidJson { flag, source })
}

/// Parse a JSON flag value that must be an object.
pub fn parse_json_object(flag: &'static str, raw: &str) -> Result<Map<String, Value>, ClientError> {
    match parse_json_value(flag, raw)? {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::Validation(format!(
            "{flag} must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
