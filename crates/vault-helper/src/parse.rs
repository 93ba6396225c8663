//! Secret flattening

use serde_json::Value;
use vault_errors::{SecretError, SecretResult};
use vault_ports::RawSecretData;

/// Wrapper key stripped from secret engine responses
pub const REMOTE_FILTER: &str = "data";

/// Local files carry no wrapper key
pub const LOCAL_FILTER: &str = "";

/// A single flattened key/value secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvSecret {
    pub key: String,
    pub value: String,
}

impl KvSecret {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Flatten a nested secret payload into leaf key/value pairs.
///
/// Keys are visited in ascending order and nested maps depth-first, so the
/// output order is stable. Null leaves and string leaves equal to
/// `filter_name` are dropped. The names of nested maps are discarded; only
/// leaf keys survive. Any leaf that is not a string, map or null is an
/// [`SecretError::UnsupportedValueType`].
pub fn parse_data(data: &RawSecretData, filter_name: &str) -> SecretResult<Vec<KvSecret>> {
    let mut secrets = Vec::new();
    collect(data, filter_name, &mut secrets)?;
    Ok(secrets)
}

fn collect(data: &RawSecretData, filter_name: &str, secrets: &mut Vec<KvSecret>) -> SecretResult<()> {
    // Map iteration order depends on serde_json features; sort explicitly
    let mut entries: Vec<_> = data.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (key, value) in entries {
        match value {
            Value::Null => continue,
            Value::String(s) if s == filter_name => continue,
            Value::String(s) => secrets.push(KvSecret::new(key.as_str(), s.as_str())),
            Value::Object(nested) => collect(nested, filter_name, secrets)?,
            other => {
                return Err(SecretError::unsupported_value_type(key.as_str(), type_name(other)));
            }
        }
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
