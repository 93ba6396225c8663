//! Local secret files
//!
//! Two formats are understood, chosen by extension:
//! - `*.json`: a JSON object of strings and nested objects
//! - anything else: a legacy text dump of a Go-style map, one `key: value`
//!   per line, where a value may be `map[k1:v1 k2:v2]`
//!
//! The text dump grammar is best-effort. Values containing `": "`, or
//! spaces inside `map[...]`, do not survive it; that is kept as-is so
//! existing dump files keep parsing the same way.

use serde_json::{Map, Value};
use tracing::{debug, trace};
use vault_errors::{SecretError, SecretResult};
use vault_ports::RawSecretData;

const MAP_PREFIX: &str = "map[";
const MAP_SUFFIX: &str = "]";

/// Read and decode the secret file at `path`
pub async fn read_local_file(path: &str) -> SecretResult<RawSecretData> {
    debug!("Reading local secrets from: {}", path);

    let content = tokio::fs::read(path)
        .await
        .map_err(|e| SecretError::source_unavailable(path, e))?;

    decode_local(path, &content)
}

/// Decode file content according to the format implied by `path`.
///
/// Content that is not valid UTF-8 is malformed input, not an I/O failure.
pub fn decode_local(path: &str, content: &[u8]) -> SecretResult<RawSecretData> {
    if path.ends_with(".json") {
        serde_json::from_slice(content).map_err(|e| SecretError::malformed_input(path, e))
    } else {
        let text =
            std::str::from_utf8(content).map_err(|e| SecretError::malformed_input(path, e))?;
        Ok(parse_text_dump(text))
    }
}

/// Parse the legacy `key: value` text dump.
///
/// Lines without a `": "` separator are skipped. A later line with the same
/// key replaces an earlier one.
pub fn parse_text_dump(content: &str) -> RawSecretData {
    let mut data = Map::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            trace!("Skipping unrecognised line in text dump");
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = value.trim();
        let parsed = match value
            .strip_prefix(MAP_PREFIX)
            .and_then(|inner| inner.strip_suffix(MAP_SUFFIX))
        {
            Some(inner) => Value::Object(parse_map_literal(inner)),
            None => Value::String(value.to_string()),
        };

        data.insert(key.to_string(), parsed);
    }

    data
}

/// `k1:v1 k2:v2` → `{k1: v1, k2: v2}`
fn parse_map_literal(inner: &str) -> RawSecretData {
    inner
        .split(' ')
        .filter_map(|token| token.split_once(':'))
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}
