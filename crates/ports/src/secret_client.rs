//! Secret service client traits

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use vault_errors::ClientError;

/// Untyped secret payload as decoded from the wire or a file.
///
/// Leaves are expected to be strings, nested maps or null.
pub type RawSecretData = Map<String, Value>;

/// One logical read response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogicalSecret {
    /// Secret payload, absent when the engine returned nothing
    #[serde(default)]
    pub data: Option<RawSecretData>,

    /// Lease in seconds; 0 means the engine sent no lease
    #[serde(default)]
    pub lease_duration: u64,
}

impl LogicalSecret {
    pub fn new(data: RawSecretData) -> Self {
        Self {
            data: Some(data),
            lease_duration: 0,
        }
    }

    pub fn with_lease(mut self, lease_duration: u64) -> Self {
        self.lease_duration = lease_duration;
        self
    }
}

/// Raw reads against the secret engine
#[async_trait]
pub trait LogicalClient: Send + Sync {
    /// Read the secret at `path`. `Ok(None)` means nothing lives there.
    async fn read(&self, path: &str) -> Result<Option<LogicalSecret>, ClientError>;
}

/// Authenticated access to the secret engine
pub trait VaultClient: Send + Sync {
    /// Attach a token to subsequent reads
    fn set_token(&mut self, token: &str);

    /// Reader for logical paths
    fn logical(&self) -> &dyn LogicalClient;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_response_envelope() {
        let body = json!({
            "request_id": "b3f1",
            "lease_id": "",
            "renewable": false,
            "lease_duration": 2764800,
            "data": { "username": "app", "password": "hunter2" },
            "wrap_info": null,
            "warnings": null,
            "auth": null
        });

        let secret: LogicalSecret = serde_json::from_value(body).unwrap();
        assert_eq!(secret.lease_duration, 2764800);
        let data = secret.data.unwrap();
        assert_eq!(data["username"], "app");
    }

    #[test]
    fn test_decode_envelope_without_data() {
        let secret: LogicalSecret =
            serde_json::from_value(json!({ "data": null, "warnings": ["gone"] })).unwrap();
        assert!(secret.data.is_none());
        assert_eq!(secret.lease_duration, 0);
    }
}
