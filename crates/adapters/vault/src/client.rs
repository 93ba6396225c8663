//! Vault client implementation

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use rustify::endpoint::Endpoint;
use rustify_derive::Endpoint;
use tracing::{debug, info};
use url::Url;
use vault_config::VaultHelperConfig;
use vault_errors::{ClientError, SecretError, SecretResult};
use vault_ports::{LogicalClient, LogicalSecret, RawSecretData, VaultClient};
use vaultrs::api::EndpointResult;
use vaultrs::client::{Client, VaultClient as VaultRsClient, VaultClientSettingsBuilder};

use crate::error::map_rest_error;

/// Raw logical read: `GET /v1/{path}`, returning the whole response envelope
#[derive(Debug, Endpoint)]
#[endpoint(path = "{self.path}", response = "RawSecretData")]
struct ReadLogicalRequest {
    #[endpoint(skip)]
    path: String,
}

/// Vault client backed by `vaultrs`
pub struct HttpVaultClient {
    logical: HttpLogical,
    address: Url,
}

impl HttpVaultClient {
    /// Create a client for the server at `address`
    pub fn new(address: &str, request_timeout: Duration) -> SecretResult<Self> {
        // vaultrs panics on an unparsable address, so check it first
        let parsed = Url::parse(address)
            .map_err(|e| SecretError::configuration(format!("Invalid Vault address {:?}: {}", address, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(SecretError::configuration(format!(
                "Vault address {:?} cannot be used as a base URL",
                address
            )));
        }

        let settings = VaultClientSettingsBuilder::default()
            .address(address)
            .timeout(Some(request_timeout))
            .build()
            .map_err(|e| SecretError::configuration(format!("Failed to build Vault client settings: {}", e)))?;

        let client = VaultRsClient::new(settings)
            .map_err(|e| SecretError::configuration(format!("Failed to create Vault client: {}", e)))?;

        info!("Vault client configured for {}", address);

        Ok(Self {
            logical: HttpLogical { client },
            address: parsed,
        })
    }

    /// Create a client from loaded configuration; the token is not attached yet
    pub fn from_config(config: &VaultHelperConfig) -> SecretResult<Self> {
        Self::new(
            &config.address,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Server address requests are sent to
    pub fn address(&self) -> &Url {
        &self.address
    }
}

impl fmt::Debug for HttpVaultClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpVaultClient")
            .field("address", &self.address.as_str())
            .field("client", &"[VaultClient]")
            .finish()
    }
}

impl VaultClient for HttpVaultClient {
    fn set_token(&mut self, token: &str) {
        self.logical.client.set_token(token);
    }

    fn logical(&self) -> &dyn LogicalClient {
        &self.logical
    }
}

/// Logical reader bound to one server and token
pub struct HttpLogical {
    client: VaultRsClient,
}

#[async_trait]
impl LogicalClient for HttpLogical {
    async fn read(&self, path: &str) -> Result<Option<LogicalSecret>, ClientError> {
        let path = logical_path(path)?;
        debug!("Reading secret from path: {}", path);

        let endpoint = ReadLogicalRequest {
            path: path.to_string(),
        };

        let response = match endpoint
            .with_middleware(self.client.middle())
            .exec(self.client.http())
            .await
        {
            Ok(response) => response,
            Err(rustify::errors::ClientError::ServerResponseError { code: 404, .. }) => {
                debug!("No secret at path: {}", path);
                return Ok(None);
            }
            Err(e) => return Err(map_rest_error(e, &format!("Failed to read secret at path: {}", path))),
        };

        let envelope: EndpointResult<RawSecretData> = response
            .wrap()
            .map_err(|e| map_rest_error(e, &format!("Failed to decode secret at path: {}", path)))?;

        debug!("Successfully read secret from path: {}", path);
        Ok(Some(LogicalSecret {
            data: envelope.data,
            lease_duration: u64::from(envelope.lease_duration),
        }))
    }
}

/// Strip leading slashes and refuse paths that would leave the `/v1/` tree
fn logical_path(path: &str) -> Result<&str, ClientError> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::invalid_path(path));
    }
    if trimmed
        .split('/')
        .any(|segment| segment == "." || segment == "..")
    {
        return Err(ClientError::invalid_path(path));
    }
    Ok(trimmed)
}
