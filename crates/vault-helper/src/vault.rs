//! Secret store backed by Vault or a local file

use std::time::Duration;

use adapter_vault::HttpVaultClient;
use secrecy::{ExposeSecret, Secret};
use tracing::{debug, info};
use vault_config::VaultHelperConfig;
use vault_errors::{ClientError, SecretError, SecretResult};
use vault_ports::{LogicalSecret, VaultClient};

use crate::local::read_local_file;
use crate::parse::{parse_data, KvSecret, LOCAL_FILTER, REMOTE_FILTER};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Holds the secrets of the last successful fetch.
///
/// Every fetch replaces the whole collection; a failed fetch leaves the
/// previous one in place. Fetching takes `&mut self`, so callers sharing one
/// store across tasks must wrap it in a mutex themselves.
#[derive(Debug)]
pub struct Vault<C = HttpVaultClient> {
    client: C,
    address: String,
    token: Secret<String>,
    lease: u64,
    kv_secrets: Vec<KvSecret>,
}

impl Vault<HttpVaultClient> {
    /// Create a store talking to the Vault server at `address`
    pub fn new(address: &str, token: &str) -> SecretResult<Self> {
        let client = HttpVaultClient::new(address, DEFAULT_REQUEST_TIMEOUT)?;
        Ok(Self::with_client(client, address, token))
    }

    pub fn from_config(config: &VaultHelperConfig) -> SecretResult<Self> {
        let client = HttpVaultClient::from_config(config)?;
        Ok(Self::with_client(
            client,
            &config.address,
            config.token.expose_secret(),
        ))
    }
}

impl<C: VaultClient> Vault<C> {
    /// Create a store over any client implementation
    pub fn with_client(client: C, address: &str, token: &str) -> Self {
        Self {
            client,
            address: address.to_string(),
            token: Secret::new(token.to_string()),
            lease: 0,
            kv_secrets: Vec::new(),
        }
    }

    /// Fetch from a local file when `path` starts with `.` or `/`,
    /// otherwise from Vault
    pub async fn get_secrets(&mut self, path: &str) -> SecretResult<()> {
        if path.is_empty() {
            return Err(SecretError::invalid_path(path));
        }

        if is_local_path(path) {
            self.get_local_secrets(path).await
        } else {
            self.get_remote_secrets(path).await
        }
    }

    /// Fetch secrets from a JSON file or text dump on disk
    pub async fn get_local_secrets(&mut self, path: &str) -> SecretResult<()> {
        if path.is_empty() {
            return Err(SecretError::invalid_path(path));
        }

        let data = read_local_file(path).await?;
        let secrets = parse_data(&data, LOCAL_FILTER)?;

        info!("Loaded {} local secrets from {}", secrets.len(), path);
        self.kv_secrets = secrets;
        Ok(())
    }

    /// Fetch secrets from Vault, stripping the `data` wrapper
    pub async fn get_remote_secrets(&mut self, path: &str) -> SecretResult<()> {
        if path.is_empty() {
            return Err(SecretError::invalid_path(path));
        }

        self.client.set_token(self.token.expose_secret());
        debug!("Reading remote secrets from {} at {}", path, self.address);

        let response = self
            .client
            .logical()
            .read(path)
            .await
            .map_err(|e| match e {
                ClientError::InvalidPath(_) => SecretError::invalid_path(path),
                e => SecretError::source_unavailable(path, e),
            })?;

        let Some(LogicalSecret {
            data: Some(data),
            lease_duration,
        }) = response
        else {
            return Err(SecretError::no_data_returned(path));
        };

        let secrets = parse_data(&data, REMOTE_FILTER)?;

        // A zero lease means none was sent; keep whatever we had
        if lease_duration != 0 {
            self.lease = lease_duration;
        }

        info!(
            "Loaded {} remote secrets from {} (lease {}s)",
            secrets.len(),
            path,
            self.lease
        );
        self.kv_secrets = secrets;
        Ok(())
    }

    /// Value of the first secret named `key`
    pub fn get_secret(&self, key: &str) -> SecretResult<&str> {
        find_secret(&self.kv_secrets, key)
    }

    pub fn secrets(&self) -> &[KvSecret] {
        &self.kv_secrets
    }

    /// Lease of the last remote fetch that reported one, in seconds
    pub fn lease_duration(&self) -> u64 {
        self.lease
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

pub(crate) fn is_local_path(path: &str) -> bool {
    path.starts_with('.') || path.starts_with('/')
}

pub(crate) fn find_secret<'a>(secrets: &'a [KvSecret], key: &str) -> SecretResult<&'a str> {
    secrets
        .iter()
        .find(|s| s.key == key)
        .map(|s| s.value.as_str())
        .ok_or_else(|| SecretError::key_not_found(key))
}
