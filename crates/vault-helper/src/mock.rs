//! In-memory doubles for tests
//!
//! [`MockVaultClient`] stands in for the network client underneath a
//! [`Vault`](crate::Vault); [`MockVaultHelper`] replaces the whole store for
//! code that only depends on [`VaultHelper`].

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use vault_errors::{ClientError, SecretError, SecretResult};
use vault_ports::{LogicalClient, LogicalSecret, VaultClient};

use crate::helper::VaultHelper;
use crate::parse::KvSecret;
use crate::vault::find_secret;

/// Client double answering reads from canned responses
#[derive(Debug, Default)]
pub struct MockVaultClient {
    logical: MockLogical,
    tokens: Vec<String>,
}

impl MockVaultClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer reads of `path` with `secret`
    pub fn with_response(mut self, path: impl Into<String>, secret: LogicalSecret) -> Self {
        self.logical.responses.insert(path.into(), secret);
        self
    }

    /// Answer reads of any path without its own response
    pub fn with_default_response(mut self, secret: LogicalSecret) -> Self {
        self.logical.default_response = Some(secret);
        self
    }

    /// Fail every read with a transport error
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.logical.failure = Some(message.into());
        self
    }

    /// Tokens set so far, oldest first
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Paths read so far, oldest first
    pub fn reads(&self) -> Vec<String> {
        self.logical.reads()
    }
}

impl VaultClient for MockVaultClient {
    fn set_token(&mut self, token: &str) {
        self.tokens.push(token.to_string());
    }

    fn logical(&self) -> &dyn LogicalClient {
        &self.logical
    }
}

#[derive(Debug, Default)]
pub struct MockLogical {
    responses: HashMap<String, LogicalSecret>,
    default_response: Option<LogicalSecret>,
    failure: Option<String>,
    reads: Mutex<Vec<String>>,
}

impl MockLogical {
    fn reads(&self) -> Vec<String> {
        self.reads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl LogicalClient for MockLogical {
    async fn read(&self, path: &str) -> Result<Option<LogicalSecret>, ClientError> {
        self.reads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_string());

        if let Some(message) = &self.failure {
            return Err(ClientError::transport(message.clone()));
        }

        Ok(self
            .responses
            .get(path)
            .or(self.default_response.as_ref())
            .cloned())
    }
}

/// Store double with a fixed secret list
#[derive(Debug, Clone, Default)]
pub struct MockVaultHelper {
    pub kv_secrets: Vec<KvSecret>,
    pub lease: u64,
}

impl MockVaultHelper {
    pub fn new(kv_secrets: Vec<KvSecret>) -> Self {
        Self {
            kv_secrets,
            lease: 0,
        }
    }

    pub async fn get_remote_secrets(&mut self, path: &str) -> SecretResult<()> {
        check_path(path)
    }

    pub async fn get_local_secrets(&mut self, path: &str) -> SecretResult<()> {
        check_path(path)
    }
}

fn check_path(path: &str) -> SecretResult<()> {
    if path.is_empty() {
        return Err(SecretError::invalid_path(path));
    }
    Ok(())
}

#[async_trait]
impl VaultHelper for MockVaultHelper {
    async fn get_secrets(&mut self, path: &str) -> SecretResult<()> {
        check_path(path)
    }

    fn get_secret(&self, key: &str) -> SecretResult<&str> {
        find_secret(&self.kv_secrets, key)
    }

    fn secrets(&self) -> &[KvSecret] {
        &self.kv_secrets
    }

    fn lease_duration(&self) -> u64 {
        self.lease
    }
}
