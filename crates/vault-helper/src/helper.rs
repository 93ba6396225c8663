//! Caller-facing secret store trait

use async_trait::async_trait;
use vault_errors::SecretResult;
use vault_ports::VaultClient;

use crate::parse::KvSecret;
use crate::vault::Vault;

/// What application code needs from a secret store
#[async_trait]
pub trait VaultHelper: Send + Sync {
    /// Replace the held secrets with those found at `path`
    async fn get_secrets(&mut self, path: &str) -> SecretResult<()>;

    /// Value of the first secret named `key`
    fn get_secret(&self, key: &str) -> SecretResult<&str>;

    fn secrets(&self) -> &[KvSecret];

    fn lease_duration(&self) -> u64;
}

#[async_trait]
impl<C: VaultClient> VaultHelper for Vault<C> {
    async fn get_secrets(&mut self, path: &str) -> SecretResult<()> {
        Vault::get_secrets(self, path).await
    }

    fn get_secret(&self, key: &str) -> SecretResult<&str> {
        Vault::get_secret(self, key)
    }

    fn secrets(&self) -> &[KvSecret] {
        Vault::secrets(self)
    }

    fn lease_duration(&self) -> u64 {
        Vault::lease_duration(self)
    }
}
