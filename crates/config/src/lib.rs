//! vault-config - configuration loading for the secret helper
//!
//! Values come from an optional TOML file, then from `VAULT_`-prefixed
//! environment variables. The standard `VAULT_ADDR` is honoured as well.

mod details;

pub use details::{Details, DEFAULT_CRED_PATH, DEFAULT_DETAILS_PATH};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// Secret helper configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VaultHelperConfig {
    /// Vault server address
    #[serde(default = "default_address")]
    pub address: String,

    /// Token attached to every remote read
    #[serde(default = "default_token")]
    pub token: Secret<String>,

    /// Path holding credentials
    #[serde(default = "default_cred_path")]
    pub cred_path: String,

    /// Path holding service details
    #[serde(default = "default_details_path")]
    pub details_path: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_address() -> String {
    "http://localhost:8200".to_string()
}

fn default_token() -> Secret<String> {
    Secret::new(String::new())
}

fn default_cred_path() -> String {
    DEFAULT_CRED_PATH.to_string()
}

fn default_details_path() -> String {
    DEFAULT_DETAILS_PATH.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for VaultHelperConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            token: default_token(),
            cred_path: default_cred_path(),
            details_path: default_details_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl VaultHelperConfig {
    /// Load from an optional TOML file and the environment
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        let config: Self = figment
            .merge(Env::raw().only(&["VAULT_ADDR"]).map(|_| "address".into()))
            .merge(Env::prefixed("VAULT_"))
            .extract()?;

        Ok(config)
    }

    /// Credential and detail paths with no expiry recorded yet
    pub fn details(&self) -> Details {
        Details::new(self.cred_path.clone(), self.details_path.clone())
    }
}

/// Builder for VaultHelperConfig
#[derive(Debug)]
pub struct VaultHelperConfigBuilder {
    config: VaultHelperConfig,
}

impl VaultHelperConfigBuilder {
    /// Create a new builder with address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            config: VaultHelperConfig {
                address: address.into(),
                ..Default::default()
            },
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Secret::new(token.into());
        self
    }

    pub fn with_cred_path(mut self, path: impl Into<String>) -> Self {
        self.config.cred_path = path.into();
        self
    }

    pub fn with_details_path(mut self, path: impl Into<String>) -> Self {
        self.config.details_path = path.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.request_timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> VaultHelperConfig {
        self.config
    }
}
