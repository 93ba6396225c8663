//! vault-helper - key/value secrets from Vault or local files
//!
//! A [`Vault`] fetches secrets from one of two sources, chosen by path:
//! - paths starting with `.` or `/` are local files (JSON or a legacy
//!   `key: value` text dump)
//! - anything else is read from the Vault server through the
//!   [`VaultClient`](vault_ports::VaultClient) port
//!
//! Either way the nested payload is flattened into a list of [`KvSecret`]s
//! which replaces whatever the store held before.
//!
//! ```no_run
//! # async fn run() -> vault_helper::SecretResult<()> {
//! use vault_helper::Vault;
//!
//! let mut vault = Vault::new("http://127.0.0.1:8200", "s.token")?;
//! vault.get_secrets("secret/data/app").await?;
//! let password = vault.get_secret("password")?;
//! # let _ = password;
//! # Ok(())
//! # }
//! ```

pub mod helper;
pub mod local;
pub mod mock;
pub mod parse;
pub mod vault;

pub use helper::VaultHelper;
pub use local::parse_text_dump;
pub use parse::{parse_data, KvSecret};
pub use vault::Vault;
pub use vault_errors::{SecretError, SecretResult};
