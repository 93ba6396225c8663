//! Basic usage example for vault-helper
//!
//! Run with:
//! ```bash
//! export VAULT_ADDR=http://127.0.0.1:8200
//! export VAULT_TOKEN=your-token
//! cargo run -p vault-helper --example basic_usage -- [path] [key]
//! ```
//!
//! `path` defaults to the configured credentials path; pass `./creds.json`
//! or another local file to read from disk instead.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vault_config::VaultHelperConfig;
use vault_helper::Vault;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = VaultHelperConfig::load(std::env::var("VAULT_CONFIG_FILE").ok().as_deref())?;
    let details = config.details();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| details.cred_path.clone());
    let key = args.next();

    println!("Vault address: {}", config.address);
    println!("Fetching secrets from: {}", path);

    let mut vault = Vault::from_config(&config)?;
    vault.get_secrets(&path).await?;

    println!("Fetched {} secrets", vault.secrets().len());
    for secret in vault.secrets() {
        println!("  {}", secret.key);
    }

    let details = details.with_lease(vault.lease_duration());
    if let Some(expire_time) = details.expire_time {
        println!("Lease expires at {}", expire_time);
    }

    if let Some(key) = key {
        match vault.get_secret(&key) {
            Ok(_) => println!("Key '{}' is present", key),
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}
