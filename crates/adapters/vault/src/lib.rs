//! adapter-vault - HashiCorp Vault adapter
//!
//! Implements the secret client ports on top of `vaultrs`:
//! - Token authentication via the client's token
//! - Logical reads returning the payload and lease duration
//! - Paths with `.` or `..` segments are refused before any request
//! - Automatic error mapping to ClientError

pub mod client;
pub mod error;

pub use client::{HttpLogical, HttpVaultClient};
