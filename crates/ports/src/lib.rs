//! ports - capability traits the helper depends on for remote reads
//!
//! The helper only ever talks to the secret service through these traits,
//! so a test double can stand in for the network client.

mod secret_client;

pub use secret_client::*;
