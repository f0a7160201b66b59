//! stormstack-keys: JWT signing-key provisioning CLI (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod keygen;
pub mod locate;
pub mod output;
pub mod provision;
pub mod verify;
