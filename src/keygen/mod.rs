//! Key generation seam.
//!
//! All key-pair mathematics is delegated to an external primitive; this
//! module only defines the capability the provisioner programs against.
//! The trait keeps the provisioner testable with in-process doubles and
//! decouples it from the concrete openssl adapter.

pub mod openssl;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

pub use openssl::OpensslKeyGenerator;

/// Errors from the key generation primitive.
#[derive(Error, Debug)]
pub enum KeygenError {
    /// The external tool could not be invoked at all.
    #[error("`{tool}` not found; install OpenSSL or set the keygen.openssl_path config")]
    ToolUnavailable { tool: String },

    /// The tool ran and reported failure. `stderr` is the tool's own
    /// diagnostic output, passed through verbatim.
    #[error("key generation failed (exit {status}): {stderr}")]
    CommandFailed { status: i32, stderr: String },

    #[error("failed to invoke key generation tool: {0}")]
    Io(#[from] std::io::Error),
}

impl KeygenError {
    /// True when the failure was the tool being absent rather than a
    /// failed invocation.
    pub fn is_tool_unavailable(&self) -> bool {
        matches!(self, KeygenError::ToolUnavailable { .. })
    }
}

/// Capability to produce an RSA key pair on disk.
///
/// Both operations are synchronous from the caller's point of view: the
/// future resolves only once the file has been written (or the tool has
/// reported failure). No timeout is imposed.
#[async_trait]
pub trait KeyGenerator: Send + Sync {
    /// Generate an RSA private key (PKCS#8 PEM) at `path`.
    async fn generate_private_key(&self, path: &Path) -> Result<(), KeygenError>;

    /// Derive the public key (PEM) from the private key at `private_key`
    /// and write it to `path`.
    async fn derive_public_key(&self, private_key: &Path, path: &Path)
        -> Result<(), KeygenError>;
}
