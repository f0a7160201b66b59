//! OpenSSL CLI adapter for the [`KeyGenerator`] capability.
//!
//! Shells out via `tokio::process::Command`:
//! - `openssl genpkey -algorithm RSA -pkeyopt rsa_keygen_bits:2048 -out <path>`
//!   writes the private key in PKCS#8 PEM, the encoding the token
//!   services load.
//! - `openssl rsa -in <private> -pubout -out <path>` derives the
//!   matching public key in PEM.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use super::{KeyGenerator, KeygenError};
use crate::config::Config;
use crate::constants::{OPENSSL_BINARY, RSA_KEY_BITS};

/// [`KeyGenerator`] backed by the openssl binary.
pub struct OpensslKeyGenerator {
    binary: PathBuf,
}

impl OpensslKeyGenerator {
    /// Create a generator that invokes the given binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Create a generator from config, falling back to `openssl` on PATH.
    pub fn from_config(config: &Config) -> Self {
        match &config.keygen.openssl_path {
            Some(path) => Self::new(path),
            None => Self::new(OPENSSL_BINARY),
        }
    }

    /// Run a prepared openssl invocation to completion, mapping a spawn
    /// NotFound to [`KeygenError::ToolUnavailable`] and a non-zero exit to
    /// [`KeygenError::CommandFailed`] with stderr captured verbatim.
    async fn execute(&self, mut command: Command) -> Result<(), KeygenError> {
        let output = command.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                KeygenError::ToolUnavailable {
                    tool: self.binary.display().to_string(),
                }
            } else {
                KeygenError::Io(e)
            }
        })?;

        if !output.status.success() {
            return Err(KeygenError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl KeyGenerator for OpensslKeyGenerator {
    async fn generate_private_key(&self, path: &Path) -> Result<(), KeygenError> {
        let mut command = Command::new(&self.binary);
        command
            .arg("genpkey")
            .args(["-algorithm", "RSA"])
            .args(["-pkeyopt", &format!("rsa_keygen_bits:{RSA_KEY_BITS}")])
            .arg("-out")
            .arg(path);
        self.execute(command).await
    }

    async fn derive_public_key(
        &self,
        private_key: &Path,
        path: &Path,
    ) -> Result<(), KeygenError> {
        let mut command = Command::new(&self.binary);
        command
            .arg("rsa")
            .arg("-in")
            .arg(private_key)
            .arg("-pubout")
            .arg("-out")
            .arg(path);
        self.execute(command).await
    }
}
