//! App-wide constants.
//!
//! Centralises the tool name, the fixed filesystem contract (marker file,
//! artifact filenames), config paths, and environment variable names so a
//! rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "stormstack-keys";

/// Version string from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by build.rs).
pub const TARGET: &str = env!("TARGET");

/// File whose presence marks the platform monorepo root.
pub const MARKER_FILENAME: &str = "settings.gradle.kts";

/// Private key filename written into each key location (PKCS#8 PEM).
pub const PRIVATE_KEY_FILENAME: &str = "privateKey.pem";

/// Public key filename written into each key location (PEM).
pub const PUBLIC_KEY_FILENAME: &str = "publicKey.pem";

/// RSA modulus size required by the token services.
pub const RSA_KEY_BITS: u32 = 2048;

/// Default name of the external key generation binary.
pub const OPENSSL_BINARY: &str = "openssl";

/// Local config filename (e.g. `.stormstack-keys.toml` in the monorepo root).
pub const CONFIG_FILENAME: &str = ".stormstack-keys.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "stormstack-keys";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_OPENSSL: &str = "STORMSTACK_KEYS_OPENSSL";
pub const ENV_QUIET: &str = "STORMSTACK_KEYS_QUIET";
