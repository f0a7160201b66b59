//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.stormstack-keys.toml` in the monorepo root
//! 4. `~/.config/stormstack-keys/config.toml` (global defaults)
//! 5. Built-in defaults
//!
//! The filesystem contract itself (marker file, key locations, artifact
//! filenames) is fixed at compile time and deliberately not configurable;
//! only tool resolution and output behaviour go through here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keygen: KeygenConfig,
    pub output: OutputConfig,
}

/// Key generation tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeygenConfig {
    /// Path to an alternate openssl binary. Defaults to `openssl` on PATH.
    pub openssl_path: Option<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Suppress banner and progress output by default.
    pub quiet: bool,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, repo-local config, then applies
    /// environment variable overrides.
    pub fn load(project_root: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: repo-local config
        if let Some(root) = project_root {
            let local_path = root.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        if other.keygen.openssl_path.is_some() {
            self.keygen.openssl_path = other.keygen.openssl_path;
        }
        if other.output.quiet {
            self.output.quiet = true;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_OPENSSL) {
            if !val.is_empty() {
                self.keygen.openssl_path = Some(val);
            }
        }
        if let Ok(val) = env.var(crate::constants::ENV_QUIET) {
            match val.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => self.output.quiet = true,
                "false" | "0" | "no" | "off" => self.output.quiet = false,
                _ => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    crate::constants::ENV_QUIET
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.keygen.openssl_path.is_none());
        assert!(!config.output.quiet);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[keygen]
openssl_path = "/opt/openssl/bin/openssl"

[output]
quiet = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.keygen.openssl_path.as_deref(),
            Some("/opt/openssl/bin/openssl")
        );
        assert!(config.output.quiet);
    }

    #[test]
    fn merge_overrides_non_default_values() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.keygen.openssl_path = Some("/usr/local/bin/openssl".to_string());
        other.output.quiet = true;

        base.merge(other);

        assert_eq!(
            base.keygen.openssl_path.as_deref(),
            Some("/usr/local/bin/openssl")
        );
        assert!(base.output.quiet);
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.keygen.openssl_path = Some("/opt/openssl".to_string());

        let other = Config::default();
        base.merge(other);

        assert_eq!(base.keygen.openssl_path.as_deref(), Some("/opt/openssl"));
    }

    #[test]
    fn load_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");
        std::fs::write(
            &path,
            r#"
[keygen]
openssl_path = "openssl-3"
"#,
        )
        .unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.keygen.openssl_path.as_deref(), Some("openssl-3"));
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let result = Config::load_file(Path::new("/tmp/stormstack_keys_no_such_config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn load_from_project_root() {
        let env = Env::mock(Vec::<(&str, &str)>::new());

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".stormstack-keys.toml"),
            r#"
[keygen]
openssl_path = "/repo/openssl"
"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.keygen.openssl_path.as_deref(), Some("/repo/openssl"));
    }

    #[test]
    fn load_without_any_config_files() {
        let env = Env::mock(Vec::<(&str, &str)>::new());

        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert!(config.keygen.openssl_path.is_none());
    }

    #[test]
    fn apply_env_vars_openssl_path() {
        let env = Env::mock([("STORMSTACK_KEYS_OPENSSL", "/env/openssl")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.keygen.openssl_path.as_deref(), Some("/env/openssl"));
    }

    #[test]
    fn apply_env_vars_quiet_truthy() {
        let env = Env::mock([("STORMSTACK_KEYS_QUIET", "1")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert!(config.output.quiet);
    }

    #[test]
    fn apply_env_vars_quiet_overrides_file_value() {
        let env = Env::mock([("STORMSTACK_KEYS_QUIET", "off")]);
        let mut config = Config::default();
        config.output.quiet = true;
        config.apply_env_vars(&env);
        assert!(!config.output.quiet);
    }

    #[test]
    fn apply_env_vars_invalid_quiet_ignored() {
        let env = Env::mock([("STORMSTACK_KEYS_QUIET", "maybe")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert!(!config.output.quiet);
    }
}
