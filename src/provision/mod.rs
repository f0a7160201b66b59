//! Key pair provisioning across the configured locations.
//!
//! Each location is handled independently and in order: resolve the
//! directory, skip when both artifacts are already present (unless
//! forced), otherwise generate the private key and derive the public key
//! through the [`KeyGenerator`] seam. A failure at one location never
//! prevents the remaining locations from being attempted, and nothing is
//! ever deleted or rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{PRIVATE_KEY_FILENAME, PUBLIC_KEY_FILENAME};
use crate::keygen::{KeyGenerator, KeygenError};

/// The fixed, ordered list of directories that receive a signing key pair.
///
/// Paths are relative to the monorepo root. The order only affects
/// reporting; locations do not share any files.
pub const KEY_LOCATIONS: &[KeyLocation] = &[
    KeyLocation {
        path: "lightning-auth-core/src/main/resources/jwt",
        service: "lightning-auth-core",
    },
    KeyLocation {
        path: "thunder/auth/provider/src/main/resources/jwt",
        service: "thunder-auth",
    },
];

/// A directory under the monorepo root where a key pair belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyLocation {
    /// Directory path relative to the monorepo root.
    pub path: &'static str,
    /// The service that loads keys from this location.
    pub service: &'static str,
}

/// Absolute artifact paths derived from a [`KeyLocation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPairPaths {
    pub dir: PathBuf,
    pub private_key: PathBuf,
    pub public_key: PathBuf,
}

impl KeyPairPaths {
    /// Resolve the directory and both artifact paths for a location.
    pub fn for_location(root: &Path, location: &KeyLocation) -> Self {
        let dir = root.join(location.path);
        Self {
            private_key: dir.join(PRIVATE_KEY_FILENAME),
            public_key: dir.join(PUBLIC_KEY_FILENAME),
            dir,
        }
    }

    /// Whether both artifacts are present on disk (existence only; file
    /// contents are never inspected).
    pub fn both_exist(&self) -> bool {
        self.private_key.is_file() && self.public_key.is_file()
    }
}

/// Why a location's generation attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    /// The external tool could not be invoked at all.
    ToolUnavailable,
    /// The tool was invoked (or the directory prepared) and did not complete.
    GenerationFailed,
}

/// Per-location provisioning result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Both artifacts were already present and regeneration was not forced.
    Skipped,
    /// A new key pair was generated.
    Generated,
    /// Generation was attempted and did not complete.
    Failed {
        cause: FailureCause,
        reason: String,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Skipped => write!(f, "skipped"),
            Outcome::Generated => write!(f, "generated"),
            Outcome::Failed { .. } => write!(f, "failed"),
        }
    }
}

/// One location's report, consumed by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationReport {
    pub location: KeyLocation,
    pub outcome: Outcome,
}

/// Outcome counts across a provisioning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_reports(reports: &[LocationReport]) -> Self {
        let mut summary = Summary::default();
        for report in reports {
            match report.outcome {
                Outcome::Generated => summary.generated += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}

/// Whether any location failed because the generation tool was absent.
///
/// Used to print the installation hint once rather than per location.
pub fn any_tool_unavailable(reports: &[LocationReport]) -> bool {
    reports.iter().any(|r| {
        matches!(
            r.outcome,
            Outcome::Failed {
                cause: FailureCause::ToolUnavailable,
                ..
            }
        )
    })
}

/// Provision every configured location, in order, returning one report
/// per location. Never aborts early: each location is attempted
/// regardless of earlier failures.
pub async fn provision_all(
    generator: &dyn KeyGenerator,
    root: &Path,
    locations: &[KeyLocation],
    force: bool,
) -> Vec<LocationReport> {
    let mut reports = Vec::with_capacity(locations.len());
    for location in locations {
        let outcome = provision_location(generator, root, location, force).await;
        reports.push(LocationReport {
            location: *location,
            outcome,
        });
    }
    reports
}

async fn provision_location(
    generator: &dyn KeyGenerator,
    root: &Path,
    location: &KeyLocation,
    force: bool,
) -> Outcome {
    let paths = KeyPairPaths::for_location(root, location);

    // create_dir_all is a no-op when the directory already exists.
    if let Err(e) = tokio::fs::create_dir_all(&paths.dir).await {
        return Outcome::Failed {
            cause: FailureCause::GenerationFailed,
            reason: format!("failed to create {}: {e}", paths.dir.display()),
        };
    }

    if !force && paths.both_exist() {
        return Outcome::Skipped;
    }

    if let Err(e) = generator.generate_private_key(&paths.private_key).await {
        return failed(e);
    }
    if let Err(e) = generator
        .derive_public_key(&paths.private_key, &paths.public_key)
        .await
    {
        return failed(e);
    }

    Outcome::Generated
}

fn failed(error: KeygenError) -> Outcome {
    let cause = if error.is_tool_unavailable() {
        FailureCause::ToolUnavailable
    } else {
        FailureCause::GenerationFailed
    };
    Outcome::Failed {
        cause,
        reason: error.to_string(),
    }
}
