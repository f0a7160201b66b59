//! Post-provisioning completion check.
//!
//! Deliberately independent of the provisioner's outcomes: paths are
//! re-derived and the filesystem re-stat'd, so a run that claimed success
//! but left files missing (partial tool failure, permission problems on
//! the second write) is still caught. What we attempted and what is
//! actually on disk are kept as separate questions.

use std::path::Path;

use serde::Serialize;

use crate::provision::{KeyLocation, KeyPairPaths};

/// A location still missing one or both artifacts after provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingArtifacts {
    pub location: KeyLocation,
    pub private_missing: bool,
    pub public_missing: bool,
}

/// Result of re-checking every configured location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub missing: Vec<MissingArtifacts>,
}

impl VerificationReport {
    /// True when every location has both artifacts on disk.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Re-stat both artifacts of every location. Read-only.
pub fn verify_locations(root: &Path, locations: &[KeyLocation]) -> VerificationReport {
    let mut report = VerificationReport::default();
    for location in locations {
        let paths = KeyPairPaths::for_location(root, location);
        let private_missing = !paths.private_key.is_file();
        let public_missing = !paths.public_key.is_file();
        if private_missing || public_missing {
            report.missing.push(MissingArtifacts {
                location: *location,
                private_missing,
                public_missing,
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATIONS: &[KeyLocation] = &[
        KeyLocation {
            path: "a",
            service: "svc-a",
        },
        KeyLocation {
            path: "b",
            service: "svc-b",
        },
    ];

    fn write_pair(root: &Path, location: &KeyLocation) {
        let paths = KeyPairPaths::for_location(root, location);
        std::fs::create_dir_all(&paths.dir).unwrap();
        std::fs::write(&paths.private_key, "private").unwrap();
        std::fs::write(&paths.public_key, "public").unwrap();
    }

    #[test]
    fn complete_when_all_pairs_present() {
        let dir = tempfile::tempdir().unwrap();
        for location in LOCATIONS {
            write_pair(dir.path(), location);
        }

        let report = verify_locations(dir.path(), LOCATIONS);
        assert!(report.is_complete());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn flags_location_with_no_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), &LOCATIONS[0]);

        let report = verify_locations(dir.path(), LOCATIONS);
        assert!(!report.is_complete());
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].location, LOCATIONS[1]);
        assert!(report.missing[0].private_missing);
        assert!(report.missing[0].public_missing);
    }

    #[test]
    fn flags_half_written_pair() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), &LOCATIONS[0]);
        write_pair(dir.path(), &LOCATIONS[1]);
        let paths = KeyPairPaths::for_location(dir.path(), &LOCATIONS[1]);
        std::fs::remove_file(&paths.public_key).unwrap();

        let report = verify_locations(dir.path(), LOCATIONS);
        assert!(!report.is_complete());
        assert_eq!(report.missing.len(), 1);
        assert!(!report.missing[0].private_missing);
        assert!(report.missing[0].public_missing);
    }

    #[test]
    fn empty_location_list_is_complete() {
        let dir = tempfile::tempdir().unwrap();
        let report = verify_locations(dir.path(), &[]);
        assert!(report.is_complete());
    }
}
