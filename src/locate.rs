//! Monorepo root discovery.
//!
//! The tool can be invoked from anywhere inside the platform checkout;
//! key locations are always resolved against the monorepo root, which is
//! identified by the Gradle settings script at its top level.

use std::path::{Path, PathBuf};

use crate::constants::MARKER_FILENAME;

/// Find the platform monorepo root containing `start`.
///
/// Walks upward from `start` (inclusive) and returns the first directory
/// containing [`MARKER_FILENAME`]. When no ancestor carries the marker,
/// returns `start` itself so that relocated or packaged checkouts still
/// get a deterministic, usable root.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(MARKER_FILENAME).is_file() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}
