//! Reserving the root directory of a new project.
//!
//! A project is only ever created from scratch: if anything already lives at
//! the target path the bootstrap stops before touching the filesystem.

use std::path::Path;

use crate::error::{Result, StarterError};

/// Fail with [`StarterError::AlreadyExists`] if `root` exists, otherwise create it
/// along with any missing parents.
///
/// Uses `symlink_metadata` so that a dangling symlink also counts as existing.
pub fn reserve_root(root: &Path) -> Result<()> {
    tracing::debug!("checking that directory '{}' does not exist yet...", root.display());
    if std::fs::symlink_metadata(root).is_ok() {
        return Err(StarterError::AlreadyExists(root.to_path_buf()));
    }

    std::fs::create_dir_all(root).map_err(|source| StarterError::CreateDir {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}
