//! Read-only sources of named assets.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StarterError};

/// A registry of assets keyed by `/`-separated relative paths.
///
/// Callers must not rely on the order of [`AssetCatalog::names`].
pub trait AssetCatalog {
    /// Every asset name in the catalog.
    fn names(&self) -> Vec<String>;

    /// Bytes of the asset `name`. Fails with [`StarterError::AssetMissing`] for
    /// names the catalog does not hold.
    fn content(&self, name: &str) -> Result<Cow<'_, [u8]>>;
}

/// An in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    assets: BTreeMap<String, Vec<u8>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an asset.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), content.into());
    }

    /// Builder-style [`MemoryCatalog::insert`].
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }
}

impl AssetCatalog for MemoryCatalog {
    fn names(&self) -> Vec<String> {
        self.assets.keys().cloned().collect()
    }

    fn content(&self, name: &str) -> Result<Cow<'_, [u8]>> {
        self.assets
            .get(name)
            .map(|bytes| Cow::Borrowed(bytes.as_slice()))
            .ok_or_else(|| StarterError::AssetMissing(name.to_string()))
    }
}

/// A template tree read from a directory on disk.
///
/// The tree is walked once when the catalog is opened; contents are read on
/// demand. `.git` directories are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
    names: Vec<String>,
}

impl DirectoryCatalog {
    /// Walk `root`, following symlinks. A symlink cycle fails the walk.
    pub fn open(root: &Path) -> Result<Self> {
        let mut names = Vec::new();
        for entry in WalkDir::new(root)
            .follow_links(true)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git")
        {
            let entry = entry.map_err(|e| {
                let name = e.path().unwrap_or(root).display().to_string();
                StarterError::ReadAsset {
                    name,
                    source: e.into(),
                }
            })?;
            if entry.file_type().is_dir() {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            names.push(name);
        }

        Ok(Self {
            root: root.to_path_buf(),
            names,
        })
    }
}

impl AssetCatalog for DirectoryCatalog {
    fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn content(&self, name: &str) -> Result<Cow<'_, [u8]>> {
        if !self.names.iter().any(|n| n == name) {
            return Err(StarterError::AssetMissing(name.to_string()));
        }
        let path = name.split('/').fold(self.root.clone(), |p, seg| p.join(seg));
        std::fs::read(&path)
            .map(Cow::Owned)
            .map_err(|source| StarterError::ReadAsset {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_catalog_lookup() {
        let catalog = MemoryCatalog::new().with("a.txt", "alpha");
        assert_eq!(catalog.names(), vec!["a.txt".to_string()]);
        assert_eq!(catalog.content("a.txt").unwrap().as_ref(), b"alpha");
        assert!(matches!(
            catalog.content("b.txt"),
            Err(StarterError::AssetMissing(n)) if n == "b.txt"
        ));
    }

    #[test]
    fn test_directory_catalog_walks_nested_tree() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("cmd/sub")).unwrap();
        std::fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        std::fs::write(dir.path().join("README.md"), "readme").unwrap();
        std::fs::write(dir.path().join("cmd/sub/file.go.tpl"), "package {{ProjectName}}").unwrap();
        std::fs::write(dir.path().join(".git/HEAD"), "ref").unwrap();

        let catalog = DirectoryCatalog::open(dir.path()).unwrap();
        let mut names = catalog.names();
        names.sort();
        assert_eq!(names, vec!["README.md", "cmd/sub/file.go.tpl"]);
        assert_eq!(
            catalog.content("cmd/sub/file.go.tpl").unwrap().as_ref(),
            b"package {{ProjectName}}"
        );
    }

    #[test]
    fn test_directory_catalog_rejects_unlisted_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a"), "a").unwrap();
        let catalog = DirectoryCatalog::open(dir.path()).unwrap();
        assert!(matches!(catalog.content("../a"), Err(StarterError::AssetMissing(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_catalog_detects_symlink_cycle() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let result = DirectoryCatalog::open(dir.path());
        assert!(matches!(result, Err(StarterError::ReadAsset { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_catalog_follows_symlinked_dir() {
        let dir = tempfile::tempdir().unwrap();
        let shared = tempfile::tempdir().unwrap();
        std::fs::write(shared.path().join("common.mk"), "all:").unwrap();
        std::fs::create_dir(dir.path().join("tree")).unwrap();
        std::os::unix::fs::symlink(shared.path(), dir.path().join("tree/shared")).unwrap();

        let catalog = DirectoryCatalog::open(&dir.path().join("tree")).unwrap();
        assert_eq!(catalog.names(), vec!["shared/common.mk".to_string()]);
        assert_eq!(catalog.content("shared/common.mk").unwrap().as_ref(), b"all:");
    }

    #[test]
    fn test_directory_catalog_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = DirectoryCatalog::open(&dir.path().join("absent"));
        assert!(matches!(result, Err(StarterError::ReadAsset { .. })));
    }
}
