//! Optional defaults for `starter init`, read from `starter.config.json`.
//!
//! ```json
//! {
//!   "base_dir": "/home/me/go/src",
//!   "templates_dir": null,
//!   "repository": "native"
//! }
//! ```
//!
//! Every field is optional. Command-line flags take precedence over the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, StarterError};
use crate::repository::RepositoryKind;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "starter.config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StarterConfig {
    /// Directory project identifiers are joined under.
    pub base_dir: Option<PathBuf>,
    /// Template tree on disk to use instead of the embedded one.
    pub templates_dir: Option<PathBuf>,
    /// How the repository is initialized.
    pub repository: RepositoryKind,
}

impl StarterConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StarterError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| StarterError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{ "base_dir": "/srv/src", "templates_dir": null, "repository": "git-cli" }"#,
        )
        .unwrap();
        let expected = StarterConfig {
            base_dir: Some(PathBuf::from("/srv/src")),
            templates_dir: None,
            repository: RepositoryKind::GitCli,
        };
        assert_eq!(StarterConfig::load(&path).unwrap(), expected);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "base_dir": "/x" }"#).unwrap();
        let config = StarterConfig::load(&path).unwrap();
        assert_eq!(config.base_dir, Some(PathBuf::from("/x")));
        assert_eq!(config.repository, RepositoryKind::Native);
    }

    #[test]
    fn test_config_missing() {
        let result = StarterConfig::load(Path::new("/tmp/nonexistent_starter_config.json"));
        assert!(matches!(result, Err(StarterError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_config_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            StarterConfig::load(&path),
            Err(StarterError::ConfigParse { .. })
        ));
    }
}
