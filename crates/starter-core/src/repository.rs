//! Version-control initialization at the project root.
//!
//! The result is always an empty repository: no commit, no remote, nothing staged.
//! Two strategies are available:
//! - [`NativeGit`] writes the `.git` layout directly and needs no external tool
//! - [`GitCli`] runs `git init` and requires `git` on `PATH`

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::error::{Result, StarterError};

/// Creates version-control metadata rooted at a directory.
pub trait RepositoryInitializer {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Initialize an empty repository at `root`.
    fn init(&self, root: &Path) -> Result<()>;
}

/// Which [`RepositoryInitializer`] to use, as stored in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryKind {
    #[default]
    Native,
    GitCli,
}

impl RepositoryKind {
    pub fn initializer(self) -> Result<Box<dyn RepositoryInitializer>> {
        match self {
            Self::Native => Ok(Box::new(NativeGit)),
            Self::GitCli => Ok(Box::new(GitCli::new()?)),
        }
    }
}

const GIT_CONFIG: &str = "[core]
\trepositoryformatversion = 0
\tfilemode = true
\tbare = false
\tlogallrefupdates = true
";

const GIT_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

/// Writes an empty git repository layout without shelling out.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeGit;

impl NativeGit {
    fn write_layout(git_dir: &Path) -> std::io::Result<()> {
        for dir in ["objects/info", "objects/pack", "refs/heads", "refs/tags", "info"] {
            std::fs::create_dir_all(git_dir.join(dir))?;
        }
        std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/master\n")?;
        std::fs::write(git_dir.join("config"), GIT_CONFIG)?;
        std::fs::write(git_dir.join("description"), GIT_DESCRIPTION)?;
        std::fs::write(git_dir.join("info/exclude"), "")?;
        Ok(())
    }
}

impl RepositoryInitializer for NativeGit {
    fn name(&self) -> &'static str {
        "native"
    }

    fn init(&self, root: &Path) -> Result<()> {
        let git_dir = ensure_uninitialized(root)?;
        Self::write_layout(&git_dir).map_err(|e| StarterError::RepositoryInit {
            path: root.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Runs the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCli {
    binary: String,
}

impl GitCli {
    /// Create a new wrapper, verifying git is installed.
    pub fn new() -> Result<Self> {
        which::which("git").map_err(|_| StarterError::MissingTool {
            name: "git".into(),
            install: "https://git-scm.com/downloads".into(),
        })?;
        Ok(Self {
            binary: "git".into(),
        })
    }
}

impl RepositoryInitializer for GitCli {
    fn name(&self) -> &'static str {
        "git-cli"
    }

    fn init(&self, root: &Path) -> Result<()> {
        ensure_uninitialized(root)?;
        let output = Command::new(&self.binary)
            .args(["init", "--quiet"])
            .arg(root)
            .output()
            .map_err(|e| StarterError::RepositoryInit {
                path: root.to_path_buf(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(StarterError::RepositoryInit {
                path: root.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

fn ensure_uninitialized(root: &Path) -> Result<PathBuf> {
    let git_dir = root.join(".git");
    if std::fs::symlink_metadata(&git_dir).is_ok() {
        return Err(StarterError::RepositoryInit {
            path: root.to_path_buf(),
            message: "a .git entry already exists".into(),
        });
    }
    Ok(git_dir)
}
