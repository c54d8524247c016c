//! The bootstrap pipeline.
//!
//! ```text
//! identity → reserve root → (render? → write) per asset → init repository
//! ```
//!
//! Runs sequentially and stops at the first error. Nothing is rolled back: a
//! failure while materializing leaves the files written so far, and a failure
//! to initialize the repository leaves a complete but unversioned project.

use std::path::PathBuf;

use crate::error::Result;
use crate::identity::ProjectIdentity;
use crate::materialize;
use crate::project;
use crate::repository::{NativeGit, RepositoryInitializer};
use crate::templates::catalog::AssetCatalog;

/// What a successful bootstrap produced.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub identity: ProjectIdentity,
    /// Every file written, in catalog order.
    pub files: Vec<PathBuf>,
    pub templates_rendered: usize,
}

/// Materializes new projects from a catalog under a base directory.
pub struct Bootstrapper<'a> {
    base_dir: PathBuf,
    catalog: &'a dyn AssetCatalog,
    repository: Box<dyn RepositoryInitializer>,
}

impl<'a> Bootstrapper<'a> {
    /// A bootstrapper using the [`NativeGit`] repository initializer.
    pub fn new(base_dir: impl Into<PathBuf>, catalog: &'a dyn AssetCatalog) -> Self {
        Self {
            base_dir: base_dir.into(),
            catalog,
            repository: Box::new(NativeGit),
        }
    }

    pub fn with_repository(mut self, repository: Box<dyn RepositoryInitializer>) -> Self {
        self.repository = repository;
        self
    }

    /// Create the project identified by `full_name` (e.g. `github.com/acme/my-app`).
    pub fn bootstrap(&self, full_name: &str) -> Result<BootstrapReport> {
        let identity = ProjectIdentity::resolve(&self.base_dir, full_name);
        tracing::info!(
            "bootstrapping new project named '{}' in '{}'...",
            identity.short_name,
            identity.root.display()
        );

        project::reserve_root(&identity.root)?;

        let materialized = materialize::materialize_all(self.catalog, &identity)?;

        tracing::info!(
            "initializing {} repository at '{}'",
            self.repository.name(),
            identity.root.display()
        );
        self.repository.init(&identity.root)?;

        Ok(BootstrapReport {
            identity,
            files: materialized.files,
            templates_rendered: materialized.templates_rendered,
        })
    }
}
