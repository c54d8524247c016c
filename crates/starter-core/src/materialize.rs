//! Writing catalog assets into the project root.
//!
//! Each asset is processed on its own: the output path is derived from the asset
//! name, `.tpl` assets go through the [`TemplateRenderer`], the parent directory is
//! created and the bytes are written. The catalog may list assets in any order, so
//! a file never relies on a sibling having created its directory.
//!
//! The first failure stops the run. Files written before it stay on disk.

use std::path::{Path, PathBuf};

use crate::error::{Result, StarterError};
use crate::identity::ProjectIdentity;
use crate::templates::catalog::AssetCatalog;
use crate::templates::renderer::TemplateRenderer;
use crate::templates::{is_template, output_name};

/// One resolved entry of the materialization plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Catalog name of the source asset.
    pub asset: String,
    /// Destination on disk.
    pub path: PathBuf,
    /// Whether the asset is rendered before writing.
    pub template: bool,
}

impl PlannedFile {
    /// Resolve where `asset` lands under `root`.
    ///
    /// The name is split on `/`; empty, `.` and `..` segments and absolute names
    /// are rejected since they would escape or alias the root.
    pub fn resolve(root: &Path, asset: &str) -> Result<Self> {
        let template = is_template(asset);
        let name = output_name(asset);

        let mut path = root.to_path_buf();
        for segment in name.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
                return Err(StarterError::InvalidAssetName(asset.to_string()));
            }
            path.push(segment);
        }

        Ok(Self {
            asset: asset.to_string(),
            path,
            template,
        })
    }
}

/// Outcome of materializing a whole catalog.
#[derive(Debug, Clone, Default)]
pub struct Materialized {
    pub files: Vec<PathBuf>,
    pub templates_rendered: usize,
}

/// Render (where needed) and write every asset of `catalog` under `identity.root`.
pub fn materialize_all(catalog: &dyn AssetCatalog, identity: &ProjectIdentity) -> Result<Materialized> {
    let mut renderer = TemplateRenderer::new(identity);
    let mut out = Materialized::default();

    for name in catalog.names() {
        let planned = PlannedFile::resolve(&identity.root, &name)?;
        let content = catalog.content(&name)?;

        let bytes = if planned.template {
            tracing::info!("processing '{}' as a template...", name);
            tracing::debug!(" -> '{}'", planned.path.display());
            out.templates_rendered += 1;
            renderer.render(&name, &content)?
        } else {
            content.into_owned()
        };

        write_file(&planned, &bytes)?;
        out.files.push(planned.path);
    }

    Ok(out)
}

/// Create the parent directory of `planned.path` if needed, then write `content`,
/// replacing any existing file.
pub fn write_file(planned: &PlannedFile, content: &[u8]) -> Result<()> {
    if let Some(parent) = planned.path.parent() {
        if !parent.is_dir() {
            tracing::info!(
                "directory '{}' does not exist yet and will be created",
                parent.display()
            );
            std::fs::create_dir_all(parent).map_err(|source| StarterError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    tracing::info!("generating '{}'", planned.path.display());
    std::fs::write(&planned.path, content).map_err(|source| StarterError::WriteFile {
        asset: planned.asset.clone(),
        path: planned.path.clone(),
        source,
    })
}
