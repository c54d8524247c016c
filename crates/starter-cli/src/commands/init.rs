use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use starter_core::bootstrap::Bootstrapper;
use starter_core::config::{StarterConfig, CONFIG_FILE};
use starter_core::repository::RepositoryKind;
use starter_core::templates::catalog::{AssetCatalog, DirectoryCatalog};
use starter_core::templates::embedded::EmbeddedCatalog;

use crate::output;

/// Options of `starter init` besides the project name.
#[derive(Debug, Default)]
pub struct InitArgs {
    pub config: Option<PathBuf>,
    pub base_dir: Option<PathBuf>,
    pub templates: Option<PathBuf>,
    pub git_cli: bool,
}

/// Initialize a new project.
///
/// Resolves the base directory and template tree from flags and configuration,
/// then runs the bootstrap pipeline: reserve the root, materialize every asset,
/// initialize the repository.
pub fn run(name: &str, args: InitArgs) -> Result<()> {
    output::print_header(&format!("starter init: {name}"));

    output::print_step(1, 3, "Resolving configuration");
    let config = load_config(args.config.as_deref())?;
    let base_dir = resolve_base_dir(args.base_dir, &config, std::env::var_os("GOPATH"))?;
    let repository = if args.git_cli {
        RepositoryKind::GitCli
    } else {
        config.repository
    };
    tracing::debug!(?base_dir, ?repository, "resolved configuration");

    let directory_catalog = match args.templates.or(config.templates_dir) {
        Some(dir) => Some(
            DirectoryCatalog::open(&dir)
                .with_context(|| format!("failed to open template tree '{}'", dir.display()))?,
        ),
        None => None,
    };
    let catalog: &dyn AssetCatalog = match &directory_catalog {
        Some(dir) => dir as &dyn AssetCatalog,
        None => &EmbeddedCatalog,
    };

    output::print_step(2, 3, &format!("Bootstrapping project under {}", base_dir.display()));
    let report = Bootstrapper::new(base_dir, catalog)
        .with_repository(repository.initializer()?)
        .bootstrap(name)?;

    output::print_step(3, 3, "Summary");
    output::print_report(&report);
    output::print_next_steps(&report);

    Ok(())
}

/// Load the config named on the command line, or `./starter.config.json` if it
/// exists, or the defaults.
fn load_config(explicit: Option<&Path>) -> Result<StarterConfig> {
    if let Some(path) = explicit {
        return Ok(StarterConfig::load(path)?);
    }
    let default = Path::new(CONFIG_FILE);
    if default.is_file() {
        return Ok(StarterConfig::load(default)?);
    }
    Ok(StarterConfig::default())
}

/// Base directory precedence: flag (or `STARTER_BASE_DIR`), config, `$GOPATH/src`,
/// current directory. The result is absolute.
fn resolve_base_dir(
    flag: Option<PathBuf>,
    config: &StarterConfig,
    gopath: Option<OsString>,
) -> Result<PathBuf> {
    let base = flag
        .or_else(|| config.base_dir.clone())
        .or_else(|| {
            gopath
                .as_deref()
                .and_then(|paths| std::env::split_paths(paths).find(|p| !p.as_os_str().is_empty()))
                .map(|p| p.join("src"))
        })
        .unwrap_or_else(|| PathBuf::from("."));

    std::path::absolute(&base)
        .with_context(|| format!("failed to resolve base directory '{}'", base.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let config = StarterConfig {
            base_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let base = resolve_base_dir(
            Some(PathBuf::from("/from/flag")),
            &config,
            Some(OsString::from("/gopath")),
        )
        .unwrap();
        assert_eq!(base, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_config_before_gopath() {
        let config = StarterConfig {
            base_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let base = resolve_base_dir(None, &config, Some(OsString::from("/gopath"))).unwrap();
        assert_eq!(base, PathBuf::from("/from/config"));
    }

    #[cfg(unix)]
    #[test]
    fn test_gopath_src_fallback() {
        let base = resolve_base_dir(
            None,
            &StarterConfig::default(),
            Some(OsString::from("/go:/other")),
        )
        .unwrap();
        assert_eq!(base, PathBuf::from("/go/src"));
    }

    #[test]
    fn test_current_dir_fallback_is_absolute() {
        let base = resolve_base_dir(None, &StarterConfig::default(), None).unwrap();
        assert!(base.is_absolute());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("missing.json"))).is_err());
    }

    #[test]
    fn test_end_to_end_with_directory_templates() {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("templates");
        std::fs::create_dir_all(templates.join("cmd")).unwrap();
        std::fs::write(templates.join("cmd/main.go.tpl"), "package {{.MetricsName}}\n").unwrap();

        let base = dir.path().join("src");
        run(
            "acme/my-tool",
            InitArgs {
                config: None,
                base_dir: Some(base.clone()),
                templates: Some(templates),
                git_cli: false,
            },
        )
        .unwrap();

        let root = base.join("acme/my-tool");
        assert_eq!(
            std::fs::read_to_string(root.join("cmd/main.go")).unwrap(),
            "package my_tool\n"
        );
        assert!(root.join(".git/HEAD").is_file());
    }
}
