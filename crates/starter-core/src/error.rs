//! Unified error types for the starter toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while bootstrapping a project.
#[derive(Error, Debug)]
pub enum StarterError {
    // --- Configuration ---

    /// The configuration file (`starter.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Project ---

    /// The target root of the new project is already present on disk.
    #[error("'{0}' already exists")]
    AlreadyExists(PathBuf),

    // --- Filesystem ---

    /// A directory (project root or a file's parent) could not be created.
    #[error("failed to make directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A materialized file could not be written.
    #[error("failed to write content of '{asset}' to '{path}'")]
    WriteFile {
        asset: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An asset could not be read from its catalog.
    #[error("failed to read asset '{name}'")]
    ReadAsset {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog listed a name it cannot serve.
    #[error("asset '{0}' not found in catalog")]
    AssetMissing(String),

    /// The asset name would not land inside the project root.
    #[error("invalid asset name '{0}'")]
    InvalidAssetName(String),

    // --- Templates ---

    /// A `.tpl` asset is not a valid template.
    #[error("failed to parse the content of the '{asset}' template: {message}")]
    TemplateParse { asset: String, message: String },

    /// A `.tpl` asset failed to render (e.g. it references an unknown variable).
    #[error("failed to process '{asset}' template: {message}")]
    TemplateRender { asset: String, message: String },

    // --- Repository ---

    /// Version-control metadata could not be created at the project root.
    #[error("failed to initialize a git repository at '{path}': {message}")]
    RepositoryInit { path: PathBuf, message: String },

    /// A required external tool (e.g. `git`) is not installed.
    #[error("required tool '{name}' not found — install: {install}")]
    MissingTool { name: String, install: String },
}

/// Coarse classification of a [`StarterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing configuration.
    Config,
    /// The target root already exists; nothing was touched.
    AlreadyExists,
    /// Filesystem or catalog failure while materializing.
    Io,
    /// A template failed to parse or render.
    Template,
    /// Files were written but the repository could not be initialized.
    RepositoryInit,
}

impl StarterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigNotFound { .. } | Self::ConfigParse { .. } => ErrorKind::Config,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::CreateDir { .. }
            | Self::WriteFile { .. }
            | Self::ReadAsset { .. }
            | Self::AssetMissing(_)
            | Self::InvalidAssetName(_) => ErrorKind::Io,
            Self::TemplateParse { .. } | Self::TemplateRender { .. } => ErrorKind::Template,
            Self::RepositoryInit { .. } | Self::MissingTool { .. } => ErrorKind::RepositoryInit,
        }
    }
}

/// Alias for `Result<T, StarterError>`.
pub type Result<T> = std::result::Result<T, StarterError>;
