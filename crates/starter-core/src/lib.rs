//! Core library for the starter toolkit.
//!
//! Materializes a brand-new project directory from a template tree: the
//! [`identity::ProjectIdentity`] is derived from the caller's identifier, the root
//! is reserved by [`project::reserve_root`], every asset of a
//! [`templates::catalog::AssetCatalog`] is rendered (for `.tpl` assets) and written
//! by [`materialize`], and an empty repository is created by a
//! [`repository::RepositoryInitializer`].
//!
//! [`bootstrap::Bootstrapper`] runs the whole pipeline.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod identity;
pub mod materialize;
pub mod project;
pub mod repository;
pub mod templates;
