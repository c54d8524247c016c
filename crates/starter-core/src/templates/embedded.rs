//! The built-in template tree, embedded at compile time.
//!
//! Every file under `crates/starter-core/assets/` becomes an asset named by its
//! path relative to that folder. The tree is a minimal HTTP service skeleton
//! (entry point, status and label controllers, API design, Makefile, Dockerfile,
//! config) whose `.tpl` files reference `ProjectName` and `MetricsName`.
//!
//! ## Warning
//!
//! Do NOT add a `{{variable}}` to an asset outside the closed set documented in
//! [`crate::templates`]; strict-mode rendering will fail at `init` time.

use std::borrow::Cow;

use rust_embed::RustEmbed;

use super::catalog::AssetCatalog;
use crate::error::{Result, StarterError};

#[derive(RustEmbed)]
#[folder = "assets"]
struct Assets;

/// [`AssetCatalog`] over the embedded template tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl AssetCatalog for EmbeddedCatalog {
    fn names(&self) -> Vec<String> {
        Assets::iter().map(|name| name.into_owned()).collect()
    }

    fn content(&self, name: &str) -> Result<Cow<'_, [u8]>> {
        Assets::get(name)
            .map(|file| file.data)
            .ok_or_else(|| StarterError::AssetMissing(name.to_string()))
    }
}
