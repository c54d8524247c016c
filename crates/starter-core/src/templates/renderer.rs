//! Handlebars-based template renderer for project scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and
//! HTML escaping disabled. Strict mode ensures that any `{{variable}}` referenced
//! in a template must be one of the project variables, otherwise rendering returns
//! an error. Templates produce source and build files, so output is never escaped.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::renderer::TemplateRenderer;
//!
//! let mut renderer = TemplateRenderer::new(&identity);
//! let output = renderer.render("config.yaml.tpl", b"name: {{.ProjectName}}")?;
//! ```

use std::sync::LazyLock;

use handlebars::Handlebars;
use regex::Regex;
use serde::Serialize;

use crate::error::{Result, StarterError};
use crate::identity::ProjectIdentity;

/// Matches a Go-style field reference such as `{{.ProjectName}}` or `{{ .MetricsName }}`.
static FIELD_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(~?)\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*(~?)\}\}").expect("valid regex")
});

/// The complete set of values a template may reference.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateVars {
    #[serde(rename = "ProjectName")]
    pub project_name: String,
    #[serde(rename = "MetricsName")]
    pub metrics_name: String,
}

impl From<&ProjectIdentity> for TemplateVars {
    fn from(identity: &ProjectIdentity) -> Self {
        Self {
            project_name: identity.short_name.clone(),
            metrics_name: identity.metrics_name.clone(),
        }
    }
}

/// Renders `.tpl` assets against one project's [`TemplateVars`].
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
    vars: TemplateVars,
}

impl TemplateRenderer {
    /// Create a renderer for `identity` with strict mode enabled.
    pub fn new(identity: &ProjectIdentity) -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self {
            hbs,
            vars: TemplateVars::from(identity),
        }
    }

    /// Parse `content` as the template `asset` and render it.
    pub fn render(&mut self, asset: &str, content: &[u8]) -> Result<Vec<u8>> {
        let source = std::str::from_utf8(content).map_err(|e| StarterError::TemplateParse {
            asset: asset.to_string(),
            message: format!("template is not valid UTF-8: {e}"),
        })?;
        let source = normalize_field_refs(source);

        self.hbs
            .register_template_string(asset, &*source)
            .map_err(|e| StarterError::TemplateParse {
                asset: asset.to_string(),
                message: e.to_string(),
            })?;
        let rendered = self.hbs.render(asset, &self.vars);
        self.hbs.unregister_template(asset);

        rendered
            .map(String::into_bytes)
            .map_err(|e| StarterError::TemplateRender {
                asset: asset.to_string(),
                message: e.to_string(),
            })
    }
}

/// Rewrite `{{.Name}}` into the Handlebars path `{{Name}}`.
fn normalize_field_refs(source: &str) -> std::borrow::Cow<'_, str> {
    FIELD_REF.replace_all(source, "{{${1}${2}${3}}}")
}
