//! Template system for project scaffolding.
//!
//! Assets come from an [`catalog::AssetCatalog`]: by default the tree under
//! `crates/starter-core/assets/`, embedded into the binary at compile time by the
//! [`embedded`] module. Each asset is written verbatim unless its name ends with
//! [`TEMPLATE_SUFFIX`], in which case it is rendered with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`]
//! and written without the suffix.
//!
//! ## Template variables
//!
//! The variable set is closed; strict mode rejects anything else:
//! - `{{ProjectName}}` — last segment of the project identifier (e.g. `my-app`)
//! - `{{MetricsName}}` — the same with `-` replaced by `_` (e.g. `my_app`)
//!
//! Go-style field references (`{{.ProjectName}}`) are accepted as aliases.
//!
//! ## Adding a new template
//!
//! 1. Create the file under `crates/starter-core/assets/`, with a `.tpl` suffix if it
//!    references variables
//! 2. Rebuild; `rust-embed` picks up every file in the folder

pub mod catalog;
pub mod embedded;
pub mod renderer;

/// Suffix marking an asset for variable substitution.
pub const TEMPLATE_SUFFIX: &str = ".tpl";

/// Whether the asset `name` is rendered as a template.
pub fn is_template(name: &str) -> bool {
    name.ends_with(TEMPLATE_SUFFIX)
}

/// Output name of an asset: one trailing `.tpl` removed, anything else unchanged.
pub fn output_name(name: &str) -> &str {
    name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_detection() {
        assert!(is_template("config.yaml.tpl"));
        assert!(is_template("cmd/sub/file.go.tpl"));
        assert!(!is_template("config.yaml"));
        assert!(!is_template("tpl"));
        assert!(!is_template("notes.tpl.md"));
    }

    #[test]
    fn test_output_name_strips_one_suffix() {
        assert_eq!(output_name("config.yaml.tpl"), "config.yaml");
        assert_eq!(output_name("a.tpl.tpl"), "a.tpl");
        assert_eq!(output_name("Makefile"), "Makefile");
    }
}
