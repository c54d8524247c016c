//! Project identity derived from the caller's identifier.

use std::path::{Component, Path, PathBuf};

/// The `{root, short name, metrics name}` triple computed once per bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    /// Directory the project is materialized into.
    pub root: PathBuf,
    /// Final segment of the identifier, e.g. `my-app`.
    pub short_name: String,
    /// `short_name` with every `-` replaced by `_`, usable as a metrics namespace.
    pub metrics_name: String,
}

impl ProjectIdentity {
    /// Join `full_name` (a `/`-separated identifier such as `github.com/org/my-app`)
    /// under `base_dir`.
    ///
    /// The identifier is cleaned before joining: leading separators and `.` are
    /// dropped and `..` removes the previous segment, never climbing above
    /// `base_dir`. The root therefore always lies under `base_dir`.
    ///
    /// No character validation happens here: whatever the identifier contains
    /// flows through, only `-` is rewritten for the metrics name.
    pub fn resolve(base_dir: &Path, full_name: &str) -> Self {
        let segments = clean_segments(full_name);
        let root = segments.iter().fold(base_dir.to_path_buf(), |p, seg| p.join(seg));
        let short_name = match segments.last() {
            Some(last) => last.clone(),
            None => base_dir
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let metrics_name = metrics_name(&short_name);

        Self {
            root,
            short_name,
            metrics_name,
        }
    }
}

fn clean_segments(full_name: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for component in Path::new(full_name).components() {
        match component {
            Component::Normal(s) => segments.push(s.to_string_lossy().into_owned()),
            Component::ParentDir => {
                segments.pop();
            }
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    segments
}

/// Replace every `-` with `_`.
pub fn metrics_name(short_name: &str) -> String {
    short_name.replace('-', "_")
}
