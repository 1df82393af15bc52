use crate::domain::errors::ConfigError;
use std::path::{Path, PathBuf};

pub fn settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/iconverify/config.toml"))
}

/// Picks the app root: an explicit folder wins, then the nearest ancestor of
/// `start` holding one of `markers`, then `start` itself.
pub fn resolve_app_root(
    explicit: Option<&Path>,
    start: &Path,
    markers: &[String],
) -> Result<PathBuf, ConfigError> {
    if let Some(root) = explicit {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            start.join(root)
        };
        if !root.is_dir() {
            return Err(ConfigError::invalid(format!(
                "app root is not a directory: {}",
                root.display()
            )));
        }
        return Ok(root);
    }

    for dir in start.ancestors() {
        if markers.iter().any(|m| dir.join(m).is_file()) {
            return Ok(dir.to_path_buf());
        }
    }

    Ok(start.to_path_buf())
}

/// Forward-slash path of `relative` below `base`, or `None` if it lies elsewhere.
pub fn strip_folder<'a>(relative: &'a str, base: &str) -> Option<&'a str> {
    relative
        .strip_prefix(base.trim_end_matches('/'))
        .and_then(|rest| rest.strip_prefix('/'))
}
