//! Profile loading and the CLI/profile merge that yields a `VerificationRequest`.

use crate::cli::GeneratorKind;
use crate::domain::errors::ConfigError;
use crate::domain::models::{AssetSpec, CliParams, Profile, ProfileParams, VerificationRequest};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn profile_candidates(path: &Path) -> Vec<PathBuf> {
    let mut out = vec![path.to_path_buf()];
    if path.extension().is_none() {
        out.push(path.with_extension("json"));
    }
    out
}

pub fn load_profile(path: &Path) -> Result<Profile, ConfigError> {
    let file = profile_candidates(path)
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| ConfigError::ProfileNotFound(path.display().to_string()))?;

    let raw = std::fs::read_to_string(&file).map_err(|source| ConfigError::ProfileUnreadable {
        path: file.display().to_string(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| ConfigError::ProfileMalformed {
            path: file.display().to_string(),
            source,
        })?;
    serde_json::from_value(value).map_err(|e| {
        ConfigError::invalid(format!("profile {}: {}", file.display(), e))
    })
}

/// Merged view of the two fields verification cares about. CLI values win
/// whenever the CLI actually supplied them.
struct MergedParams {
    include: Vec<String>,
    filter: Option<GeneratorKind>,
    profile_filter: Option<String>,
}

fn merge_params(base: ProfileParams, cli: &CliParams) -> MergedParams {
    MergedParams {
        include: if cli.modes.is_empty() {
            base.include
        } else {
            cli.modes.clone()
        },
        filter: cli.filter,
        profile_filter: if cli.filter.is_some() {
            None
        } else {
            base.filter
        },
    }
}

/// Splits comma lists, trims, and drops repeats keeping the first occurrence.
fn normalize_modes(raw: Vec<String>) -> Result<Vec<String>, ConfigError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for entry in raw {
        for name in entry.split(',') {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::invalid("empty mode name"));
            }
            if seen.insert(name.to_string()) {
                out.push(name.to_string());
            }
        }
    }
    Ok(out)
}

pub fn resolve(
    cli: &CliParams,
    profile: Option<Profile>,
) -> Result<VerificationRequest, ConfigError> {
    let (base, explicit_assets) = match profile {
        Some(p) => (p.params.unwrap_or_default(), p.assets.unwrap_or_default()),
        None => (ProfileParams::default(), Vec::new()),
    };

    let merged = merge_params(base, cli);
    let filter = match (merged.filter, merged.profile_filter) {
        (Some(f), _) => Some(f),
        (None, Some(raw)) => Some(
            raw.parse::<GeneratorKind>()
                .map_err(|e| ConfigError::invalid(format!("filter: {}", e)))?,
        ),
        (None, None) => None,
    };

    let request = VerificationRequest {
        modes: normalize_modes(merged.include)?,
        explicit_assets,
        filter,
    };
    validate_request(&request)?;
    Ok(request)
}

fn has_placeholder(name: &str) -> bool {
    ["{size}", "{width}", "{height}"]
        .iter()
        .any(|p| name.contains(p))
}

fn validate_asset(index: usize, asset: &AssetSpec) -> Result<(), ConfigError> {
    let at = |msg: &str| ConfigError::invalid(format!("assets[{}]: {}", index, msg));

    if asset.name.trim().is_empty() {
        return Err(at("name must not be empty"));
    }
    if asset.folder.trim().is_empty() {
        return Err(at("folder must not be empty"));
    }
    if asset.generator.needs_sizes() && asset.sizes.is_empty() {
        return Err(at(&format!(
            "{} assets must declare at least one size",
            asset.generator
        )));
    }
    if asset
        .sizes
        .iter()
        .any(|s| matches!(s.dimensions(), (0, _) | (_, 0)))
    {
        return Err(at("sizes must be positive"));
    }
    if asset.sizes.len() > 1 && !has_placeholder(&asset.name) {
        return Err(at(
            "name needs a {size}, {width} or {height} placeholder when several sizes are declared",
        ));
    }
    Ok(())
}

pub fn validate_request(request: &VerificationRequest) -> Result<(), ConfigError> {
    if request.modes.iter().any(|m| m.trim().is_empty()) {
        return Err(ConfigError::invalid("empty mode name"));
    }
    for (i, asset) in request.explicit_assets.iter().enumerate() {
        validate_asset(i, asset)?;
    }
    Ok(())
}
