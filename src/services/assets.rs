use crate::cli::GeneratorKind;
use crate::domain::catalog::{ModeCatalog, ALL_MODES};
use crate::domain::models::{AssetGroup, AssetSet, AssetSpec, ExpectedFile, VerificationRequest};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

pub const PROFILE_GROUP: &str = "profile assets";
const PROFILE_LABEL: &str = "profile";

fn render_name(template: &str, width: u32, height: u32) -> String {
    template
        .replace("{size}", &width.to_string())
        .replace("{width}", &width.to_string())
        .replace("{height}", &height.to_string())
}

fn expected_file(
    root: &Path,
    spec: &AssetSpec,
    name: String,
    width: u32,
    height: u32,
) -> ExpectedFile {
    let folder = spec.folder.trim_matches('/');
    let relative_path = if folder.is_empty() {
        name
    } else {
        format!("{}/{}", folder, name)
    };
    ExpectedFile {
        absolute_path: root.join(&relative_path),
        relative_path,
        generator: spec.generator,
        width,
        height,
        platform: spec.platform.clone(),
    }
}

/// Turns manifest entries into concrete files: one per declared size, or a
/// single dimensionless file when the entry declares none.
pub fn expand_assets(root: &Path, specs: &[AssetSpec]) -> Vec<ExpectedFile> {
    let mut out = Vec::new();
    for spec in specs {
        if spec.sizes.is_empty() {
            out.push(expected_file(root, spec, spec.name.clone(), 0, 0));
            continue;
        }
        for size in &spec.sizes {
            let (width, height) = size.dimensions();
            let name = render_name(&spec.name, width, height);
            out.push(expected_file(root, spec, name, width, height));
        }
    }
    out
}

fn is_installed(root: &Path, folder: &str) -> bool {
    root.join(folder).is_dir()
}

/// `all` stands for every catalog mode, in catalog order; otherwise the
/// request order is kept.
fn requested_modes(modes: &[String], catalog: &ModeCatalog) -> Vec<String> {
    if modes.iter().any(|m| m == ALL_MODES) {
        catalog.iter().map(|m| m.name.clone()).collect()
    } else {
        modes.to_vec()
    }
}

pub fn build_asset_set(
    request: &VerificationRequest,
    catalog: &ModeCatalog,
    root: &Path,
) -> AssetSet {
    let mut groups = Vec::new();
    let mut labels = Vec::new();
    let mut seen = HashSet::new();

    for name in requested_modes(&request.modes, catalog) {
        if !seen.insert(name.clone()) {
            continue;
        }
        let Some(mode) = catalog.get(&name) else {
            debug!(mode = %name, "skipping mode unknown to the catalog");
            continue;
        };
        if !is_installed(root, &mode.folder) {
            debug!(mode = %name, folder = %mode.folder, "skipping mode that is not installed");
            continue;
        }
        let files = expand_assets(root, &mode.assets);
        if files.is_empty() {
            continue;
        }
        labels.push(mode.name.clone());
        groups.push(AssetGroup {
            name: mode.name.clone(),
            files,
        });
    }

    let profile_files = expand_assets(root, &request.explicit_assets);
    if !profile_files.is_empty() {
        labels.push(PROFILE_LABEL.to_string());
        groups.push(AssetGroup {
            name: PROFILE_GROUP.to_string(),
            files: profile_files,
        });
    }

    AssetSet {
        assets_of: labels.join(" | "),
        groups,
    }
}

pub fn filter_files(files: &[ExpectedFile], filter: Option<GeneratorKind>) -> Vec<&ExpectedFile> {
    files
        .iter()
        .filter(|f| filter.map(|k| f.generator == k).unwrap_or(true))
        .collect()
}
