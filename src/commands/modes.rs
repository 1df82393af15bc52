use crate::*;
use std::path::Path;

pub fn mode_reports(settings: &Settings, root: &Path) -> Vec<ModeReport> {
    settings
        .catalog()
        .iter()
        .map(|m| ModeReport {
            name: m.name.clone(),
            folder: m.folder.clone(),
            installed: root.join(&m.folder).is_dir(),
            files: expand_assets(root, &m.assets).len(),
        })
        .collect()
}

pub fn handle_modes(cli: &Cli, settings: &Settings, root: &Path) -> anyhow::Result<()> {
    let reports = mode_reports(settings, root);
    print_out(cli.json, &reports, |m| {
        format!(
            "{}\t{}\t{}\t{} files",
            m.name,
            m.folder,
            if m.installed { "installed" } else { "not installed" },
            m.files
        )
    })
}
